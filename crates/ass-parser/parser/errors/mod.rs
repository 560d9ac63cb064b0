//! Error and warning types for ASS script validation
//!
//! # Module Organization
//!
//! - `parse_error` - Fatal errors that abort a parse
//! - `field_error` - Conversion failures of single field values
//! - `warning` - Recoverable issues downgraded by leniency settings
//! - `parse_result` - Result types carrying warnings next to the result

pub mod field_error;
pub mod parse_error;
pub mod parse_result;
pub mod warning;

pub use field_error::FieldError;
pub use parse_error::{ErrorCategory, IoErrorReason, ParseError};
pub use parse_result::{ParseOutcome, ParseResult};
pub use warning::{Warning, Warnings};
