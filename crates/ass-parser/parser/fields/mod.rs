//! Stateless field value parsers
//!
//! Each parser converts one borrowed field value into its typed form or a
//! [`FieldError`](crate::parser::errors::FieldError). Section parsers add the
//! field name, raw text and line when wrapping the error.
//!
//! # Example
//!
//! ```rust
//! use ass_parser::parser::{ast::MarginValue, fields};
//!
//! assert_eq!(fields::parse_str_as_unsigned_number("1920"), Ok(1920));
//! assert_eq!(fields::parse_str_as_margin_value("0000"), Ok(MarginValue::Default));
//! assert_eq!(fields::parse_str_as_bool("-1"), Ok(true));
//! ```

mod color;
mod enums;
mod numeric;
mod time;

pub use color::parse_str_as_color;
pub use enums::{
    parse_str_as_border_style, parse_str_as_script_type, parse_str_as_style_alignment,
    parse_str_as_wrap_style,
};
pub use numeric::{
    parse_str_as_bool, parse_str_as_double, parse_str_as_margin_value, parse_str_as_str_bool,
    parse_str_as_unsigned_number, parse_str_as_unsigned_number_with_option, NumberParse,
};
pub use time::parse_str_as_time;
