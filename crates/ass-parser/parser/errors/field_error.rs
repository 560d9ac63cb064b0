//! Conversion failures of individual field values
//!
//! These are reported by the stateless value parsers in [`crate::parser::fields`]
//! and wrapped into [`super::ParseError::InvalidFieldValue`] by the section
//! parsers, which add the field name, raw text and line.

use thiserror::Error;

/// Reason a raw field value could not be converted
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("not a valid decimal number")]
    NotANumber,

    #[error("number does not fit into 32 bits")]
    NumberOverflow,

    #[error("not a valid bool, expected '-1' or '0'")]
    InvalidBool,

    #[error("not a valid str bool, expected 'yes' or 'no'")]
    InvalidStrBool,

    #[error("not a valid color, expected 10 characters but got {0}")]
    ColorLength(usize),

    #[error("not a valid color, invalid prefix, expected '&H'")]
    ColorPrefix,

    #[error("not a valid hex color number")]
    ColorDigit,

    #[error("not a valid time, expected 10 characters but got {0}")]
    TimeLength(usize),

    #[error("not a valid time, missing '{0}'")]
    TimeSeparator(&'static str),

    #[error("not a valid border style: {0}")]
    InvalidBorderStyle(u32),

    #[error("not a valid alignment: {0}")]
    InvalidAlignment(u32),

    #[error("not a valid wrap style: {0}")]
    InvalidWrapStyle(u32),

    #[error("invalid script type value")]
    InvalidScriptType,
}
