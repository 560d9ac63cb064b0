//! Closed enumeration field parsers
//!
//! Each parses an unsigned number and maps it, rejecting out-of-range values.
//! These never truncate, whatever the strictness settings say.

use crate::{
    parser::{
        ast::{Alignment, BorderStyle, WrapStyle},
        errors::FieldError,
    },
    ScriptType,
};

use super::numeric::parse_str_as_unsigned_number;

/// Parse a style border style, `1` or `3`
///
/// # Errors
///
/// Returns [`FieldError::InvalidBorderStyle`] for other numbers.
pub fn parse_str_as_border_style(value: &str) -> Result<BorderStyle, FieldError> {
    match parse_str_as_unsigned_number(value)? {
        1 => Ok(BorderStyle::Outline),
        3 => Ok(BorderStyle::OpaqueBox),
        other => Err(FieldError::InvalidBorderStyle(other)),
    }
}

/// Parse a numpad style alignment, `1` to `9`
///
/// # Errors
///
/// Returns [`FieldError::InvalidAlignment`] for other numbers.
pub fn parse_str_as_style_alignment(value: &str) -> Result<Alignment, FieldError> {
    let alignment = match parse_str_as_unsigned_number(value)? {
        1 => Alignment::BottomLeft,
        2 => Alignment::BottomCenter,
        3 => Alignment::BottomRight,
        4 => Alignment::MiddleLeft,
        5 => Alignment::MiddleCenter,
        6 => Alignment::MiddleRight,
        7 => Alignment::TopLeft,
        8 => Alignment::TopCenter,
        9 => Alignment::TopRight,
        other => return Err(FieldError::InvalidAlignment(other)),
    };
    Ok(alignment)
}

/// Parse a script wrap style, `0` to `3`
///
/// # Errors
///
/// Returns [`FieldError::InvalidWrapStyle`] for other numbers.
pub fn parse_str_as_wrap_style(value: &str) -> Result<WrapStyle, FieldError> {
    match parse_str_as_unsigned_number(value)? {
        0 => Ok(WrapStyle::Smart),
        1 => Ok(WrapStyle::EndOfLine),
        2 => Ok(WrapStyle::NoWrap),
        3 => Ok(WrapStyle::SmartLowerWider),
        other => Err(FieldError::InvalidWrapStyle(other)),
    }
}

/// Parse a `ScriptType` value
///
/// # Errors
///
/// Returns [`FieldError::InvalidScriptType`] for anything but the v4.00 and
/// v4.00+ spellings.
pub fn parse_str_as_script_type(value: &str) -> Result<ScriptType, FieldError> {
    ScriptType::from_header(value).ok_or(FieldError::InvalidScriptType)
}
