//! Timestamp field parser for `H:MM:SS.hh` values

use crate::parser::{ast::AssTime, cursor::Cursor, errors::FieldError};

use super::numeric::parse_str_as_unsigned_number;

/// `H:MM:SS.hh`
const TIME_LENGTH: usize = 10;

/// Read exactly `digits` ASCII digits
fn take_component(cursor: &mut Cursor<'_>, digits: usize) -> Result<u8, FieldError> {
    let text = cursor.take_chars(digits).ok_or(FieldError::NotANumber)?;
    let value = parse_str_as_unsigned_number(text)?;
    u8::try_from(value).map_err(|_| FieldError::NumberOverflow)
}

/// Parse a `H:MM:SS.hh` timestamp
///
/// Hours take a single digit. The separator before the hundredths may be `:`
/// or `.`, since both appear in real scripts.
///
/// # Errors
///
/// Returns [`FieldError::TimeLength`] unless the value is exactly ten
/// characters, [`FieldError::TimeSeparator`] for a misplaced separator and
/// [`FieldError::NotANumber`] for non-digit components.
pub fn parse_str_as_time(value: &str) -> Result<AssTime, FieldError> {
    let length = value.chars().count();
    if length != TIME_LENGTH {
        return Err(FieldError::TimeLength(length));
    }

    let mut cursor = Cursor::new(value);

    let hour = take_component(&mut cursor, 1)?;
    if !cursor.expect(":") {
        return Err(FieldError::TimeSeparator(":"));
    }
    let min = take_component(&mut cursor, 2)?;
    if !cursor.expect(":") {
        return Err(FieldError::TimeSeparator(":"));
    }
    let sec = take_component(&mut cursor, 2)?;
    if !cursor.expect(".") && !cursor.expect(":") {
        return Err(FieldError::TimeSeparator(". or :"));
    }
    let hundredths = take_component(&mut cursor, 2)?;

    Ok(AssTime {
        hour,
        min,
        sec,
        hundredths,
    })
}
