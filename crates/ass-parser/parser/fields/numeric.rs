//! Numeric field parsers
//!
//! Integers are plain ASCII digit runs checked against `u32` overflow. An
//! empty value reads as zero. Doubles are a digit prefix with an optional
//! fractional suffix.
//!
//! Truncation is gated on the leading digit run alone. Whether the whole text
//! also reads as a double only selects the warning, so `12abc` truncates to 12
//! just like `12.5` does, even though a double-gated reading would reject it.

use crate::parser::{ast::MarginValue, errors::FieldError};

/// Result of an integer parse that may have truncated its input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberParse {
    /// Whole input was a valid number
    Exact(u32),
    /// Leading digits only, the rest was discarded
    Truncated {
        /// Value of the leading digits
        value: u32,
        /// Whether the full input was a valid fractional number
        fractional: bool,
    },
}

impl NumberParse {
    /// Parsed value regardless of truncation
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            Self::Exact(value) | Self::Truncated { value, .. } => value,
        }
    }

    /// Whether input was discarded
    #[must_use]
    pub const fn is_truncated(self) -> bool {
        matches!(self, Self::Truncated { .. })
    }
}

/// Value of the leading digit run and the byte length it occupies
fn leading_digits(value: &str) -> Result<(u32, usize), FieldError> {
    let mut number: u32 = 0;

    for (index, byte) in value.bytes().enumerate() {
        if !byte.is_ascii_digit() {
            return Ok((number, index));
        }
        number = number
            .checked_mul(10)
            .and_then(|n| n.checked_add(u32::from(byte - b'0')))
            .ok_or(FieldError::NumberOverflow)?;
    }

    Ok((number, value.len()))
}

/// Parse an unsigned decimal integer
///
/// # Errors
///
/// Returns [`FieldError::NotANumber`] for any non-digit character and
/// [`FieldError::NumberOverflow`] for values beyond `u32::MAX`.
pub fn parse_str_as_unsigned_number(value: &str) -> Result<u32, FieldError> {
    let (number, consumed) = leading_digits(value)?;
    if consumed == value.len() {
        Ok(number)
    } else {
        Err(FieldError::NotANumber)
    }
}

/// Parse an unsigned integer, optionally truncating a non-digit suffix
///
/// Truncation needs at least one leading digit. The full input is re-read as
/// a double to tell a dropped fraction (`12.5`) from a dropped garbage suffix
/// (`12abc`); the caller records the matching warning.
///
/// # Errors
///
/// Same as [`parse_str_as_unsigned_number`] when truncation does not apply.
pub fn parse_str_as_unsigned_number_with_option(
    value: &str,
    allow_truncating: bool,
) -> Result<NumberParse, FieldError> {
    let (number, consumed) = leading_digits(value)?;

    if consumed == value.len() {
        return Ok(NumberParse::Exact(number));
    }

    if allow_truncating && consumed > 0 {
        return Ok(NumberParse::Truncated {
            value: number,
            fractional: parse_str_as_double(value).is_ok(),
        });
    }

    Err(FieldError::NotANumber)
}

/// Fold a digit run into a float, rejecting anything else
fn digits_as_f64(digits: &str) -> Result<f64, FieldError> {
    digits.bytes().try_fold(0.0_f64, |acc, byte| {
        if byte.is_ascii_digit() {
            Ok(acc.mul_add(10.0, f64::from(byte - b'0')))
        } else {
            Err(FieldError::NotANumber)
        }
    })
}

/// Parse a decimal number with an optional fractional part
///
/// A single leading `-` is accepted but does not negate the value; scripts in
/// the wild depend on this reading, so `-1.5` parses as `1.5`.
///
/// # Errors
///
/// Returns [`FieldError::NotANumber`] for any character other than digits, the
/// leading `-` and one `.`.
pub fn parse_str_as_double(value: &str) -> Result<f64, FieldError> {
    let unsigned = value.strip_prefix('-').unwrap_or(value);

    let Some((whole, fraction)) = unsigned.split_once('.') else {
        return digits_as_f64(unsigned);
    };

    let whole = digits_as_f64(whole)?;
    if fraction.is_empty() {
        return Ok(whole);
    }

    let scale = i32::try_from(fraction.len()).unwrap_or(i32::MAX);
    Ok(whole + digits_as_f64(fraction)? / 10_f64.powi(scale))
}

/// Parse the numeric bool convention, `-1` or `0`
///
/// # Errors
///
/// Returns [`FieldError::InvalidBool`] for anything else.
pub fn parse_str_as_bool(value: &str) -> Result<bool, FieldError> {
    match value {
        "-1" => Ok(true),
        "0" => Ok(false),
        _ => Err(FieldError::InvalidBool),
    }
}

/// Parse the word bool convention, `yes` or `no`
///
/// # Errors
///
/// Returns [`FieldError::InvalidStrBool`] for anything else.
pub fn parse_str_as_str_bool(value: &str) -> Result<bool, FieldError> {
    match value {
        "yes" => Ok(true),
        "no" => Ok(false),
        _ => Err(FieldError::InvalidStrBool),
    }
}

/// Parse an event margin, `0000` meaning "use the style margin"
///
/// # Errors
///
/// Fails like [`parse_str_as_unsigned_number`] for anything but the sentinel.
pub fn parse_str_as_margin_value(value: &str) -> Result<MarginValue, FieldError> {
    if value == "0000" {
        return Ok(MarginValue::Default);
    }
    parse_str_as_unsigned_number(value).map(MarginValue::Explicit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsigned_numbers() {
        assert_eq!(parse_str_as_unsigned_number("1920"), Ok(1920));
        assert_eq!(parse_str_as_unsigned_number("007"), Ok(7));
        assert_eq!(parse_str_as_unsigned_number(""), Ok(0));
        assert_eq!(parse_str_as_unsigned_number("4294967295"), Ok(u32::MAX));
        assert_eq!(
            parse_str_as_unsigned_number("4294967296"),
            Err(FieldError::NumberOverflow)
        );
        assert_eq!(parse_str_as_unsigned_number("-1"), Err(FieldError::NotANumber));
        assert_eq!(parse_str_as_unsigned_number(" 1"), Err(FieldError::NotANumber));
        assert_eq!(parse_str_as_unsigned_number("١"), Err(FieldError::NotANumber));
    }

    #[test]
    fn truncation_requires_leading_digit() {
        assert_eq!(
            parse_str_as_unsigned_number_with_option("12abc", true),
            Ok(NumberParse::Truncated {
                value: 12,
                fractional: false
            })
        );
        assert_eq!(
            parse_str_as_unsigned_number_with_option("12.5", true),
            Ok(NumberParse::Truncated {
                value: 12,
                fractional: true
            })
        );
        assert_eq!(
            parse_str_as_unsigned_number_with_option("abc", true),
            Err(FieldError::NotANumber)
        );
        assert_eq!(
            parse_str_as_unsigned_number_with_option("12abc", false),
            Err(FieldError::NotANumber)
        );
    }

    #[test]
    fn truncation_is_not_gated_on_double_parse() {
        assert_eq!(parse_str_as_double("12abc"), Err(FieldError::NotANumber));
        assert!(parse_str_as_double("12.5").is_ok());

        let garbage = parse_str_as_unsigned_number_with_option("12abc", true).unwrap();
        let fraction = parse_str_as_unsigned_number_with_option("12.5", true).unwrap();
        assert_eq!(garbage.value(), fraction.value());
        assert!(garbage.is_truncated() && fraction.is_truncated());
    }

    #[test]
    fn exact_numbers_ignore_truncation_flag() {
        let parsed = parse_str_as_unsigned_number_with_option("42", true).unwrap();
        assert_eq!(parsed, NumberParse::Exact(42));
        assert!(!parsed.is_truncated());
        assert_eq!(parsed.value(), 42);
    }

    #[test]
    fn doubles() {
        assert_eq!(parse_str_as_double("2"), Ok(2.0));
        assert_eq!(parse_str_as_double("2."), Ok(2.0));
        assert_eq!(parse_str_as_double("1.25"), Ok(1.25));
        assert_eq!(parse_str_as_double("0.05"), Ok(0.05));
        assert_eq!(parse_str_as_double("1.2.3"), Err(FieldError::NotANumber));
        assert_eq!(parse_str_as_double("1e5"), Err(FieldError::NotANumber));
    }

    #[test]
    fn double_leading_minus_is_ignored() {
        assert_eq!(parse_str_as_double("-1.5"), Ok(1.5));
        assert_eq!(parse_str_as_double("-90"), Ok(90.0));
        assert_eq!(parse_str_as_double("--1"), Err(FieldError::NotANumber));
    }

    #[test]
    fn bool_conventions_are_distinct() {
        assert_eq!(parse_str_as_bool("-1"), Ok(true));
        assert_eq!(parse_str_as_bool("0"), Ok(false));
        assert_eq!(parse_str_as_bool("1"), Err(FieldError::InvalidBool));
        assert_eq!(parse_str_as_bool("yes"), Err(FieldError::InvalidBool));

        assert_eq!(parse_str_as_str_bool("yes"), Ok(true));
        assert_eq!(parse_str_as_str_bool("no"), Ok(false));
        assert_eq!(parse_str_as_str_bool("-1"), Err(FieldError::InvalidStrBool));
        assert_eq!(parse_str_as_str_bool("Yes"), Err(FieldError::InvalidStrBool));
    }

    #[test]
    fn margins() {
        assert_eq!(parse_str_as_margin_value("0000"), Ok(MarginValue::Default));
        assert_eq!(parse_str_as_margin_value("0012"), Ok(MarginValue::Explicit(12)));
        assert_eq!(parse_str_as_margin_value("0"), Ok(MarginValue::Explicit(0)));
        assert_eq!(parse_str_as_margin_value("x"), Err(FieldError::NotANumber));
    }
}
