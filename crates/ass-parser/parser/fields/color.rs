//! Color field parser for `&HAABBGGRR` values

use crate::parser::{ast::AssColor, cursor::Cursor, errors::FieldError};

/// `&H` followed by eight hex digits
const COLOR_LENGTH: usize = 10;

/// Value of one ASCII hex digit
fn hex_value(digit: u8) -> Result<u8, FieldError> {
    match digit {
        b'0'..=b'9' => Ok(digit - b'0'),
        b'a'..=b'f' => Ok(digit - b'a' + 10),
        b'A'..=b'F' => Ok(digit - b'A' + 10),
        _ => Err(FieldError::ColorDigit),
    }
}

/// Parse an `&HAABBGGRR` color
///
/// The value must be exactly ten characters: the `&H` prefix followed by four
/// hex bytes in alpha, blue, green, red order.
///
/// # Errors
///
/// Returns [`FieldError::ColorLength`], [`FieldError::ColorPrefix`] or
/// [`FieldError::ColorDigit`] for the respective violation.
///
/// # Example
///
/// ```rust
/// use ass_parser::parser::fields::parse_str_as_color;
///
/// let color = parse_str_as_color("&H00FF0080")?;
/// assert_eq!((color.a, color.b, color.g, color.r), (0x00, 0xFF, 0x00, 0x80));
/// # Ok::<(), ass_parser::parser::errors::FieldError>(())
/// ```
pub fn parse_str_as_color(value: &str) -> Result<AssColor, FieldError> {
    let length = value.chars().count();
    if length != COLOR_LENGTH {
        return Err(FieldError::ColorLength(length));
    }

    let mut cursor = Cursor::new(value);
    if !cursor.expect("&H") {
        return Err(FieldError::ColorPrefix);
    }

    let mut components = [0_u8; 4];
    for component in &mut components {
        let pair = cursor.take_chars(2).ok_or(FieldError::ColorDigit)?;
        let &[high, low] = pair.as_bytes() else {
            return Err(FieldError::ColorDigit);
        };
        *component = (hex_value(high)? << 4) | hex_value(low)?;
    }

    let [a, b, g, r] = components;
    Ok(AssColor { r, g, b, a })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_aabbggrr() {
        assert_eq!(
            parse_str_as_color("&H00FF0080"),
            Ok(AssColor {
                r: 0x80,
                g: 0x00,
                b: 0xFF,
                a: 0x00
            })
        );
        assert_eq!(
            parse_str_as_color("&Hc0ffee12"),
            Ok(AssColor::new(0x12, 0xee, 0xff, 0xc0))
        );
    }

    #[test]
    fn every_digit_position_is_checked() {
        for position in 2..10 {
            let mut text = String::from("&H00FF0080");
            text.replace_range(position..=position, "G");
            assert_eq!(
                parse_str_as_color(&text),
                Err(FieldError::ColorDigit),
                "non-hex digit at {position} accepted"
            );
        }
    }

    #[test]
    fn wrong_length_or_prefix() {
        assert_eq!(parse_str_as_color("&HFFFFFF"), Err(FieldError::ColorLength(8)));
        assert_eq!(parse_str_as_color("&H00FF0080&"), Err(FieldError::ColorLength(11)));
        assert_eq!(parse_str_as_color("0x00FF0080"), Err(FieldError::ColorPrefix));
        assert_eq!(parse_str_as_color("&h00FF0080"), Err(FieldError::ColorPrefix));
    }

    #[test]
    fn multibyte_digit_is_rejected() {
        assert_eq!(parse_str_as_color("&H00FF008é"), Err(FieldError::ColorDigit));
    }
}
