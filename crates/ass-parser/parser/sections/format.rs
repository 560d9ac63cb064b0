//! `Format` line handling shared by the styles and events sections

use alloc::{string::ToString, vec::Vec};

use crate::parser::errors::ParseError;

/// Split a `Format` value into known columns
///
/// Keys are separated by `,` and trimmed of surrounding whitespace before the
/// exact-name lookup. There is no lenient path for unknown keys.
///
/// # Errors
///
/// Returns [`ParseError::EmptyFormatKey`] or [`ParseError::UnknownFormatKey`].
pub fn parse_format_line<F>(
    section: &str,
    value: &str,
    line: usize,
    lookup: impl Fn(&str) -> Option<F>,
) -> Result<Vec<F>, ParseError> {
    value
        .split(',')
        .map(str::trim)
        .map(|key| {
            if key.is_empty() {
                return Err(ParseError::EmptyFormatKey {
                    section: section.to_string(),
                    line,
                });
            }
            lookup(key).ok_or_else(|| ParseError::UnknownFormatKey {
                section: section.to_string(),
                key: key.to_string(),
                line,
            })
        })
        .collect()
}

/// Split a data row into its column values
///
/// With `rest_in_last` the final column takes the remainder of the row,
/// commas included. An empty trailing column still counts.
#[must_use]
pub fn split_row(row: &str, columns: usize, rest_in_last: bool) -> Vec<&str> {
    if rest_in_last {
        row.splitn(columns.max(1), ',').collect()
    } else {
        row.split(',').collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ast::{EventFormat, StyleFormat};

    #[test]
    fn format_keys_are_trimmed() {
        let columns =
            parse_format_line("V4+ Styles", "Name,  Fontsize ,Bold", 3, StyleFormat::from_key)
                .unwrap();
        assert_eq!(
            columns,
            [StyleFormat::Name, StyleFormat::Fontsize, StyleFormat::Bold]
        );
    }

    #[test]
    fn unknown_format_key_is_fatal() {
        let error =
            parse_format_line("Events", "Layer, Colour", 7, EventFormat::from_key).unwrap_err();
        assert_eq!(
            error,
            ParseError::UnknownFormatKey {
                section: "Events".into(),
                key: "Colour".into(),
                line: 7
            }
        );
    }

    #[test]
    fn empty_format_key_is_fatal() {
        let error = parse_format_line("Events", "Layer,,Text", 2, EventFormat::from_key).unwrap_err();
        assert!(matches!(error, ParseError::EmptyFormatKey { line: 2, .. }));
    }

    #[test]
    fn text_column_keeps_commas() {
        assert_eq!(split_row("0,Default,Hi, there,", 3, true), ["0", "Default", "Hi, there,"]);
        assert_eq!(split_row("0,Default,Hi, there", 3, false).len(), 4);
    }

    #[test]
    fn trailing_empty_column_counts() {
        assert_eq!(split_row("0,Default,", 3, true), ["0", "Default", ""]);
        assert_eq!(split_row("a,", 2, false), ["a", ""]);
    }
}
