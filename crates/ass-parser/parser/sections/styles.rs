//! `[V4+ Styles]` section parser

use alloc::{string::ToString, vec::Vec};

use super::{
    check_column_count, field_error,
    format::{parse_format_line, split_row},
    FormatSpec, SectionReader, V4_PLUS_STYLES,
};
use crate::parser::{
    ast::{StyleEntry, StyleFormat},
    errors::ParseError,
    fields::{
        parse_str_as_bool, parse_str_as_border_style, parse_str_as_color, parse_str_as_double,
        parse_str_as_style_alignment,
    },
};

/// Parse one `[V4+ Styles]` section body, appending to `styles`
///
/// The section needs its own `Format` line before the first `Style` row.
///
/// # Errors
///
/// Returns the first fatal violation in the section.
pub fn parse_styles<'a>(
    reader: &mut SectionReader<'_, 'a>,
    styles: &mut Vec<StyleEntry<'a>>,
) -> Result<(), ParseError> {
    let mut format: FormatSpec<StyleFormat> = None;

    while let Some(line) = reader.next_line() {
        let (key, value) = line.split_field(V4_PLUS_STYLES)?;

        match key {
            "Format" => {
                if format.is_some() {
                    return Err(ParseError::DuplicateFormatLine {
                        section: V4_PLUS_STYLES.to_string(),
                        line: line.number,
                    });
                }
                format = Some(parse_format_line(
                    V4_PLUS_STYLES,
                    value,
                    line.number,
                    StyleFormat::from_key,
                )?);
            }
            "Style" => {
                let columns = format.as_deref().ok_or_else(|| ParseError::MissingFormatLine {
                    section: V4_PLUS_STYLES.to_string(),
                    line: line.number,
                })?;
                let style = parse_style_row(reader, columns, value, line.number)?;
                styles.push(style);
            }
            _ => reader.unexpected_field(V4_PLUS_STYLES, key, line.number)?,
        }
    }

    Ok(())
}

/// Split one style row and fill an entry column by column
fn parse_style_row<'a>(
    reader: &mut SectionReader<'_, 'a>,
    columns: &[StyleFormat],
    row: &'a str,
    line: usize,
) -> Result<StyleEntry<'a>, ParseError> {
    let values = split_row(row, columns.len(), false);
    check_column_count(V4_PLUS_STYLES, columns.len(), values.len(), line)?;

    let mut style = StyleEntry::default();
    for (&column, value) in columns.iter().zip(values) {
        assign_column(reader, &mut style, column, value, line)?;
    }
    Ok(style)
}

/// Convert one column value into its style field
fn assign_column<'a>(
    reader: &mut SectionReader<'_, 'a>,
    style: &mut StyleEntry<'a>,
    column: StyleFormat,
    value: &'a str,
    line: usize,
) -> Result<(), ParseError> {
    let name = column.name();
    let wrap = || field_error(name, value, line);

    match column {
        StyleFormat::Name => style.name = value,
        StyleFormat::Fontname => style.fontname = value,
        StyleFormat::Fontsize => style.fontsize = reader.unsigned(name, value, line)?,
        StyleFormat::PrimaryColour => {
            style.primary_colour = parse_str_as_color(value).map_err(wrap())?;
        }
        StyleFormat::SecondaryColour => {
            style.secondary_colour = parse_str_as_color(value).map_err(wrap())?;
        }
        StyleFormat::OutlineColour => {
            style.outline_colour = parse_str_as_color(value).map_err(wrap())?;
        }
        StyleFormat::BackColour => style.back_colour = parse_str_as_color(value).map_err(wrap())?,
        StyleFormat::Bold => style.bold = parse_str_as_bool(value).map_err(wrap())?,
        StyleFormat::Italic => style.italic = parse_str_as_bool(value).map_err(wrap())?,
        StyleFormat::Underline => style.underline = parse_str_as_bool(value).map_err(wrap())?,
        StyleFormat::StrikeOut => style.strike_out = parse_str_as_bool(value).map_err(wrap())?,
        StyleFormat::ScaleX => style.scale_x = reader.unsigned(name, value, line)?,
        StyleFormat::ScaleY => style.scale_y = reader.unsigned(name, value, line)?,
        StyleFormat::Spacing => style.spacing = parse_str_as_double(value).map_err(wrap())?,
        StyleFormat::Angle => style.angle = parse_str_as_double(value).map_err(wrap())?,
        StyleFormat::BorderStyle => {
            style.border_style = parse_str_as_border_style(value).map_err(wrap())?;
        }
        StyleFormat::Outline => style.outline = parse_str_as_double(value).map_err(wrap())?,
        StyleFormat::Shadow => style.shadow = parse_str_as_double(value).map_err(wrap())?,
        StyleFormat::Alignment => {
            style.alignment = parse_str_as_style_alignment(value).map_err(wrap())?;
        }
        StyleFormat::MarginL => style.margin_l = reader.unsigned(name, value, line)?,
        StyleFormat::MarginR => style.margin_r = reader.unsigned(name, value, line)?,
        StyleFormat::MarginV => style.margin_v = reader.unsigned(name, value, line)?,
        StyleFormat::Encoding => style.encoding = reader.unsigned(name, value, line)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        parser::{
            ast::{Alignment, AssColor, BorderStyle},
            cursor::Cursor,
            errors::{FieldError, Warnings},
        },
        utils::LineEnding,
        StrictSettings,
    };
    use pretty_assertions::assert_eq;

    const FULL_FORMAT: &str = "Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, OutlineColour, BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, Encoding\n";

    fn parse<'a>(
        source: &'a str,
        settings: &StrictSettings,
        warnings: &mut Warnings<'a>,
    ) -> Result<Vec<StyleEntry<'a>>, ParseError> {
        let mut cursor = Cursor::new(source);
        let mut reader = SectionReader::new(&mut cursor, LineEnding::Lf, settings, warnings);
        let mut styles = Vec::new();
        parse_styles(&mut reader, &mut styles)?;
        Ok(styles)
    }

    #[test]
    fn full_style_row() {
        let source = alloc::format!(
            "{FULL_FORMAT}Style: Default,Arial,20,&H00FFFFFF,&H000000FF,&H00000000,&H80000000,-1,0,0,0,100,100,0,0,1,2.5,0,2,10,10,10,1\n"
        );
        let mut warnings = Warnings::new();
        let styles = parse(&source, &StrictSettings::strict(), &mut warnings).unwrap();

        assert_eq!(styles.len(), 1);
        let style = &styles[0];
        assert_eq!(style.name, "Default");
        assert_eq!(style.fontname, "Arial");
        assert_eq!(style.fontsize, 20);
        assert_eq!(style.primary_colour, AssColor::new(0xFF, 0xFF, 0xFF, 0));
        assert_eq!(style.secondary_colour, AssColor::new(0xFF, 0, 0, 0));
        assert_eq!(style.back_colour, AssColor::new(0, 0, 0, 0x80));
        assert!(style.bold);
        assert!(!style.italic);
        assert_eq!(style.scale_x, 100);
        assert_eq!(style.border_style, BorderStyle::Outline);
        assert_eq!(style.outline, 2.5);
        assert_eq!(style.alignment, Alignment::BottomCenter);
        assert_eq!(style.margin_v, 10);
        assert_eq!(style.encoding, 1);
    }

    #[test]
    fn format_order_drives_columns() {
        let source = "Format: Fontsize, Name\nStyle: 20,Default\n";
        let mut warnings = Warnings::new();
        let styles = parse(source, &StrictSettings::strict(), &mut warnings).unwrap();
        assert_eq!(styles[0].name, "Default");
        assert_eq!(styles[0].fontsize, 20);
        assert_eq!(styles[0].fontname, "");
    }

    #[test]
    fn row_before_format_is_fatal() {
        let mut warnings = Warnings::new();
        let error = parse("Style: Default\n", &StrictSettings::non_strict(), &mut warnings)
            .unwrap_err();
        assert!(matches!(error, ParseError::MissingFormatLine { line: 1, .. }));
    }

    #[test]
    fn second_format_is_fatal() {
        let mut warnings = Warnings::new();
        let error = parse(
            "Format: Name\nFormat: Name\n",
            &StrictSettings::non_strict(),
            &mut warnings,
        )
        .unwrap_err();
        assert!(matches!(error, ParseError::DuplicateFormatLine { line: 2, .. }));
    }

    #[test]
    fn column_mismatch_names_counts() {
        let mut warnings = Warnings::new();
        let error = parse(
            "Format: Name, Fontsize\nStyle: Default,20,extra\n",
            &StrictSettings::strict(),
            &mut warnings,
        )
        .unwrap_err();
        assert_eq!(
            error,
            ParseError::TooManyFields {
                section: V4_PLUS_STYLES.into(),
                expected: 2,
                found: 3,
                line: 2
            }
        );
        assert!(error.to_string().contains('3'));
    }

    #[test]
    fn conversion_error_is_wrapped() {
        let mut warnings = Warnings::new();
        let error = parse(
            "Format: Name, PrimaryColour\nStyle: Default,&H00FFFFFG\n",
            &StrictSettings::non_strict(),
            &mut warnings,
        )
        .unwrap_err();
        assert_eq!(
            error,
            ParseError::InvalidFieldValue {
                field: "PrimaryColour".into(),
                value: "&H00FFFFFG".into(),
                line: 2,
                source: FieldError::ColorDigit
            }
        );
    }

    #[test]
    fn truncated_fontsize() {
        let source = "Format: Name, Fontsize\nStyle: Default,12abc\n";
        let mut warnings = Warnings::new();
        assert!(parse(source, &StrictSettings::strict(), &mut warnings).is_err());

        let settings = StrictSettings::strict().with_allow_number_truncating(true);
        let mut warnings = Warnings::new();
        let styles = parse(source, &settings, &mut warnings).unwrap();
        assert_eq!(styles[0].fontsize, 12);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn unknown_line_key() {
        let source = "Format: Name\nOldStyle: Default\nStyle: Default\n";
        let mut warnings = Warnings::new();
        assert!(matches!(
            parse(source, &StrictSettings::strict(), &mut warnings),
            Err(ParseError::UnexpectedField { line: 2, .. })
        ));

        let settings = StrictSettings::strict().with_allow_additional_fields(true);
        let mut warnings = Warnings::new();
        let styles = parse(source, &settings, &mut warnings).unwrap();
        assert_eq!(styles.len(), 1);
        assert_eq!(warnings.len(), 1);
    }
}
