//! Capture of unrecognized sections and skipping of embedded binary sections

use super::SectionReader;
use crate::parser::{ast::ExtraSection, errors::ParseError};

/// Capture every `name: value` line of an unrecognized section
///
/// A repeated name replaces the earlier value in place.
///
/// # Errors
///
/// Returns [`ParseError::MissingFieldSeparator`] for a line without `:`.
pub fn parse_extra_section<'a>(
    reader: &mut SectionReader<'_, 'a>,
    section_name: &str,
    section: &mut ExtraSection<'a>,
) -> Result<(), ParseError> {
    while let Some(line) = reader.next_line() {
        let (field, value) = line.split_field(section_name)?;
        section.insert(field, value);
    }
    Ok(())
}

/// Consume a section without interpreting it
///
/// Used for `[Fonts]` and `[Graphics]`, whose uuencoded lines have no
/// `name: value` structure.
pub fn skip_section(reader: &mut SectionReader<'_, '_>) -> usize {
    let mut skipped = 0;
    while reader.next_line().is_some() {
        skipped += 1;
    }
    skipped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        parser::{cursor::Cursor, errors::Warnings},
        utils::LineEnding,
        StrictSettings,
    };
    use pretty_assertions::assert_eq;

    #[test]
    fn captures_in_order_and_replaces_in_place() {
        let source = "Last Style Storage: Default\nAudio File: a.wav\nLast Style Storage:\u{00A0}Alt\n";
        let mut cursor = Cursor::new(source);
        let mut warnings = Warnings::new();
        let settings = StrictSettings::strict();
        let mut reader = SectionReader::new(&mut cursor, LineEnding::Lf, &settings, &mut warnings);

        let mut section = ExtraSection::new();
        parse_extra_section(&mut reader, "Aegisub Project Garbage", &mut section).unwrap();

        let fields: Vec<_> = section.fields.iter().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(
            fields,
            [("Last Style Storage", "Alt"), ("Audio File", "a.wav")]
        );
    }

    #[test]
    fn line_without_separator_is_fatal() {
        let mut cursor = Cursor::new("just text\n");
        let mut warnings = Warnings::new();
        let settings = StrictSettings::non_strict();
        let mut reader = SectionReader::new(&mut cursor, LineEnding::Lf, &settings, &mut warnings);

        let mut section = ExtraSection::new();
        let error = parse_extra_section(&mut reader, "Custom", &mut section).unwrap_err();
        assert_eq!(
            error,
            ParseError::MissingFieldSeparator {
                section: "Custom".into(),
                line: 1
            }
        );
    }

    #[test]
    fn skip_stops_at_next_header() {
        let mut cursor = Cursor::new("fontname: a.ttf\nM)``!\n\n[Events]\n");
        let mut warnings = Warnings::new();
        let settings = StrictSettings::strict();
        let mut reader = SectionReader::new(&mut cursor, LineEnding::Lf, &settings, &mut warnings);

        assert_eq!(skip_section(&mut reader), 2);
        assert_eq!(cursor.remaining(), "[Events]\n");
    }
}
