//! Section parsers for ASS script components
//!
//! Each parser consumes the cursor from directly after a `[Name]` header up to
//! the next line starting with `[` or the end of input. They share a
//! [`SectionReader`] that yields the section's non-blank lines and applies the
//! strictness settings when a violation may be downgraded to a warning.
//!
//! # Example
//!
//! ```rust
//! use ass_parser::{
//!     parser::{cursor::Cursor, errors::Warnings, sections::{self, SectionReader}},
//!     utils::LineEnding,
//!     StrictSettings,
//! };
//!
//! let source = "Format: Name, Fontsize\nStyle: Default,20\n";
//! let mut cursor = Cursor::new(source);
//! let mut warnings = Warnings::new();
//! let settings = StrictSettings::strict();
//! let mut reader = SectionReader::new(&mut cursor, LineEnding::Lf, &settings, &mut warnings);
//!
//! let mut styles = Vec::new();
//! sections::parse_styles(&mut reader, &mut styles)?;
//! assert_eq!(styles[0].name, "Default");
//! assert_eq!(styles[0].fontsize, 20);
//! # Ok::<(), ass_parser::ParseError>(())
//! ```

use alloc::{format, string::ToString, vec::Vec};

pub mod events;
pub mod extra;
pub mod format;
pub mod script_info;
pub mod styles;

pub use events::parse_events;
pub use extra::{parse_extra_section, skip_section};
pub use script_info::parse_script_info;
pub use styles::parse_styles;

use crate::{
    parser::{
        cursor::Cursor,
        errors::{FieldError, ParseError, Warning, Warnings},
        fields::{parse_str_as_unsigned_number_with_option, NumberParse},
        settings::StrictSettings,
    },
    utils::LineEnding,
};

/// Name of the metadata section
pub const SCRIPT_INFO: &str = "Script Info";
/// Name of the styles section
pub const V4_PLUS_STYLES: &str = "V4+ Styles";
/// Name of the legacy styles section
pub const V4_STYLES: &str = "V4 Styles";
/// Name of the events section
pub const EVENTS: &str = "Events";
/// Name of the embedded fonts section
pub const FONTS: &str = "Fonts";
/// Name of the embedded graphics section
pub const GRAPHICS: &str = "Graphics";

/// One non-blank line of a section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionLine<'a> {
    /// 1-based line number
    pub number: usize,
    /// Line text without its terminator
    pub text: &'a str,
}

impl<'a> SectionLine<'a> {
    /// Split at the first `:` into key and value
    ///
    /// Space separators directly after the `:` are not part of the value.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MissingFieldSeparator`] if the line has no `:`.
    pub fn split_field(&self, section: &str) -> Result<(&'a str, &'a str), ParseError> {
        let mut cursor = Cursor::new(self.text);
        let key = cursor
            .take_until(':', false)
            .ok_or_else(|| ParseError::MissingFieldSeparator {
                section: section.to_string(),
                line: self.number,
            })?;
        cursor.skip_space_separators();
        Ok((key, cursor.take_rest()))
    }
}

/// Shared state of the section currently being parsed
pub struct SectionReader<'c, 'a> {
    /// Cursor positioned inside the section
    cursor: &'c mut Cursor<'a>,
    /// Line terminator of the whole script
    line_ending: LineEnding,
    /// Leniency options
    settings: &'c StrictSettings,
    /// Warning sink for the whole parse
    warnings: &'c mut Warnings<'a>,
}

impl<'c, 'a> SectionReader<'c, 'a> {
    /// Create a reader over the section starting at the cursor
    pub fn new(
        cursor: &'c mut Cursor<'a>,
        line_ending: LineEnding,
        settings: &'c StrictSettings,
        warnings: &'c mut Warnings<'a>,
    ) -> Self {
        Self {
            cursor,
            line_ending,
            settings,
            warnings,
        }
    }

    /// Strictness settings in effect
    #[must_use]
    pub const fn settings(&self) -> &StrictSettings {
        self.settings
    }

    /// Next non-blank line, `None` at the next section header or end of input
    pub fn next_line(&mut self) -> Option<SectionLine<'a>> {
        loop {
            if self.cursor.is_eof() || self.cursor.starts_with("[") {
                return None;
            }
            let number = self.cursor.line();
            let text = self.cursor.take_line(self.line_ending, true)?;
            if !text.trim().is_empty() {
                return Some(SectionLine { number, text });
            }
        }
    }

    /// Record a warning
    pub fn warn(&mut self, warning: Warning<'a>) {
        self.warnings.push(warning);
    }

    /// Handle a field or line key the section does not know
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnexpectedField`] unless additional fields are allowed.
    pub fn unexpected_field(
        &mut self,
        section: &'a str,
        field: &'a str,
        line: usize,
    ) -> Result<(), ParseError> {
        if !self.settings.allow_additional_fields {
            return Err(ParseError::UnexpectedField {
                section: section.to_string(),
                field: field.to_string(),
                line,
            });
        }
        self.warn(Warning::UnexpectedField {
            section,
            field,
            line,
        });
        Ok(())
    }

    /// Parse an integer field, truncating when the settings allow it
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidFieldValue`] when the value is not a number
    /// and truncation does not apply.
    pub fn unsigned(&mut self, field: &str, value: &str, line: usize) -> Result<u32, ParseError> {
        let parsed =
            parse_str_as_unsigned_number_with_option(value, self.settings.allow_number_truncating)
                .map_err(field_error(field, value, line))?;

        if let NumberParse::Truncated {
            value: number,
            fractional,
        } = parsed
        {
            let reason = if fractional {
                "fractional number"
            } else {
                "not a valid decimal number"
            };
            self.warnings.push_simple(format!(
                "{reason} '{value}' in field '{field}' truncated to {number} (line {line})"
            ));
        }

        Ok(parsed.value())
    }
}

/// Wrap a [`FieldError`] with the field name, raw value and line
pub fn field_error<'v>(
    field: &'v str,
    value: &'v str,
    line: usize,
) -> impl FnOnce(FieldError) -> ParseError + 'v {
    move |source| ParseError::InvalidFieldValue {
        field: field.to_string(),
        value: value.to_string(),
        line,
        source,
    }
}

/// Validate the column count of a split data row
///
/// # Errors
///
/// Returns [`ParseError::TooManyFields`] or [`ParseError::TooFewFields`].
pub fn check_column_count(
    section: &str,
    expected: usize,
    found: usize,
    line: usize,
) -> Result<(), ParseError> {
    match found.cmp(&expected) {
        core::cmp::Ordering::Equal => Ok(()),
        core::cmp::Ordering::Greater => Err(ParseError::TooManyFields {
            section: section.to_string(),
            expected,
            found,
            line,
        }),
        core::cmp::Ordering::Less => Err(ParseError::TooFewFields {
            section: section.to_string(),
            expected,
            found,
            line,
        }),
    }
}

/// Columns already declared for the current section, if any
pub(crate) type FormatSpec<F> = Option<Vec<F>>;
