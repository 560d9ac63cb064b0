//! Top-level parse driver
//!
//! Classifies the line ending, requires the leading `[Script Info]` section and
//! then reads `[Name]` headers, dispatching each section body to its parser
//! until the input is exhausted. The first fatal error aborts the parse.

use alloc::vec::Vec;

use super::{
    ast::{AssDocument, ExtraSection, ExtraSections, FileProps, ScriptInfo},
    cursor::Cursor,
    errors::{ParseError, ParseOutcome, ParseResult, Warnings},
    sections::{self, SectionReader},
    settings::StrictSettings,
};
use crate::utils::{create_ordered_map, detect_line_ending, FileEncoding, LineEnding};

/// Literal first line of every script
const SCRIPT_INFO_HEADER: &str = "[Script Info]";

/// Internal parser state for one decoded script
pub(super) struct Parser<'s, 'a> {
    /// Cursor over the script content after the byte order mark
    cursor: Cursor<'a>,
    /// Leniency options
    settings: &'s StrictSettings,
    /// Warnings recorded so far, including decode warnings
    warnings: Warnings<'a>,
}

impl<'s, 'a> Parser<'s, 'a> {
    /// Create a parser for decoded content
    pub(super) const fn new(
        content: &'a str,
        settings: &'s StrictSettings,
        warnings: Warnings<'a>,
    ) -> Self {
        Self {
            cursor: Cursor::new(content),
            settings,
            warnings,
        }
    }

    /// Parse the whole script
    pub(super) fn parse(mut self, encoding: FileEncoding) -> ParseOutcome<'a, AssDocument<'a>> {
        let result = self.parse_document(encoding);
        if let Err(error) = &result {
            log::debug!("parse aborted: {error}");
        }
        ParseOutcome::with_warnings(result, self.warnings)
    }

    fn parse_document(&mut self, encoding: FileEncoding) -> ParseResult<AssDocument<'a>> {
        let line_ending = detect_line_ending(self.cursor.remaining())?;
        log::trace!("line ending is {line_ending}");

        if !self.cursor.expect(SCRIPT_INFO_HEADER) {
            return Err(ParseError::MissingScriptInfoHeader);
        }
        if !self.cursor.expect_line_ending(line_ending) {
            return Err(ParseError::ExpectedLineEnding {
                line: self.cursor.line(),
            });
        }

        log::debug!("parsing section [{}] at line 1", sections::SCRIPT_INFO);
        let script_info: ScriptInfo<'a> = {
            let mut reader = self.reader(line_ending);
            sections::parse_script_info(&mut reader)?
        };

        let mut styles = Vec::new();
        let mut events = Vec::new();
        let mut extra_sections: ExtraSections<'a> = create_ordered_map();

        while !self.cursor.is_eof() {
            let line = self.cursor.line();
            let name = self.section_header(line_ending)?;
            log::debug!("parsing section [{name}] at line {line}");

            match name {
                sections::V4_PLUS_STYLES => {
                    sections::parse_styles(&mut self.reader(line_ending), &mut styles)?;
                }
                sections::EVENTS => {
                    sections::parse_events(&mut self.reader(line_ending), &mut events)?;
                }
                sections::FONTS | sections::GRAPHICS => {
                    let skipped = sections::skip_section(&mut self.reader(line_ending));
                    log::debug!("skipped {skipped} lines of [{name}]");
                }
                sections::V4_STYLES => return Err(ParseError::UnsupportedV4Styles { line }),
                sections::SCRIPT_INFO => return Err(ParseError::DuplicateScriptInfo { line }),
                _ => {
                    let mut section = ExtraSection::new();
                    sections::parse_extra_section(
                        &mut self.reader(line_ending),
                        name,
                        &mut section,
                    )?;
                    if extra_sections.insert(name, section).is_some() {
                        log::debug!("section [{name}] repeated, earlier content replaced");
                    }
                }
            }
        }

        Ok(AssDocument {
            script_info,
            styles,
            events,
            extra_sections,
            file_props: FileProps {
                encoding,
                line_ending,
            },
        })
    }

    /// Read a `[Name]` header line and return the name
    fn section_header(&mut self, line_ending: LineEnding) -> ParseResult<&'a str> {
        let line = self.cursor.line();
        if !self.cursor.expect("[") {
            return Err(ParseError::ExpectedSectionHeader { line });
        }

        let name = self
            .cursor
            .take_until(']', false)
            .filter(|name| !name.contains(['\r', '\n']))
            .ok_or(ParseError::UnterminatedSectionHeader { line })?;

        if !self.cursor.expect_line_ending(line_ending) {
            return Err(ParseError::ExpectedLineEnding { line });
        }
        Ok(name)
    }

    fn reader(&mut self, line_ending: LineEnding) -> SectionReader<'_, 'a> {
        SectionReader::new(
            &mut self.cursor,
            line_ending,
            self.settings,
            &mut self.warnings,
        )
    }
}
