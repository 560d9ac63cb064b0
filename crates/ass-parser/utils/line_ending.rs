//! Line terminator classification
//!
//! A script must use exactly one line terminator convention throughout. The
//! whole decoded buffer is scanned once and the result is used for every line
//! boundary search afterwards.

use core::fmt;

use crate::parser::errors::ParseError;

/// Line terminator convention of a script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineEnding {
    /// `\r\n`
    Crlf,
    /// `\n`
    Lf,
    /// `\r`
    Cr,
}

impl LineEnding {
    /// Terminator text
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Crlf => "\r\n",
            Self::Lf => "\n",
            Self::Cr => "\r",
        }
    }
}

impl fmt::Display for LineEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Crlf => "CRLF",
            Self::Lf => "LF",
            Self::Cr => "CR",
        };
        f.write_str(name)
    }
}

/// Occurrences of each terminator kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineEndingCounts {
    /// `\r\n` pairs
    pub crlf: usize,
    /// `\r` not followed by `\n`
    pub cr: usize,
    /// `\n` not preceded by `\r`
    pub lf: usize,
}

impl LineEndingCounts {
    /// Count every terminator in `text`
    #[must_use]
    pub fn scan(text: &str) -> Self {
        let mut counts = Self::default();
        let mut bytes = text.bytes().peekable();

        while let Some(byte) = bytes.next() {
            match byte {
                b'\r' if bytes.peek() == Some(&b'\n') => {
                    bytes.next();
                    counts.crlf += 1;
                }
                b'\r' => counts.cr += 1,
                b'\n' => counts.lf += 1,
                _ => {}
            }
        }

        counts
    }

    /// Total number of terminators
    #[must_use]
    pub const fn total(&self) -> usize {
        self.crlf + self.cr + self.lf
    }
}

/// Classify the line terminator used by `text`
///
/// # Errors
///
/// Returns [`ParseError::MissingLineEnding`] when no terminator exists and
/// [`ParseError::MixedLineEndings`] when more than one kind is present.
pub fn detect_line_ending(text: &str) -> Result<LineEnding, ParseError> {
    let counts = LineEndingCounts::scan(text);

    let ending = match (counts.crlf, counts.cr, counts.lf) {
        (0, 0, 0) => return Err(ParseError::MissingLineEnding),
        (_, 0, 0) => LineEnding::Crlf,
        (0, _, 0) => LineEnding::Cr,
        (0, 0, _) => LineEnding::Lf,
        _ => {
            return Err(ParseError::MixedLineEndings {
                total: counts.total(),
                crlf: counts.crlf,
                cr: counts.cr,
                lf: counts.lf,
            })
        }
    };

    log::trace!("detected {ending} line endings ({} lines)", counts.total());
    Ok(ending)
}
