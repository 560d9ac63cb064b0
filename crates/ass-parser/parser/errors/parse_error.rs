//! Fatal parse error type for ASS script validation
//!
//! Contains the `ParseError` enum representing every condition that aborts a
//! parse. A fatal error never comes with a partial document; whatever warnings
//! were collected before the failure are still handed back next to it.

use alloc::string::String;
use core::fmt;

use thiserror::Error;

use super::field_error::FieldError;

/// Reason a script source could not be read
///
/// Produced by the I/O layer and carried into [`ParseError::Io`] so callers see
/// read failures through the same error channel as parse failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IoErrorReason {
    /// Missing permission to open the file
    NoPermission,
    /// Path does not exist
    NotFound,
    /// Path points to a directory
    IsADirectory,
    /// Fewer bytes were read than the file reported
    ReadShort,
    /// Any other I/O failure
    Unknown,
}

impl fmt::Display for IoErrorReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::NoPermission => "no permission to read the file",
            Self::NotFound => "file not found",
            Self::IsADirectory => "path is a directory",
            Self::ReadShort => "could not read the whole file",
            Self::Unknown => "unknown I/O error",
        };
        f.write_str(text)
    }
}

/// Coarse grouping of fatal errors for tooling and filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Source could not be read
    Io,
    /// Byte order mark, transcoding, allocation or line ending problems
    Encoding,
    /// Section layout, headers, field names and column schemas
    Structure,
    /// A single field value failed to convert
    Field,
}

/// Fatal error produced while validating an ASS script
///
/// Each variant owns the context needed to render its message, including the
/// 1-based line number where one is known.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Source could not be read
    Io(IoErrorReason),

    /// No byte order mark present and unrecognized encodings are not allowed
    UnrecognizedEncoding,

    /// Invalid byte sequence in the declared encoding
    MalformedEncoding {
        encoding: &'static str,
        position: usize,
    },

    /// Input ends inside a multi-byte sequence
    TruncatedEncoding { encoding: &'static str },

    /// Decode buffer could not be allocated
    OutOfMemory { requested: usize },

    /// No line terminator anywhere in the input
    MissingLineEnding,

    /// More than one line terminator convention in use
    MixedLineEndings {
        total: usize,
        crlf: usize,
        cr: usize,
        lf: usize,
    },

    /// Input does not start with the `[Script Info]` header line
    MissingScriptInfoHeader,

    /// A line terminator was required
    ExpectedLineEnding { line: usize },

    /// A `[` starting a section header was required
    ExpectedSectionHeader { line: usize },

    /// Section header without closing `]` on the same line
    UnterminatedSectionHeader { line: usize },

    /// Legacy `[V4 Styles]` table
    UnsupportedV4Styles { line: usize },

    /// Second `[Script Info]` section
    DuplicateScriptInfo { line: usize },

    /// Line without the `:` separating field name and value
    MissingFieldSeparator { section: String, line: usize },

    /// Field or line key not known in its section
    UnexpectedField {
        section: String,
        field: String,
        line: usize,
    },

    /// Field repeated inside a section
    DuplicateField {
        section: String,
        field: String,
        line: usize,
    },

    /// `[Script Info]` declares no script type
    MissingScriptType,

    /// Script type present but not v4.00+
    UnsupportedScriptType,

    /// More than one `Format` line in a section
    DuplicateFormatLine { section: String, line: usize },

    /// Column name in a `Format` line is not recognized
    UnknownFormatKey {
        section: String,
        key: String,
        line: usize,
    },

    /// Empty column name in a `Format` line
    EmptyFormatKey { section: String, line: usize },

    /// Data row before any `Format` line
    MissingFormatLine { section: String, line: usize },

    /// Data row has more columns than its `Format` line
    TooManyFields {
        section: String,
        expected: usize,
        found: usize,
        line: usize,
    },

    /// Data row has fewer columns than its `Format` line
    TooFewFields {
        section: String,
        expected: usize,
        found: usize,
        line: usize,
    },

    /// `Text` declared anywhere but the last event column
    TextFieldNotLast { line: usize },

    /// Field value failed to convert to its typed representation
    InvalidFieldValue {
        field: String,
        value: String,
        line: usize,
        #[source]
        source: FieldError,
    },
}

impl ParseError {
    /// Category of this error
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::Io(_) => ErrorCategory::Io,
            Self::UnrecognizedEncoding
            | Self::MalformedEncoding { .. }
            | Self::TruncatedEncoding { .. }
            | Self::OutOfMemory { .. }
            | Self::MissingLineEnding
            | Self::MixedLineEndings { .. } => ErrorCategory::Encoding,
            Self::InvalidFieldValue { .. } => ErrorCategory::Field,
            _ => ErrorCategory::Structure,
        }
    }

    /// Line the error was detected on, if it is tied to one
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::ExpectedLineEnding { line }
            | Self::ExpectedSectionHeader { line }
            | Self::UnterminatedSectionHeader { line }
            | Self::UnsupportedV4Styles { line }
            | Self::DuplicateScriptInfo { line }
            | Self::MissingFieldSeparator { line, .. }
            | Self::UnexpectedField { line, .. }
            | Self::DuplicateField { line, .. }
            | Self::DuplicateFormatLine { line, .. }
            | Self::UnknownFormatKey { line, .. }
            | Self::EmptyFormatKey { line, .. }
            | Self::MissingFormatLine { line, .. }
            | Self::TooManyFields { line, .. }
            | Self::TooFewFields { line, .. }
            | Self::TextFieldNotLast { line }
            | Self::InvalidFieldValue { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(reason) => write!(f, "I/O error: {reason}"),
            Self::UnrecognizedEncoding => f.write_str("unrecognized file, no BOM present"),
            Self::MalformedEncoding { encoding, position } => {
                write!(f, "malformed {encoding} sequence at byte {position}")
            }
            Self::TruncatedEncoding { encoding } => {
                write!(f, "truncated {encoding} sequence at end of input")
            }
            Self::OutOfMemory { requested } => {
                write!(f, "allocation error: could not reserve {requested} bytes")
            }
            Self::MissingLineEnding => f.write_str("no line ending found in file"),
            Self::MixedLineEndings {
                total,
                crlf,
                cr,
                lf,
            } => write!(
                f,
                "got multiple line endings in file: total: {total}, \\r\\n: {crlf}, \\r: {cr}, \\n: {lf}"
            ),
            Self::MissingScriptInfoHeader => {
                f.write_str("first line must be the script info section")
            }
            Self::ExpectedLineEnding { line } => {
                write!(f, "expected line ending at line {line}")
            }
            Self::ExpectedSectionHeader { line } => {
                write!(f, "expected section header starting with '[' at line {line}")
            }
            Self::UnterminatedSectionHeader { line } => {
                write!(f, "script section not terminated by ']' at line {line}")
            }
            Self::UnsupportedV4Styles { line } => {
                write!(f, "v4 styles are not supported (line {line})")
            }
            Self::DuplicateScriptInfo { line } => {
                write!(f, "script info section may only occur once, found again at line {line}")
            }
            Self::MissingFieldSeparator { section, line } => {
                write!(f, "end of line before ':' in {section} section at line {line}")
            }
            Self::UnexpectedField {
                section,
                field,
                line,
            } => write!(f, "unexpected field in {section} section: '{field}' (line {line})"),
            Self::DuplicateField {
                section,
                field,
                line,
            } => write!(f, "duplicate field in {section} section: '{field}' (line {line})"),
            Self::MissingScriptType => {
                f.write_str("no script type present in the script info section")
            }
            Self::UnsupportedScriptType => f.write_str("only script type v4+ is supported"),
            Self::DuplicateFormatLine { section, line } => write!(
                f,
                "multiple format lines detected in the {section} section, this is not allowed (line {line})"
            ),
            Self::UnknownFormatKey { section, key, line } => write!(
                f,
                "unrecognized format key '{key}' in format line in {section} section (line {line})"
            ),
            Self::EmptyFormatKey { section, line } => {
                write!(f, "empty format key in format line in {section} section (line {line})")
            }
            Self::MissingFormatLine { section, line } => write!(
                f,
                "no format line occurred before the data line in the {section} section (line {line})"
            ),
            Self::TooManyFields {
                section,
                expected,
                found,
                line,
            } => write!(
                f,
                "too many fields in the {section} line, the format line specified {expected} but found {found} (line {line})"
            ),
            Self::TooFewFields {
                section,
                expected,
                found,
                line,
            } => write!(
                f,
                "too few fields in the {section} line, the format line specified {expected} but found {found} (line {line})"
            ),
            Self::TextFieldNotLast { line } => write!(
                f,
                "'Text' field of event lines may only occur at the last position (line {line})"
            ),
            Self::InvalidFieldValue {
                field,
                value,
                line,
                source,
            } => write!(
                f,
                "While parsing field '{field}' with value '{value}' (line {line}): {source}"
            ),
        }
    }
}
