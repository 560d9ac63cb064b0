//! Owned summary of one validation run
//!
//! Tools that only need a verdict use [`check_bytes`], which decodes, parses
//! and renders everything into owned values so nothing borrows the input.

use alloc::{string::String, vec::Vec};

use super::{errors::ParseError, script::DecodedScript, settings::StrictSettings};
use crate::utils::{FileEncoding, LineEnding};

/// Result of validating one script
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CheckReport {
    /// Detected encoding, `None` when decoding failed
    pub encoding: Option<FileEncoding>,
    /// Detected line ending, `None` when parsing failed
    pub line_ending: Option<LineEnding>,
    /// Rendered warnings in recording order
    pub warnings: Vec<String>,
    /// Fatal error, if any
    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_error"))]
    pub error: Option<ParseError>,
    /// Number of style rows
    pub styles: usize,
    /// Number of event rows
    pub events: usize,
    /// Number of unrecognized sections captured
    pub extra_sections: usize,
}

impl CheckReport {
    /// Whether the script passed validation
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// Report for a script that could not even be read
    #[must_use]
    pub const fn from_error(error: ParseError) -> Self {
        Self::failed(None, Vec::new(), error)
    }

    const fn failed(
        encoding: Option<FileEncoding>,
        warnings: Vec<String>,
        error: ParseError,
    ) -> Self {
        Self {
            encoding,
            line_ending: None,
            warnings,
            error: Some(error),
            styles: 0,
            events: 0,
            extra_sections: 0,
        }
    }
}

#[cfg(feature = "serde")]
fn serialize_error<S: serde::Serializer>(
    error: &Option<ParseError>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match error {
        Some(error) => serializer.collect_str(error),
        None => serializer.serialize_none(),
    }
}

/// Decode, parse and summarize `bytes`
///
/// # Example
///
/// ```rust
/// use ass_parser::{check_bytes, StrictSettings};
///
/// let report = check_bytes(b"[Script Info]\nScriptType: v4.00+\n", &StrictSettings::strict());
/// assert!(!report.is_valid());
///
/// let report = check_bytes(b"[Script Info]\nScriptType: v4.00+\n", &StrictSettings::non_strict());
/// assert!(report.is_valid());
/// assert_eq!(report.warnings.len(), 1);
/// ```
#[must_use]
pub fn check_bytes(bytes: &[u8], settings: &StrictSettings) -> CheckReport {
    let decoded = DecodedScript::decode(bytes, settings);
    let decoded = match decoded.result {
        Ok(decoded) => decoded,
        Err(error) => return CheckReport::failed(None, decoded.warnings.messages(), error),
    };

    let outcome = decoded.parse(settings);
    let warnings = outcome.warnings.messages();
    match outcome.result {
        Ok(document) => CheckReport {
            encoding: Some(document.file_props.encoding),
            line_ending: Some(document.file_props.line_ending),
            warnings,
            error: None,
            styles: document.styles.len(),
            events: document.events.len(),
            extra_sections: document.extra_sections.len(),
        },
        Err(error) => CheckReport::failed(Some(decoded.encoding()), warnings, error),
    }
}
