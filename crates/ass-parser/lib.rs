//! # ASS Parser
//!
//! Validating, zero-copy parser for ASS (Advanced `SubStation` Alpha) subtitle
//! scripts. Raw bytes of any BOM-announced Unicode encoding are decoded once
//! into an owned buffer, and the parsed document borrows every string from it.
//!
//! ## Features
//!
//! - **Encoding detection**: UTF-8, UTF-16 and UTF-32 in either byte order
//! - **Strict by default**: every format violation is fatal unless a
//!   [`StrictSettings`] option downgrades it to a warning
//! - **Zero-copy model**: field text is `&str` into the decoded buffer
//! - **Thread-safe**: documents are immutable and `Send + Sync`
//!
//! ## Quick Start
//!
//! ```rust
//! use ass_parser::{DecodedScript, StrictSettings};
//!
//! let bytes = "\u{FEFF}[Script Info]
//! Title: Example
//! ScriptType: v4.00+
//!
//! [V4+ Styles]
//! Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, OutlineColour, BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, Encoding
//! Style: Default,Arial,20,&H00FFFFFF,&H000000FF,&H00000000,&H00000000,0,0,0,0,100,100,0,0,1,2,0,2,10,10,10,1
//!
//! [Events]
//! Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text
//! Dialogue: 0,0:00:00.00,0:00:05.00,Default,,0,0,0,,Hello World!
//! ";
//!
//! let settings = StrictSettings::strict();
//! let script = DecodedScript::decode(bytes.as_bytes(), &settings).result?;
//! let outcome = script.parse(&settings);
//! let document = outcome.result?;
//!
//! assert_eq!(document.script_info.title, "Example");
//! assert_eq!(document.styles[0].fontsize, 20);
//! assert_eq!(document.events[0].text, "Hello World!");
//! assert!(outcome.warnings.is_empty());
//! # Ok::<(), ass_parser::ParseError>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(clippy::all)]
#![deny(unsafe_code)]

extern crate alloc;

pub mod parser;
pub mod utils;

pub use parser::{
    ast::AssDocument, check_bytes, CheckReport, DecodedScript, ParseError, ParseOutcome,
    ParseResult, ScriptInfoStrictSettings, StrictSettings, Warning, Warnings,
};
pub use utils::{FileEncoding, LineEnding};

/// Crate version for runtime compatibility checks
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Script format declared by the `ScriptType` field
///
/// Only [`ScriptType::V4Plus`] scripts are accepted; `V4` is recognized so it
/// can be rejected with a precise error.
///
/// # Examples
///
/// ```rust
/// use ass_parser::ScriptType;
///
/// assert_eq!(ScriptType::from_header("v4.00+"), Some(ScriptType::V4Plus));
/// assert_eq!(ScriptType::from_header("V4.00"), Some(ScriptType::V4));
/// assert_eq!(ScriptType::from_header(" v4.00+"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScriptType {
    /// SSA v4.00, the legacy `SubStation Alpha` format
    V4,
    /// ASS v4.00+
    V4Plus,
}

impl ScriptType {
    /// Parse a `ScriptType` value
    ///
    /// Matching is exact: the lowercase and uppercase `v` spellings are the
    /// only variations accepted.
    #[must_use]
    pub fn from_header(header: &str) -> Option<Self> {
        match header {
            "v4.00" | "V4.00" => Some(Self::V4),
            "v4.00+" | "V4.00+" => Some(Self::V4Plus),
            _ => None,
        }
    }

    /// Canonical header spelling
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V4 => "v4.00",
            Self::V4Plus => "v4.00+",
        }
    }
}

impl core::fmt::Display for ScriptType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod integration_tests {
    use super::*;
    use crate::parser::ast::{Alignment, EventKind, MarginValue};
    use pretty_assertions::assert_eq;

    const SCRIPT: &str = "[Script Info]
; generated for tests
Title: Test Script
ScriptType: v4.00+
PlayResX: 1280
PlayResY: 720

[V4+ Styles]
Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, OutlineColour, BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, Encoding
Style: Default,Arial,20,&H00FFFFFF,&H000000FF,&H00000000,&H00000000,0,0,0,0,100,100,0,0,1,2,0,2,10,10,10,1
Style: Top,Arial,80,&H00FF0000,&H000000FF,&H00000000,&H00000000,-1,0,0,0,100,100,0,0,1,2,0,8,10,10,10,1

[Events]
Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text
Dialogue: 0,0:00:00.00,0:00:05.00,Default,,0000,0000,0000,,Hello World!
Dialogue: 1,0:00:02.00,0:00:07.00,Top,,0,0,0,,{\\pos(10,10)}Overlapping, with commas
Comment: 0,0:00:30.00,0:00:35.00,Default,,0,0,0,,This is a comment

[Fonts]
fontname: example.ttf
M)``!

[Aegisub Project Garbage]
Last Style Storage: Default
Video File: ?dummy
";

    #[test]
    fn parses_complete_script() {
        let script = DecodedScript::from_string(SCRIPT.into());
        let outcome = script.parse(&StrictSettings::strict());
        assert!(outcome.warnings.is_empty());
        let document = outcome.result.unwrap();

        assert_eq!(document.script_info.title, "Test Script");
        assert_eq!(document.script_info.script_type, Some(ScriptType::V4Plus));
        assert_eq!(document.script_info.play_resolution(), Some((1280, 720)));

        assert_eq!(document.styles.len(), 2);
        let top = document.style("Top").unwrap();
        assert!(top.bold);
        assert_eq!(top.alignment, Alignment::TopCenter);

        assert_eq!(document.events.len(), 3);
        assert_eq!(document.events_of_kind(EventKind::Dialogue).count(), 2);
        assert_eq!(document.events[0].margin_l, MarginValue::Default);
        assert_eq!(
            document.events[1].text,
            "{\\pos(10,10)}Overlapping, with commas"
        );

        let garbage = document.extra_section("Aegisub Project Garbage").unwrap();
        assert_eq!(garbage.get("Video File"), Some("?dummy"));
        assert!(document.extra_section("Fonts").is_none());
        assert_eq!(document.file_props.line_ending, LineEnding::Lf);
    }

    #[test]
    fn repeated_sections_append() {
        let text = "[Script Info]\nScriptType: v4.00+\n[Events]\nFormat: Text\nDialogue: one\n[Events]\nFormat: Start, Text\nComment: 0:00:00.00,two\n";
        let script = DecodedScript::from_string(text.into());
        let document = script.parse(&StrictSettings::strict()).result.unwrap();
        let texts: Vec<_> = document.events.iter().map(|event| event.text).collect();
        assert_eq!(texts, ["one", "two"]);
    }

    #[test]
    fn structural_errors() {
        let cases: [(&str, ParseError); 5] = [
            (
                "[Script Info]\nScriptType: v4.00+\n[V4 Styles]\n",
                ParseError::UnsupportedV4Styles { line: 3 },
            ),
            (
                "[Script Info]\nScriptType: v4.00+\n[Script Info]\n",
                ParseError::DuplicateScriptInfo { line: 3 },
            ),
            (
                "[Script Info]\nScriptType: v4.00+\n[Events\n",
                ParseError::UnterminatedSectionHeader { line: 3 },
            ),
            (
                "[Script Info]\nScriptType: v4.00+\n[Events]",
                ParseError::ExpectedLineEnding { line: 3 },
            ),
            (
                "[Script Info] \nScriptType: v4.00+\n",
                ParseError::ExpectedLineEnding { line: 1 },
            ),
        ];

        for (text, expected) in cases {
            let script = DecodedScript::from_string(text.into());
            let outcome = script.parse(&StrictSettings::non_strict());
            assert_eq!(outcome.result.unwrap_err(), expected, "input: {text:?}");
        }
    }

    #[test]
    fn document_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AssDocument<'static>>();
        assert_send_sync::<DecodedScript>();
        assert_send_sync::<ParseError>();
    }
}
