//! Owning container for decoded script text
//!
//! [`DecodedScript`] is the single allocation every parsed document borrows
//! from. Decoding and parsing are separate steps so the borrow checker can tie
//! the document's lifetime to the buffer.

use alloc::string::String;

use super::{
    ast::AssDocument,
    errors::{ParseError, ParseOutcome, Warnings},
    main::Parser,
    settings::StrictSettings,
};
use crate::utils::{decode_bytes, detect_file_encoding, DecodedText, FileEncoding};

/// Decoded script text ready to be parsed
///
/// # Example
///
/// ```rust
/// use ass_parser::{DecodedScript, StrictSettings};
///
/// let bytes = b"\xEF\xBB\xBF[Script Info]\nScriptType: v4.00+\n";
/// let settings = StrictSettings::strict();
///
/// let decoded = DecodedScript::decode(bytes, &settings).result?;
/// let outcome = decoded.parse(&settings);
/// let document = outcome.result?;
/// assert_eq!(document.script_info.title, "<untitled>");
/// # Ok::<(), ass_parser::ParseError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DecodedScript {
    /// Decoded buffer
    decoded: DecodedText,
    /// Warnings recorded while decoding
    decode_warnings: Warnings<'static>,
}

impl DecodedScript {
    /// Detect the encoding of `bytes` and decode them
    ///
    /// Input without a byte order mark fails unless
    /// `allow_unrecognized_file_encoding` is set, in which case it is read as
    /// UTF-8 and a warning is recorded.
    pub fn decode(bytes: &[u8], settings: &StrictSettings) -> ParseOutcome<'static, Self> {
        let encoding = detect_file_encoding(bytes);
        log::trace!("detected file encoding {encoding}");

        let mut warnings = Warnings::new();
        if encoding == FileEncoding::Unknown {
            if !settings.allow_unrecognized_file_encoding {
                return ParseOutcome::err(ParseError::UnrecognizedEncoding);
            }
            warnings.push_simple("unrecognized file encoding, no BOM present, assuming UTF-8");
        }

        let result = decode_bytes(bytes, encoding).map(|decoded| Self {
            decoded,
            decode_warnings: warnings.clone(),
        });
        ParseOutcome::with_warnings(result, warnings)
    }

    /// Wrap text that is already decoded
    ///
    /// A leading U+FEFF is treated as a UTF-8 byte order mark.
    #[must_use]
    pub fn from_string(text: String) -> Self {
        let (encoding, bom_skip) = if text.starts_with('\u{FEFF}') {
            (FileEncoding::Utf8, 1)
        } else {
            (FileEncoding::Unknown, 0)
        };
        Self {
            decoded: DecodedText {
                text,
                encoding,
                bom_skip,
            },
            decode_warnings: Warnings::new(),
        }
    }

    /// Script text after the byte order mark
    #[must_use]
    pub fn content(&self) -> &str {
        self.decoded.content()
    }

    /// Encoding the text was decoded from
    #[must_use]
    pub const fn encoding(&self) -> FileEncoding {
        self.decoded.encoding
    }

    /// Parse and validate the decoded text
    ///
    /// The returned warnings start with the ones recorded while decoding.
    #[must_use]
    pub fn parse<'a>(&'a self, settings: &StrictSettings) -> ParseOutcome<'a, AssDocument<'a>> {
        Parser::new(self.content(), settings, self.decode_warnings.clone())
            .parse(self.decoded.encoding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::errors::Warning;

    #[test]
    fn unknown_encoding_is_fatal_when_strict() {
        let outcome = DecodedScript::decode(b"[Script Info]\n", &StrictSettings::strict());
        assert_eq!(outcome.error(), Some(&ParseError::UnrecognizedEncoding));
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn unknown_encoding_warns_when_allowed() {
        let settings = StrictSettings::strict().with_allow_unrecognized_file_encoding(true);
        let outcome = DecodedScript::decode(b"[Script Info]\nScriptType: v4.00+\n", &settings);
        assert_eq!(outcome.warnings.len(), 1);

        let decoded = outcome.result.unwrap();
        assert_eq!(decoded.encoding(), FileEncoding::Unknown);

        let parsed = decoded.parse(&settings);
        assert!(parsed.is_ok());
        assert!(matches!(parsed.warnings.as_slice(), [Warning::Simple(_)]));
    }

    #[test]
    fn bom_is_skipped() {
        let decoded =
            DecodedScript::decode(b"\xEF\xBB\xBF[Script Info]\n", &StrictSettings::strict())
                .result
                .unwrap();
        assert_eq!(decoded.encoding(), FileEncoding::Utf8);
        assert_eq!(decoded.content(), "[Script Info]\n");
    }

    #[test]
    fn from_string_detects_bom() {
        let decoded = DecodedScript::from_string("\u{FEFF}abc".into());
        assert_eq!(decoded.content(), "abc");
        assert_eq!(decoded.encoding(), FileEncoding::Utf8);

        let decoded = DecodedScript::from_string("abc".into());
        assert_eq!(decoded.content(), "abc");
        assert_eq!(decoded.encoding(), FileEncoding::Unknown);
    }
}
