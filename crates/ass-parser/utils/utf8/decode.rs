//! Conversion of raw script bytes into one owned UTF-8 buffer
//!
//! UTF-8 input is validated in place, UTF-16 is transcoded with `encoding_rs`
//! and UTF-32 is decoded unit by unit. The byte order mark is kept as a
//! leading U+FEFF so every encoding skips exactly one codepoint afterwards.
//! Allocation goes through `try_reserve`, turning exhaustion into an error.

use alloc::{string::String, vec::Vec};

use encoding_rs::{DecoderResult, UTF_16BE, UTF_16LE};

use super::bom::FileEncoding;
use crate::parser::errors::ParseError;

/// Decoded script text and the encoding it was read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    /// Decoded text, still including the byte order mark
    pub text: String,
    /// Encoding the bytes were decoded from
    pub encoding: FileEncoding,
    /// Codepoints to skip before the script content starts
    pub bom_skip: usize,
}

impl DecodedText {
    /// Text after the byte order mark
    #[must_use]
    pub fn content(&self) -> &str {
        self.text
            .char_indices()
            .nth(self.bom_skip)
            .map_or("", |(index, _)| &self.text[index..])
    }
}

/// Decode `bytes` according to `encoding`
///
/// [`FileEncoding::Unknown`] is decoded as UTF-8. The caller decides whether an
/// unknown encoding is acceptable before calling this.
///
/// # Errors
///
/// Returns [`ParseError::MalformedEncoding`] for invalid sequences,
/// [`ParseError::TruncatedEncoding`] when the input stops inside a sequence and
/// [`ParseError::OutOfMemory`] when the output buffer cannot be reserved.
pub fn decode_bytes(bytes: &[u8], encoding: FileEncoding) -> Result<DecodedText, ParseError> {
    log::trace!("decoding {} bytes as {encoding}", bytes.len());

    let text = match encoding {
        FileEncoding::Utf8 | FileEncoding::Unknown => decode_utf8(bytes, encoding)?,
        FileEncoding::Utf16Le | FileEncoding::Utf16Be => decode_utf16(bytes, encoding)?,
        FileEncoding::Utf32Le | FileEncoding::Utf32Be => decode_utf32(bytes, encoding)?,
    };

    Ok(DecodedText {
        text,
        encoding,
        bom_skip: encoding.bom_codepoints(),
    })
}

/// Allocate `capacity` bytes or report the failure
fn reserve(capacity: usize) -> Result<Vec<u8>, ParseError> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(capacity)
        .map_err(|_| ParseError::OutOfMemory {
            requested: capacity,
        })?;
    Ok(buffer)
}

/// Validate UTF-8 in place and copy it into the owned buffer
fn decode_utf8(bytes: &[u8], encoding: FileEncoding) -> Result<String, ParseError> {
    let mut buffer = reserve(bytes.len())?;
    buffer.extend_from_slice(bytes);

    String::from_utf8(buffer).map_err(|error| {
        let utf8_error = error.utf8_error();
        match utf8_error.error_len() {
            Some(_) => ParseError::MalformedEncoding {
                encoding: encoding_label(encoding),
                position: utf8_error.valid_up_to(),
            },
            None => ParseError::TruncatedEncoding {
                encoding: encoding_label(encoding),
            },
        }
    })
}

/// Transcode UTF-16 with `encoding_rs`
fn decode_utf16(bytes: &[u8], encoding: FileEncoding) -> Result<String, ParseError> {
    if bytes.len() % 2 != 0 {
        return Err(ParseError::TruncatedEncoding {
            encoding: encoding.encoding_name(),
        });
    }

    let codec = if encoding == FileEncoding::Utf16Le {
        UTF_16LE
    } else {
        UTF_16BE
    };
    let mut decoder = codec.new_decoder_without_bom_handling();

    let capacity = decoder
        .max_utf8_buffer_length_without_replacement(bytes.len())
        .ok_or(ParseError::OutOfMemory {
            requested: usize::MAX,
        })?;
    let mut text = String::new();
    text.try_reserve_exact(capacity)
        .map_err(|_| ParseError::OutOfMemory {
            requested: capacity,
        })?;

    let (result, read) = decoder.decode_to_string_without_replacement(bytes, &mut text, true);
    match result {
        DecoderResult::InputEmpty => Ok(text),
        DecoderResult::Malformed(bad, consumed_after) => Err(ParseError::MalformedEncoding {
            encoding: encoding.encoding_name(),
            position: read.saturating_sub(usize::from(bad) + usize::from(consumed_after)),
        }),
        DecoderResult::OutputFull => Err(ParseError::OutOfMemory {
            requested: capacity,
        }),
    }
}

/// Decode 4-byte units, rejecting surrogates and values past U+10FFFF
fn decode_utf32(bytes: &[u8], encoding: FileEncoding) -> Result<String, ParseError> {
    if bytes.len() % 4 != 0 {
        return Err(ParseError::TruncatedEncoding {
            encoding: encoding.encoding_name(),
        });
    }

    let mut text = String::new();
    text.try_reserve_exact(bytes.len())
        .map_err(|_| ParseError::OutOfMemory {
            requested: bytes.len(),
        })?;

    for (index, unit) in bytes.chunks_exact(4).enumerate() {
        let unit = [unit[0], unit[1], unit[2], unit[3]];
        let value = if encoding == FileEncoding::Utf32Le {
            u32::from_le_bytes(unit)
        } else {
            u32::from_be_bytes(unit)
        };
        let ch = char::from_u32(value).ok_or(ParseError::MalformedEncoding {
            encoding: encoding.encoding_name(),
            position: index * 4,
        })?;
        text.push(ch);
    }

    Ok(text)
}

/// Name used in malformed-sequence errors
const fn encoding_label(encoding: FileEncoding) -> &'static str {
    match encoding {
        FileEncoding::Unknown => FileEncoding::Utf8.encoding_name(),
        other => other.encoding_name(),
    }
}
