//! Text encoding utilities for ASS script input
//!
//! Provides byte order mark detection and decoding of UTF-8, UTF-16 and
//! UTF-32 input into one owned UTF-8 buffer.
//!
//! # Examples
//!
//! ```rust
//! use ass_parser::utils::utf8::{decode_bytes, detect_file_encoding};
//!
//! let bytes = b"\xEF\xBB\xBF[Script Info]\n";
//! let encoding = detect_file_encoding(bytes);
//! let decoded = decode_bytes(bytes, encoding)?;
//! assert_eq!(decoded.content(), "[Script Info]\n");
//! # Ok::<(), ass_parser::ParseError>(())
//! ```

mod bom;
mod decode;

pub use bom::{detect_file_encoding, FileEncoding, BOM_DETECTION_LEN};
pub use decode::{decode_bytes, DecodedText};
