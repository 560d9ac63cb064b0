//! Input handling utilities shared by the parser
//!
//! Contains encoding detection and decoding, line terminator classification
//! and the ahash-backed map constructors used for extra sections.

pub mod hashers;
pub mod line_ending;
pub mod utf8;

pub use hashers::{create_ordered_map, OrderedMap};
pub use line_ending::{detect_line_ending, LineEnding, LineEndingCounts};
pub use utf8::{decode_bytes, detect_file_encoding, DecodedText, FileEncoding};
