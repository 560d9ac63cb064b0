//! Byte Order Mark (BOM) detection
//!
//! ASS scripts carry no encoding declaration, so the leading byte order mark is
//! the only reliable signal for how the rest of the file must be decoded.
//!
//! # Examples
//!
//! ```rust
//! use ass_parser::utils::utf8::{detect_file_encoding, FileEncoding};
//!
//! let bytes = b"\xEF\xBB\xBF[Script Info]";
//! assert_eq!(detect_file_encoding(bytes), FileEncoding::Utf8);
//! assert_eq!(detect_file_encoding(b"[Script Info]"), FileEncoding::Unknown);
//! ```

/// Minimum number of bytes inspected before a BOM is considered at all
pub const BOM_DETECTION_LEN: usize = 4;

/// Text encoding of a script file, as announced by its byte order mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FileEncoding {
    /// UTF-8 (EF BB BF)
    Utf8,
    /// UTF-16 Little Endian (FF FE)
    Utf16Le,
    /// UTF-16 Big Endian (FE FF)
    Utf16Be,
    /// UTF-32 Little Endian (FF FE 00 00)
    Utf32Le,
    /// UTF-32 Big Endian (00 00 FE FF)
    Utf32Be,
    /// No byte order mark present
    Unknown,
}

impl FileEncoding {
    /// Detection order; the 4-byte marks shadow the 2-byte UTF-16 ones
    const DETECTION_ORDER: [Self; 5] = [
        Self::Utf8,
        Self::Utf32Le,
        Self::Utf32Be,
        Self::Utf16Le,
        Self::Utf16Be,
    ];

    /// Byte signature identifying this encoding, empty for [`FileEncoding::Unknown`]
    #[must_use]
    pub const fn signature(self) -> &'static [u8] {
        match self {
            Self::Utf8 => &[0xEF, 0xBB, 0xBF],
            Self::Utf16Le => &[0xFF, 0xFE],
            Self::Utf16Be => &[0xFE, 0xFF],
            Self::Utf32Le => &[0xFF, 0xFE, 0x00, 0x00],
            Self::Utf32Be => &[0x00, 0x00, 0xFE, 0xFF],
            Self::Unknown => &[],
        }
    }

    /// Canonical encoding name
    #[must_use]
    pub const fn encoding_name(self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Utf16Le => "UTF-16LE",
            Self::Utf16Be => "UTF-16BE",
            Self::Utf32Le => "UTF-32LE",
            Self::Utf32Be => "UTF-32BE",
            Self::Unknown => "unknown",
        }
    }

    /// Whether the file started with a byte order mark
    #[must_use]
    pub const fn has_bom(self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Number of decoded codepoints occupied by the byte order mark
    #[must_use]
    pub const fn bom_codepoints(self) -> usize {
        if self.has_bom() {
            1
        } else {
            0
        }
    }
}

impl core::fmt::Display for FileEncoding {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.encoding_name())
    }
}

/// Detect the file encoding from its leading bytes
///
/// Inputs shorter than [`BOM_DETECTION_LEN`] bytes are always reported as
/// [`FileEncoding::Unknown`], even if they begin with a complete UTF-8 or
/// UTF-16 mark.
#[must_use]
pub fn detect_file_encoding(bytes: &[u8]) -> FileEncoding {
    if bytes.len() < BOM_DETECTION_LEN {
        return FileEncoding::Unknown;
    }

    FileEncoding::DETECTION_ORDER
        .into_iter()
        .find(|encoding| bytes.starts_with(encoding.signature()))
        .unwrap_or(FileEncoding::Unknown)
}
