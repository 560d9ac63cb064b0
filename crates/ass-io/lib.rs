//! # ASS IO
//!
//! Reads ASS script bytes from files, standard input or memory and classifies
//! read failures into [`IoErrorReason`]s, so tools can report them through
//! the parser's [`ParseError`] channel.
//!
//! ## Quick Start
//!
//! ```rust
//! use ass_io::{check_source, AssSource};
//! use ass_parser::StrictSettings;
//!
//! let source = AssSource::Bytes(b"\xEF\xBB\xBF[Script Info]\nScriptType: v4.00+\n".to_vec());
//! let report = check_source(&source, &StrictSettings::strict());
//! assert!(report.is_valid());
//! ```

#![deny(unsafe_code)]

use std::{
    fmt,
    fs::File,
    io::{self, Read},
    path::{Path, PathBuf},
};

use ass_parser::{
    check_bytes,
    parser::errors::{IoErrorReason, ParseError},
    CheckReport, StrictSettings,
};
use thiserror::Error;

/// Crate version for runtime compatibility checks
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Where script bytes come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssSource {
    /// File on disk
    File(PathBuf),
    /// Standard input
    Stdin,
    /// Bytes already in memory
    Bytes(Vec<u8>),
}

impl AssSource {
    /// Interpret a command line argument, `-` meaning standard input
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(arg))
        }
    }

    /// Read every byte of the source
    ///
    /// # Errors
    ///
    /// Returns a [`ReadError`] classifying the failure.
    pub fn read(&self) -> Result<Vec<u8>, ReadError> {
        match self {
            Self::File(path) => read_file(path),
            Self::Stdin => {
                let mut bytes = Vec::new();
                io::stdin()
                    .lock()
                    .read_to_end(&mut bytes)
                    .map_err(|error| ReadError::from_io(self.to_string(), &error))?;
                log::debug!("read {} bytes from standard input", bytes.len());
                Ok(bytes)
            }
            Self::Bytes(bytes) => Ok(bytes.clone()),
        }
    }

    /// Read every byte of the source without blocking the runtime
    ///
    /// # Errors
    ///
    /// Returns a [`ReadError`] classifying the failure.
    #[cfg(feature = "async")]
    pub async fn read_async(&self) -> Result<Vec<u8>, ReadError> {
        use tokio::io::AsyncReadExt;

        let mut bytes = Vec::new();
        match self {
            Self::File(path) => {
                let mut file = tokio::fs::File::open(path)
                    .await
                    .map_err(|error| ReadError::from_io(self.to_string(), &error))?;
                let metadata = file
                    .metadata()
                    .await
                    .map_err(|error| ReadError::from_io(self.to_string(), &error))?;
                if metadata.is_dir() {
                    return Err(ReadError::new(self.to_string(), IoErrorReason::IsADirectory));
                }
                file.read_to_end(&mut bytes)
                    .await
                    .map_err(|error| ReadError::from_io(self.to_string(), &error))?;
                check_length(self, &bytes, metadata.len())?;
            }
            Self::Stdin => {
                tokio::io::stdin()
                    .read_to_end(&mut bytes)
                    .await
                    .map_err(|error| ReadError::from_io(self.to_string(), &error))?;
            }
            Self::Bytes(data) => bytes.clone_from(data),
        }
        Ok(bytes)
    }
}

impl fmt::Display for AssSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Stdin => f.write_str("<stdin>"),
            Self::Bytes(bytes) => write!(f, "<{} bytes in memory>", bytes.len()),
        }
    }
}

/// Failure to read a source
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("could not read {source_name}: {reason}")]
pub struct ReadError {
    /// Display name of the source
    pub source_name: String,
    /// Classified reason
    pub reason: IoErrorReason,
}

impl ReadError {
    /// Create an error with an already classified reason
    #[must_use]
    pub const fn new(source_name: String, reason: IoErrorReason) -> Self {
        Self {
            source_name,
            reason,
        }
    }

    /// Classify a standard I/O error
    #[must_use]
    pub fn from_io(source_name: String, error: &io::Error) -> Self {
        log::debug!("reading {source_name} failed: {error}");
        Self::new(source_name, classify(error))
    }
}

impl From<ReadError> for ParseError {
    fn from(error: ReadError) -> Self {
        Self::Io(error.reason)
    }
}

/// Map an I/O error kind onto the reasons scripts can fail to read with
#[must_use]
pub fn classify(error: &io::Error) -> IoErrorReason {
    match error.kind() {
        io::ErrorKind::NotFound => IoErrorReason::NotFound,
        io::ErrorKind::PermissionDenied => IoErrorReason::NoPermission,
        io::ErrorKind::UnexpectedEof => IoErrorReason::ReadShort,
        _ => IoErrorReason::Unknown,
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>, ReadError> {
    let name = || path.display().to_string();

    let mut file = File::open(path).map_err(|error| ReadError::from_io(name(), &error))?;
    let metadata = file
        .metadata()
        .map_err(|error| ReadError::from_io(name(), &error))?;
    if metadata.is_dir() {
        return Err(ReadError::new(name(), IoErrorReason::IsADirectory));
    }

    let expected = metadata.len();
    let mut bytes = Vec::new();
    bytes
        .try_reserve_exact(usize::try_from(expected).unwrap_or(0))
        .map_err(|_| ReadError::new(name(), IoErrorReason::Unknown))?;
    file.read_to_end(&mut bytes)
        .map_err(|error| ReadError::from_io(name(), &error))?;

    check_length(&AssSource::File(path.to_path_buf()), &bytes, expected)?;
    log::debug!("read {} bytes from {}", bytes.len(), path.display());
    Ok(bytes)
}

fn check_length(source: &AssSource, bytes: &[u8], expected: u64) -> Result<(), ReadError> {
    if (bytes.len() as u64) < expected {
        return Err(ReadError::new(source.to_string(), IoErrorReason::ReadShort));
    }
    Ok(())
}

/// Read and validate a source
///
/// Read failures are reported as [`ParseError::Io`] inside the report.
#[must_use]
pub fn check_source(source: &AssSource, settings: &StrictSettings) -> CheckReport {
    match source.read() {
        Ok(bytes) => check_bytes(&bytes, settings),
        Err(error) => CheckReport::from_error(error.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    const VALID: &[u8] = b"\xEF\xBB\xBF[Script Info]\nScriptType: v4.00+\n";

    #[test]
    fn reads_file_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(VALID).unwrap();

        let source = AssSource::File(file.path().to_path_buf());
        assert_eq!(source.read().unwrap(), VALID);
        assert!(check_source(&source, &StrictSettings::strict()).is_valid());
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let source = AssSource::File(dir.path().join("missing.ass"));

        let error = source.read().unwrap_err();
        assert_eq!(error.reason, IoErrorReason::NotFound);

        let report = check_source(&source, &StrictSettings::non_strict());
        assert_eq!(report.error, Some(ParseError::Io(IoErrorReason::NotFound)));
    }

    #[test]
    fn directory_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let source = AssSource::File(dir.path().to_path_buf());
        assert_eq!(source.read().unwrap_err().reason, IoErrorReason::IsADirectory);
    }

    #[test]
    fn in_memory_bytes() {
        let source = AssSource::Bytes(b"[Script Info]\n".to_vec());
        let report = check_source(&source, &StrictSettings::strict());
        assert_eq!(report.error, Some(ParseError::UnrecognizedEncoding));
        assert_eq!(source.to_string(), "<14 bytes in memory>");
    }

    #[test]
    fn dash_means_stdin() {
        assert_eq!(AssSource::from_arg("-"), AssSource::Stdin);
        assert_eq!(
            AssSource::from_arg("a.ass"),
            AssSource::File(PathBuf::from("a.ass"))
        );
    }

    #[test]
    fn io_error_kinds() {
        let denied = io::Error::from(io::ErrorKind::PermissionDenied);
        assert_eq!(classify(&denied), IoErrorReason::NoPermission);
        let eof = io::Error::from(io::ErrorKind::UnexpectedEof);
        assert_eq!(classify(&eof), IoErrorReason::ReadShort);
        let other = io::Error::from(io::ErrorKind::Other);
        assert_eq!(classify(&other), IoErrorReason::Unknown);
        let raw = io::Error::from_raw_os_error(21);
        assert_eq!(classify(&raw), IoErrorReason::Unknown);
    }

    #[test]
    fn read_error_message() {
        let error = ReadError::new("a.ass".into(), IoErrorReason::NotFound);
        assert_eq!(error.to_string(), "could not read a.ass: file not found");
    }

    #[cfg(feature = "async")]
    #[tokio::test]
    async fn async_read_matches_sync_read() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(VALID).unwrap();

        let source = AssSource::File(file.path().to_path_buf());
        assert_eq!(source.read_async().await.unwrap(), source.read().unwrap());

        let missing = AssSource::File(file.path().with_extension("missing"));
        assert_eq!(
            missing.read_async().await.unwrap_err().reason,
            IoErrorReason::NotFound
        );
    }
}
