//! Scan and rename errors.

use std::{fmt, path::PathBuf};

/// Failure to locate or read the creation time in a MOV/MP4 stream.
#[derive(Debug)]
pub enum FormatError {
    /// Stream ended (or failed) before a structurally required
    /// read completed. Also covers files without a `moov` atom,
    /// since the top-level scan only stops at end of stream.
    Truncated(std::io::Error),
    /// `moov` holds a compressed movie (`cmov`).
    Compressed,
    /// `moov` holds a reference movie (`rmra`),
    /// pointing to external movie data.
    ReferenceMovie,
    /// Movie header atom (`mvhd`) not located in `moov`.
    HeaderNotFound,
    /// Atom size that can not be used to reach the next atom.
    /// Includes `0` (atom extends to end of file) and
    /// `1` (64-bit size follows), which are not supported.
    UnexpectedAtomSize{size: u32, offset: u64},
}

impl std::error::Error for FormatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormatError::Truncated(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::Truncated(err) => write!(f, "Truncated stream or missing movie atom (moov): {err}"),
            FormatError::Compressed => write!(f, "Compressed movie (cmov) is not supported"),
            FormatError::ReferenceMovie => write!(f, "Reference movie (rmra) has no movie header"),
            FormatError::HeaderNotFound => write!(f, "Did not find movie header atom (mvhd)"),
            FormatError::UnexpectedAtomSize{size: 0, offset} => write!(f, "Unsupported atom size 0 (extends to end of file) @ offset {offset}"),
            FormatError::UnexpectedAtomSize{size: 1, offset} => write!(f, "Unsupported atom size 1 (64-bit size) @ offset {offset}"),
            FormatError::UnexpectedAtomSize{size, offset} => write!(f, "Unexpected atom size of {size} bytes @ offset {offset}"),
        }
    }
}

/// Read and seek failures are all terminal for a scan.
impl From<std::io::Error> for FormatError {
    fn from(err: std::io::Error) -> Self {
        FormatError::Truncated(err)
    }
}

/// Converts binrw::Error to FormatError.
/// Fixed size headers only fail on IO. Derived readers wrap
/// field errors in a backtrace, which is unwrapped to keep
/// the original IO error.
impl From<binrw::Error> for FormatError {
    fn from(err: binrw::Error) -> FormatError {
        match err {
            binrw::Error::Io(err) => FormatError::Truncated(err),
            binrw::Error::Backtrace(bt) => FormatError::from(*bt.error),
            other => FormatError::Truncated(
                std::io::Error::new(std::io::ErrorKind::InvalidData, other.to_string())
            ),
        }
    }
}

/// Per-file and run level errors.
#[derive(Debug)]
pub enum StampError {
    /// Failed to open a file for scanning.
    Open{path: PathBuf, err: std::io::Error},
    /// Failed to extract creation time.
    Format{path: PathBuf, err: FormatError},
    /// Path has no final component to rename.
    NoFileName(PathBuf),
    /// Rename target already exists.
    TargetExists(PathBuf),
    /// Failed to rename file.
    Rename{from: PathBuf, to: PathBuf, err: std::io::Error},
    /// Failed to read discovery root.
    Walk(walkdir::Error),
    /// Failed to format creation time.
    DateFormat(time::error::Format),
    /// Invalid date format description.
    InvalidDateFormat(String),
}

impl std::error::Error for StampError {}

impl fmt::Display for StampError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StampError::Open{path, err} => write!(f, "Failed to open '{}': {err}", path.display()),
            StampError::Format{path, err} => write!(f, "{}: {err}", path.display()),
            StampError::NoFileName(path) => write!(f, "No file name in '{}'", path.display()),
            StampError::TargetExists(path) => write!(f, "'{}' already exists", path.display()),
            StampError::Rename{from, to, err} => write!(f, "Failed to rename '{}' to '{}': {err}", from.display(), to.display()),
            StampError::Walk(err) => write!(f, "{err}"),
            StampError::DateFormat(err) => write!(f, "{err}"),
            StampError::InvalidDateFormat(msg) => write!(f, "Invalid date format: {msg}"),
        }
    }
}

impl From<walkdir::Error> for StampError {
    fn from(err: walkdir::Error) -> Self {
        StampError::Walk(err)
    }
}

impl From<time::error::Format> for StampError {
    fn from(err: time::error::Format) -> Self {
        StampError::DateFormat(err)
    }
}
