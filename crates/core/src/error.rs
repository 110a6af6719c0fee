//! Error types for subtitle text extraction.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during subtitle text extraction.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to open or read the input file.
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// The file extension is not one of the accepted subtitle types.
    #[error("Unsupported file type: {0} (accepted: .srt, .vtt, .ass, .ssa, .sbv, .smi)")]
    UnsupportedFileType(String),

    /// SMI/SAMI content is not well-formed markup.
    #[error("SMI/SAMI parsing error: {0}")]
    MarkupParseError(String),

    /// Extraction ran but produced no text.
    #[error("No text could be extracted")]
    NoTextExtracted,
}

impl Error {
    /// The caller-facing kind of this error, if it has one.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Error::IoError(_) => None,
            Error::UnsupportedFileType(_) => Some(ErrorKind::UnsupportedFileType),
            Error::MarkupParseError(_) => Some(ErrorKind::MarkupParseError),
            Error::NoTextExtracted => Some(ErrorKind::NoTextExtracted),
        }
    }
}

/// Conditions reported back to callers alongside (or instead of) extracted text.
///
/// `NoTextExtracted` and `FormatUndetected` are soft: extraction still ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    UnsupportedFileType,
    MarkupParseError,
    NoTextExtracted,
    FormatUndetected,
}

impl ErrorKind {
    /// Whether extraction still produced a usable (possibly empty) result.
    pub fn is_soft(&self) -> bool {
        matches!(self, ErrorKind::NoTextExtracted | ErrorKind::FormatUndetected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_mapping() {
        assert_eq!(
            Error::MarkupParseError("bad".into()).kind(),
            Some(ErrorKind::MarkupParseError)
        );
        assert_eq!(Error::NoTextExtracted.kind(), Some(ErrorKind::NoTextExtracted));
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        assert_eq!(Error::from(io).kind(), None);
    }

    #[test]
    fn test_soft_kinds() {
        assert!(ErrorKind::FormatUndetected.is_soft());
        assert!(ErrorKind::NoTextExtracted.is_soft());
        assert!(!ErrorKind::MarkupParseError.is_soft());
        assert!(!ErrorKind::UnsupportedFileType.is_soft());
    }
}
