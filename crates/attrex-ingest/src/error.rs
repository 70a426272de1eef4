//! Error types for document ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while opening and parsing an input document.
///
/// All of these abort the whole run: inputs are validated and parsed
/// before any aggregation begins, so a bad document never produces
/// partial output.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input path does not exist.
    #[error("input document not found: {path}")]
    MissingFile { path: PathBuf },

    /// Input path is a directory or other non-regular file.
    #[error("input is not a regular file: {path}")]
    NotAFile { path: PathBuf },

    /// File is not a valid .docx package.
    #[error("input document {path} is not a .docx file: {reason}")]
    UnsupportedFormat { path: PathBuf, reason: String },

    /// The package opened but its document body failed to parse.
    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// Failed to read the file or a package entry.
    #[error("failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = IngestError::MissingFile {
            path: PathBuf::from("/path/to/TS-0004.docx"),
        };
        assert_eq!(
            err.to_string(),
            "input document not found: /path/to/TS-0004.docx"
        );
    }
}
