//! Error types for movie table persistence.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing tables.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file does not exist.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write file.
    #[error("failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Errors ===
    /// Malformed CSV content.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Failed to encode CSV output.
    #[error("failed to encode CSV for {path}: {message}")]
    CsvWrite { path: PathBuf, message: String },

    /// The file has no header or no data rows.
    #[error("input has no data rows: {path}")]
    EmptyInput { path: PathBuf },

    // === Canonical Format Errors ===
    /// A canonical file that does not follow the canonical format.
    #[error("invalid canonical file {path} (line {line}, column '{column}'): {message}")]
    InvalidCanonical {
        path: PathBuf,
        line: u64,
        column: String,
        message: String,
    },
}

impl IngestError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::FileRead { path, source }
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, error: csv::Error) -> Self {
        let message = error.to_string();
        match error.into_kind() {
            csv::ErrorKind::Io(source) => Self::io(path, source),
            _ => Self::CsvParse {
                path: path.into(),
                message,
            },
        }
    }
}

/// Result type for persistence operations.
pub type Result<T> = std::result::Result<T, IngestError>;
