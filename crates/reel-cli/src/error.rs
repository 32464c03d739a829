//! User-visible failure categories of a pipeline run.

use std::path::PathBuf;

use thiserror::Error;

use reel_ingest::IngestError;
use reel_validate::{ConfigError, SchemaError};

/// A fatal pipeline failure. No output file is written when one occurs.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The input has no data rows.
    #[error("input has no data rows: {path}")]
    EmptyInput { path: PathBuf },

    /// A required column is absent from the input header.
    #[error("required column '{column}' is missing from {path}")]
    MissingColumn { column: String, path: PathBuf },

    /// Any I/O or format failure at the persistence boundary.
    #[error("file handling failed: {0}")]
    FileHandling(#[source] IngestError),

    /// The schema configuration is inconsistent.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The configuration file could not be read or parsed.
    #[error("failed to load config {path}: {message}")]
    ConfigFile { path: PathBuf, message: String },
}

impl PipelineError {
    /// Stable label for the failure category.
    pub fn category(&self) -> &'static str {
        match self {
            PipelineError::EmptyInput { .. } => "EmptyInputError",
            PipelineError::MissingColumn { .. } => "MissingColumnError",
            PipelineError::FileHandling(_) => "FileHandlingError",
            PipelineError::Config(_) | PipelineError::ConfigFile { .. } => "ConfigError",
        }
    }

    pub(crate) fn schema(error: SchemaError, path: PathBuf) -> Self {
        match error {
            SchemaError::EmptyInput => PipelineError::EmptyInput { path },
            SchemaError::MissingColumn { column } => PipelineError::MissingColumn { column, path },
        }
    }
}

impl From<IngestError> for PipelineError {
    fn from(error: IngestError) -> Self {
        match error {
            IngestError::EmptyInput { path } => PipelineError::EmptyInput { path },
            other => PipelineError::FileHandling(other),
        }
    }
}
