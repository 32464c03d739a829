//! Error types for schema and configuration validation.

use thiserror::Error;

/// Failures of the schema gate. Both abort the run before any transformation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// The table has a header but no data rows.
    #[error("input has no data rows")]
    EmptyInput,

    /// A required column is not in the table's header.
    #[error("required column '{column}' is missing")]
    MissingColumn { column: String },
}

/// An inconsistent schema configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("canonical column list is empty")]
    EmptyCanonical,

    #[error("canonical column '{column}' is listed more than once")]
    DuplicateCanonical { column: String },

    #[error("canonical column '{column}' is not in the required column set")]
    CanonicalNotRequired { column: String },

    #[error("canonical column '{column}' is also in the drop list")]
    CanonicalDropped { column: String },

    #[error("canonical schema must include '{column}'")]
    MandatoryColumn { column: String },

    #[error("genre delimiter must not be empty")]
    EmptyDelimiter,
}
