//! Schema gate for raw movie tables.
//!
//! [`validate`] is the first stage of every run: it rejects empty inputs and
//! inputs missing a required column. [`check_config`] rejects schema
//! configurations whose canonical order disagrees with the required and
//! dropped column lists.

pub mod config;
pub mod error;
pub mod schema;

pub use config::check_config;
pub use error::{ConfigError, SchemaError};
pub use schema::{missing_columns, validate};
