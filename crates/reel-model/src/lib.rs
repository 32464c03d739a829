//! Data model for the movie cleaning pipeline.
//!
//! - **table**: the raw, untyped table exactly as read from storage
//! - **record**: canonical columns, typed records and the canonical table
//! - **options**: schema configuration and parser strictness

pub mod error;
pub mod options;
pub mod record;
pub mod table;

pub use error::{ModelError, Result};
pub use options::{CleaningOptions, DateParseMode, SchemaConfig};
pub use record::{CanonicalColumn, CanonicalRecord, CanonicalTable};
pub use table::{FieldValue, RawTable};
