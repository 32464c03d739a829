use tracing::warn;

use reel_model::{RawTable, SchemaConfig};

use crate::error::SchemaError;

/// Required columns absent from the table, in required-list order.
pub fn missing_columns<'a>(table: &RawTable, schema: &'a SchemaConfig) -> Vec<&'a str> {
    schema
        .required_columns
        .iter()
        .map(String::as_str)
        .filter(|column| !table.has_column(column))
        .collect()
}

/// Check that `table` is non-empty and carries every required column.
///
/// Reports the first missing column; the full list is logged.
pub fn validate(table: &RawTable, schema: &SchemaConfig) -> Result<(), SchemaError> {
    if table.is_empty() {
        return Err(SchemaError::EmptyInput);
    }
    let missing = missing_columns(table, schema);
    if let Some(first) = missing.first() {
        if missing.len() > 1 {
            warn!(missing = ?missing, "multiple required columns missing");
        }
        return Err(SchemaError::MissingColumn {
            column: (*first).to_string(),
        });
    }
    Ok(())
}
