use std::collections::BTreeSet;

use reel_model::{CanonicalColumn, SchemaConfig};

use crate::error::ConfigError;

const MANDATORY: [CanonicalColumn; 3] = [
    CanonicalColumn::Name,
    CanonicalColumn::ReleaseDate,
    CanonicalColumn::Genres,
];

/// Check that the canonical order is a subset of the required columns minus
/// the dropped ones, and that it carries the identity and date columns.
pub fn check_config(schema: &SchemaConfig) -> Result<(), ConfigError> {
    if schema.genre_delimiter.trim().is_empty() {
        return Err(ConfigError::EmptyDelimiter);
    }
    if schema.canonical_columns.is_empty() {
        return Err(ConfigError::EmptyCanonical);
    }
    let mut seen = BTreeSet::new();
    for column in &schema.canonical_columns {
        let name = column.as_str();
        if !seen.insert(*column) {
            return Err(ConfigError::DuplicateCanonical {
                column: name.to_string(),
            });
        }
        if schema.is_dropped(name) {
            return Err(ConfigError::CanonicalDropped {
                column: name.to_string(),
            });
        }
        if !schema.is_required(name) {
            return Err(ConfigError::CanonicalNotRequired {
                column: name.to_string(),
            });
        }
    }
    for column in MANDATORY {
        if !seen.contains(&column) {
            return Err(ConfigError::MandatoryColumn {
                column: column.as_str().to_string(),
            });
        }
    }
    Ok(())
}
