//! Configuration options for the cleaning pipeline.
//!
//! The required-column list, the ignore-if-missing drop list and the
//! canonical output order are the single source of truth for the schema.
//! They are plain data so they can be loaded from a config file.

use serde::{Deserialize, Serialize};

use crate::record::CanonicalColumn;

/// How release-date text is matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateParseMode {
    /// Only `<day> <month-name> <year>`, with an optional trailing parenthetical.
    #[default]
    Strict,
    /// Strict format first, then other text-month layouts seen in older exports.
    Lenient,
}

/// Column-level schema configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaConfig {
    /// Columns the raw table must carry before any transformation.
    pub required_columns: Vec<String>,

    /// Columns removed right after deduplication, before normalization, when present.
    pub drop_columns: Vec<String>,

    /// Output columns, in output order.
    pub canonical_columns: Vec<CanonicalColumn>,

    /// Separator between genre tags in the source text.
    ///
    /// Whitespace around tags is trimmed, so `";"` also covers `"; "`.
    pub genre_delimiter: String,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            required_columns: [
                "name",
                "year",
                "movie_rated",
                "run_length",
                "genres",
                "release_date",
                "rating",
                "num_raters",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            drop_columns: vec!["review_url".to_string(), "num_reviews".to_string()],
            canonical_columns: vec![
                CanonicalColumn::Name,
                CanonicalColumn::ReleaseDate,
                CanonicalColumn::Genres,
                CanonicalColumn::Rating,
                CanonicalColumn::RunLength,
                CanonicalColumn::NumRaters,
            ],
            genre_delimiter: ";".to_string(),
        }
    }
}

impl SchemaConfig {
    pub fn is_required(&self, column: &str) -> bool {
        self.required_columns.iter().any(|name| name == column)
    }

    pub fn is_dropped(&self, column: &str) -> bool {
        self.drop_columns.iter().any(|name| name == column)
    }

    /// Separator used when genre tags are written back out.
    pub fn genre_joiner(&self) -> String {
        format!("{} ", self.genre_delimiter.trim_end())
    }

    pub fn with_canonical_columns(mut self, columns: Vec<CanonicalColumn>) -> Self {
        self.canonical_columns = columns;
        self
    }

    pub fn with_genre_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.genre_delimiter = delimiter.into();
        self
    }
}

/// Options controlling a pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleaningOptions {
    pub schema: SchemaConfig,
    pub date_mode: DateParseMode,
}

impl CleaningOptions {
    pub fn new(schema: SchemaConfig) -> Self {
        Self {
            schema,
            date_mode: DateParseMode::Strict,
        }
    }

    /// Default schema with strict date matching.
    pub fn strict() -> Self {
        Self::default()
    }

    /// Default schema with the text-month date fallbacks enabled.
    pub fn lenient() -> Self {
        Self {
            date_mode: DateParseMode::Lenient,
            ..Self::default()
        }
    }

    pub fn with_date_mode(mut self, mode: DateParseMode) -> Self {
        self.date_mode = mode;
        self
    }
}
