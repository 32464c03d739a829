//! Movie table transformation.
//!
//! - **normalization**: pure, total field parsers (runtime, release date,
//!   genres, numeric); malformed input yields `None`, never an error
//! - **normalize**: applies the field parsers row by row
//! - **filter**: raw-row deduplication, column dropping and the date gate
//! - **project**: reshapes surviving records into the canonical table

pub mod filter;
pub mod normalization;
pub mod normalize;
pub mod project;

pub use filter::{DateGate, dedupe_rows, drop_columns, retain_dated};
pub use normalization::{parse_count, parse_f64, parse_release_date, parse_runtime, split_genres};
pub use normalize::{NormalizedRecord, normalize_row, normalize_rows};
pub use project::project;
