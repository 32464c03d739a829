//! Column-level normalizers.
//!
//! - **runtime**: `"2h 32min"` to minutes
//! - **datetime**: `"18 July 2008 (USA)"` to a calendar date
//! - **genres**: delimited genre text to ordered, unique tags
//! - **numeric**: ratings, counts and years

pub mod datetime;
pub mod genres;
pub mod numeric;
pub mod runtime;

pub use datetime::{parse_release_date, strip_parenthetical};
pub use genres::split_genres;
pub use numeric::{parse_count, parse_f64, parse_i64, parse_year};
pub use runtime::parse_runtime;
