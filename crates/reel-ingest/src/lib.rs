//! Persistence adapter: the only I/O boundary of the cleaning pipeline.
//!
//! - [`load_raw`] reads the source CSV into a [`reel_model::RawTable`]
//! - [`save_canonical`] writes a canonical table, overwriting the destination
//! - [`load_canonical`] reads a canonical file back into typed records

pub mod canonical;
pub mod csv_table;
pub mod error;

pub use canonical::{load_canonical, render_value, save_canonical, write_canonical};
pub use csv_table::{load_raw, read_csv_table};
pub use error::{IngestError, Result};
