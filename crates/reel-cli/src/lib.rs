//! Library side of the `reel` CLI: the explicit pipeline entry point,
//! configuration loading and logging setup.

pub mod config;
pub mod error;
pub mod logging;
pub mod pipeline;

pub use error::PipelineError;
pub use pipeline::{CleanReport, CleanRequest, default_output_path, run_clean};
