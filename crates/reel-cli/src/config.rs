//! Loading cleaning options from a TOML file.

use std::path::Path;

use tracing::info;

use reel_model::CleaningOptions;

use crate::error::PipelineError;

/// Read `path` as TOML into [`CleaningOptions`]. Missing keys take their defaults.
pub fn load_options(path: &Path) -> Result<CleaningOptions, PipelineError> {
    let contents = std::fs::read_to_string(path).map_err(|e| PipelineError::ConfigFile {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let options: CleaningOptions =
        toml::from_str(&contents).map_err(|e| PipelineError::ConfigFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    info!(path = %path.display(), "loaded cleaning options");
    Ok(options)
}

/// Options from `path` when given, defaults otherwise.
pub fn resolve_options(path: Option<&Path>) -> Result<CleaningOptions, PipelineError> {
    match path {
        Some(path) => load_options(path),
        None => Ok(CleaningOptions::default()),
    }
}
