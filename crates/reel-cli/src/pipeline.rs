//! Cleaning pipeline with explicit stages.
//!
//! The stages run in this order:
//! 1. **Config**: reject inconsistent schema configuration
//! 2. **Load**: read the raw CSV
//! 3. **Validate**: empty-input and required-column gate
//! 4. **Dedupe**: drop exact duplicate rows, first occurrence wins
//! 5. **Drop**: remove ignore-if-missing columns
//! 6. **Normalize**: runtime, release date, genres and numeric fields
//! 7. **Date gate**: drop rows without a release date or name
//! 8. **Project**: reshape to the canonical column order
//! 9. **Save**: write the canonical table (skipped on dry runs)
//!
//! A fatal error in any stage stops the run before anything is written.

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, info, info_span};

use reel_ingest::{load_raw, save_canonical};
use reel_model::{CanonicalTable, CleaningOptions};
use reel_transform::{dedupe_rows, drop_columns, normalize_rows, project, retain_dated};
use reel_validate::{check_config, validate};

use crate::error::PipelineError;

/// One invocation of the cleaning pipeline.
#[derive(Debug, Clone)]
pub struct CleanRequest {
    pub input: PathBuf,
    /// Destination, defaulting to [`default_output_path`] of `input`.
    pub output: Option<PathBuf>,
    pub options: CleaningOptions,
    /// Run every stage but skip the final write.
    pub dry_run: bool,
}

impl CleanRequest {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: None,
            options: CleaningOptions::default(),
            dry_run: false,
        }
    }

    #[must_use]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: CleaningOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.input))
    }
}

/// Counts and paths reported by a successful run.
#[derive(Debug, Clone)]
pub struct CleanReport {
    pub input: PathBuf,
    pub rows_read: usize,
    pub duplicates_removed: usize,
    pub columns_dropped: Vec<String>,
    pub undated_rows_dropped: usize,
    pub unnamed_rows_dropped: usize,
    /// Surviving rows whose runtime could not be parsed.
    pub runtime_gaps: usize,
    pub rows_written: usize,
    pub columns: Vec<&'static str>,
    /// `None` on dry runs.
    pub output: Option<PathBuf>,
    pub table: CanonicalTable,
}

/// `movies.csv` becomes `movies_clean.csv` next to it.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "movies".to_string());
    input.with_file_name(format!("{stem}_clean.csv"))
}

/// Run every stage against `request.input`.
///
/// # Errors
///
/// Returns the first fatal [`PipelineError`]; the output file is untouched in
/// that case.
pub fn run_clean(request: &CleanRequest) -> Result<CleanReport, PipelineError> {
    let span = info_span!("clean", input = %request.input.display());
    let _guard = span.enter();
    let start = Instant::now();
    let schema = &request.options.schema;

    // ========================================================================
    // Config
    // ========================================================================
    check_config(schema)?;

    // ========================================================================
    // Load + validate
    // ========================================================================
    let mut raw = {
        let _stage = info_span!("load").entered();
        load_raw(&request.input)?
    };
    let rows_read = raw.height();
    {
        let _stage = info_span!("validate").entered();
        validate(&raw, schema).map_err(|e| PipelineError::schema(e, request.input.clone()))?;
    }
    info!(rows = rows_read, columns = raw.width(), "raw table loaded");

    // ========================================================================
    // Filter + normalize
    // ========================================================================
    let duplicates_removed = dedupe_rows(&mut raw);
    let columns_dropped = drop_columns(&mut raw, &schema.drop_columns);
    debug!(
        duplicates = duplicates_removed,
        dropped = ?columns_dropped,
        "raw rows filtered"
    );

    let normalized = {
        let _stage = info_span!("normalize", rows = raw.height()).entered();
        normalize_rows(&raw, &request.options)
    };
    let gate = retain_dated(normalized);
    let runtime_gaps = gate
        .records
        .iter()
        .filter(|record| record.run_length.is_none())
        .count();
    if gate.undated > 0 {
        info!(rows = gate.undated, "dropped rows without a release date");
    }

    // ========================================================================
    // Project + save
    // ========================================================================
    let table = project(gate.records, &schema.canonical_columns);
    let output = if request.dry_run {
        info!("dry run, canonical table not written");
        None
    } else {
        let path = request.output_path();
        let _stage = info_span!("save", output = %path.display()).entered();
        save_canonical(&table, schema, &path)?;
        Some(path)
    };

    let report = CleanReport {
        input: request.input.clone(),
        rows_read,
        duplicates_removed,
        columns_dropped,
        undated_rows_dropped: gate.undated,
        unnamed_rows_dropped: gate.unnamed,
        runtime_gaps,
        rows_written: table.len(),
        columns: table.column_names(),
        output,
        table,
    };
    info!(
        rows_read = report.rows_read,
        rows_written = report.rows_written,
        duplicates = report.duplicates_removed,
        undated = report.undated_rows_dropped,
        duration_ms = start.elapsed().as_millis(),
        "clean complete"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_sits_next_to_input() {
        assert_eq!(
            default_output_path(Path::new("data/movies.csv")),
            PathBuf::from("data/movies_clean.csv")
        );
        assert_eq!(
            default_output_path(Path::new("raw")),
            PathBuf::from("raw_clean.csv")
        );
    }

    #[test]
    fn explicit_output_wins() {
        let request = CleanRequest::new("movies.csv").with_output("out/clean.csv");
        assert_eq!(request.output_path(), PathBuf::from("out/clean.csv"));
    }
}
