use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use reel_model::RawTable;

use crate::error::{IngestError, Result};

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a CSV file into a [`RawTable`]. The first non-blank line is the header.
///
/// Fully blank lines are skipped and short rows are padded. A file with no
/// content yields an empty table; see [`load_raw`] for the checked variant.
pub fn read_csv_table(path: &Path) -> Result<RawTable> {
    std::fs::metadata(path).map_err(|e| IngestError::io(path, e))?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| IngestError::csv(path, e))?;
    let mut headers: Option<Vec<String>> = None;
    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::csv(path, e))?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        if headers.is_none() {
            headers = Some(record.iter().map(normalize_header).collect());
            continue;
        }
        rows.push(record.iter().map(normalize_cell).collect());
    }
    let table = RawTable::new(headers.unwrap_or_default(), rows);
    debug!(
        path = %path.display(),
        columns = table.width(),
        rows = table.height(),
        "read csv table"
    );
    Ok(table)
}

/// Load the raw source table.
///
/// Fails with [`IngestError::FileNotFound`] when `path` does not exist and
/// with [`IngestError::EmptyInput`] when it holds no data rows.
pub fn load_raw(path: &Path) -> Result<RawTable> {
    let table = read_csv_table(path)?;
    if table.is_empty() {
        return Err(IngestError::EmptyInput {
            path: path.to_path_buf(),
        });
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_are_trimmed_and_collapsed() {
        assert_eq!(normalize_header("\u{feff} name "), "name");
        assert_eq!(normalize_header("release   date"), "release date");
    }

    #[test]
    fn cells_are_trimmed() {
        assert_eq!(normalize_cell("  2h 32min "), "2h 32min");
    }
}
