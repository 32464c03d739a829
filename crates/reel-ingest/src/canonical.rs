//! Canonical table format.
//!
//! A canonical file has a header of canonical column names followed by one
//! line per record. Dates are `YYYY-MM-DD`, genre tags are joined with the
//! configured delimiter, floats use their shortest round-trip form and
//! absent values are empty cells.

use std::io::Write;
use std::path::Path;

use chrono::NaiveDate;
use csv::WriterBuilder;
use tracing::{debug, info};

use reel_model::{CanonicalColumn, CanonicalRecord, CanonicalTable, FieldValue, SchemaConfig};
use reel_transform::{parse_count, parse_f64, split_genres};

use crate::csv_table::read_csv_table;
use crate::error::{IngestError, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Render one cell for output.
pub fn render_value(value: &FieldValue, genre_joiner: &str) -> String {
    match value {
        FieldValue::Text(text) => text.clone(),
        FieldValue::Integer(v) => v.to_string(),
        FieldValue::Float(v) => v.to_string(),
        FieldValue::Date(date) => date.format(DATE_FORMAT).to_string(),
        FieldValue::Tags(tags) => tags.join(genre_joiner),
        FieldValue::Absent => String::new(),
    }
}

/// Encode `table` as canonical CSV into `writer`.
pub fn write_canonical<W: Write>(
    table: &CanonicalTable,
    schema: &SchemaConfig,
    writer: W,
) -> std::result::Result<(), csv::Error> {
    let joiner = schema.genre_joiner();
    let mut csv_writer = WriterBuilder::new().from_writer(writer);
    csv_writer.write_record(table.column_names())?;
    for row in table.rows() {
        csv_writer.write_record(row.iter().map(|value| render_value(value, &joiner)))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write `table` to `path`, replacing any existing file.
///
/// The whole file is encoded in memory first, so an encoding failure leaves
/// the destination untouched.
pub fn save_canonical(table: &CanonicalTable, schema: &SchemaConfig, path: &Path) -> Result<()> {
    let mut buffer = Vec::new();
    write_canonical(table, schema, &mut buffer).map_err(|e| IngestError::CsvWrite {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    std::fs::write(path, &buffer).map_err(|source| IngestError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        path = %path.display(),
        rows = table.len(),
        columns = table.columns.len(),
        "wrote canonical table"
    );
    Ok(())
}

/// Read a canonical file written by [`save_canonical`].
///
/// A header-only file is a valid, empty table.
pub fn load_canonical(path: &Path, schema: &SchemaConfig) -> Result<CanonicalTable> {
    let raw = read_csv_table(path)?;
    if raw.headers.is_empty() {
        return Err(IngestError::EmptyInput {
            path: path.to_path_buf(),
        });
    }
    let invalid = |line: u64, column: &str, message: String| IngestError::InvalidCanonical {
        path: path.to_path_buf(),
        line,
        column: column.to_string(),
        message,
    };

    let mut columns = Vec::with_capacity(raw.headers.len());
    for header in &raw.headers {
        let column: CanonicalColumn = header
            .parse()
            .map_err(|e: reel_model::ModelError| invalid(1, header, e.to_string()))?;
        columns.push(column);
    }
    for required in [CanonicalColumn::Name, CanonicalColumn::ReleaseDate] {
        if !columns.contains(&required) {
            return Err(invalid(1, required.as_str(), "column is missing".to_string()));
        }
    }

    let mut records = Vec::with_capacity(raw.height());
    for (idx, row) in raw.rows.iter().enumerate() {
        let line = idx as u64 + 2;
        let mut record = CanonicalRecord {
            name: String::new(),
            year: None,
            movie_rated: None,
            run_length: None,
            genres: Vec::new(),
            release_date: NaiveDate::MIN,
            rating: None,
            num_raters: None,
            num_reviews: None,
        };
        for (column, value) in columns.iter().zip(row) {
            let bad = |what: &str| invalid(line, column.as_str(), format!("invalid {what} '{value}'"));
            let present = !value.is_empty();
            match column {
                CanonicalColumn::Name => {
                    if !present {
                        return Err(invalid(line, "name", "name is empty".to_string()));
                    }
                    record.name = value.clone();
                }
                CanonicalColumn::ReleaseDate => {
                    record.release_date = NaiveDate::parse_from_str(value, DATE_FORMAT)
                        .map_err(|_| bad("date"))?;
                }
                CanonicalColumn::Genres => {
                    record.genres = split_genres(value, &schema.genre_delimiter);
                }
                CanonicalColumn::MovieRated => {
                    record.movie_rated = present.then(|| value.clone());
                }
                CanonicalColumn::Year if present => {
                    record.year = Some(value.parse().map_err(|_| bad("year"))?);
                }
                CanonicalColumn::RunLength if present => {
                    record.run_length = Some(value.parse().map_err(|_| bad("run length"))?);
                }
                CanonicalColumn::Rating if present => {
                    record.rating = Some(parse_f64(value).ok_or_else(|| bad("rating"))?);
                }
                CanonicalColumn::NumRaters if present => {
                    record.num_raters = Some(parse_count(value).ok_or_else(|| bad("count"))?);
                }
                CanonicalColumn::NumReviews if present => {
                    record.num_reviews = Some(parse_count(value).ok_or_else(|| bad("count"))?);
                }
                _ => {}
            }
        }
        records.push(record);
    }
    debug!(path = %path.display(), rows = records.len(), "loaded canonical table");
    Ok(CanonicalTable::new(columns, records))
}
