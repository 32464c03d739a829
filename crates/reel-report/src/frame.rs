//! Polars frames handed to the plotting layer.

use std::fs::File;
use std::path::Path;

use polars::prelude::{
    Column, CsvWriter, DataFrame, IntoColumn, NamedFrom, PlSmallStr, PolarsResult, SerWriter,
    Series,
};

use reel_model::{CanonicalColumn, CanonicalTable};

use crate::error::ReportError;

fn column_series(table: &CanonicalTable, column: CanonicalColumn) -> Series {
    let name: PlSmallStr = column.as_str().into();
    let records = &table.records;
    match column {
        CanonicalColumn::Name => Series::new(
            name,
            records.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(),
        ),
        CanonicalColumn::Year => {
            Series::new(name, records.iter().map(|r| r.year).collect::<Vec<_>>())
        }
        CanonicalColumn::MovieRated => Series::new(
            name,
            records
                .iter()
                .map(|r| r.movie_rated.as_deref())
                .collect::<Vec<_>>(),
        ),
        CanonicalColumn::RunLength => Series::new(
            name,
            records.iter().map(|r| r.run_length).collect::<Vec<_>>(),
        ),
        CanonicalColumn::Genres => {
            let lists: Vec<Series> = records
                .iter()
                .map(|r| Series::new(PlSmallStr::EMPTY, r.genres.as_slice()))
                .collect();
            Series::new(name, lists)
        }
        CanonicalColumn::ReleaseDate => Series::new(
            name,
            records
                .iter()
                .map(|r| r.release_date.format("%Y-%m-%d").to_string())
                .collect::<Vec<_>>(),
        ),
        CanonicalColumn::Rating => {
            Series::new(name, records.iter().map(|r| r.rating).collect::<Vec<_>>())
        }
        CanonicalColumn::NumRaters => Series::new(
            name,
            records.iter().map(|r| r.num_raters).collect::<Vec<_>>(),
        ),
        CanonicalColumn::NumReviews => Series::new(
            name,
            records.iter().map(|r| r.num_reviews).collect::<Vec<_>>(),
        ),
    }
}

/// The canonical table as a `DataFrame`, columns in canonical order.
///
/// `genres` is a list column; absent values are nulls.
pub fn to_dataframe(table: &CanonicalTable) -> PolarsResult<DataFrame> {
    let columns: Vec<Column> = table
        .columns
        .iter()
        .map(|column| column_series(table, *column).into_column())
        .collect();
    DataFrame::new(columns)
}

/// One row per (record, genre tag). Records without tags contribute no rows.
pub fn explode_genres(table: &CanonicalTable) -> PolarsResult<DataFrame> {
    let mut names: Vec<&str> = Vec::new();
    let mut years: Vec<i32> = Vec::new();
    let mut genres: Vec<&str> = Vec::new();
    let mut ratings: Vec<Option<f64>> = Vec::new();
    let mut runtimes: Vec<Option<u32>> = Vec::new();
    let mut raters: Vec<Option<u64>> = Vec::new();
    for record in &table.records {
        for genre in &record.genres {
            names.push(&record.name);
            years.push(record.release_year());
            genres.push(genre);
            ratings.push(record.rating);
            runtimes.push(record.run_length);
            raters.push(record.num_raters);
        }
    }
    DataFrame::new(vec![
        Series::new("name".into(), names).into_column(),
        Series::new("release_year".into(), years).into_column(),
        Series::new("genre".into(), genres).into_column(),
        Series::new("rating".into(), ratings).into_column(),
        Series::new("run_length".into(), runtimes).into_column(),
        Series::new("num_raters".into(), raters).into_column(),
    ])
}

/// Write the exploded genre frame as CSV, replacing `path`.
pub fn write_exploded(table: &CanonicalTable, path: &Path) -> Result<usize, ReportError> {
    let mut frame = explode_genres(table)?;
    let mut file = File::create(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut frame)?;
    Ok(frame.height())
}
