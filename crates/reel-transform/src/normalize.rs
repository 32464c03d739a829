//! Row-local normalization of raw movie rows.

use chrono::NaiveDate;

use reel_model::{CleaningOptions, RawTable};

use crate::normalization::{
    parse_count, parse_f64, parse_release_date, parse_runtime, parse_year, split_genres,
};

/// A raw row after every field normalizer has run.
///
/// Each field is `None` when the column is missing from the table or the
/// text could not be normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRecord {
    pub name: Option<String>,
    pub year: Option<i32>,
    pub movie_rated: Option<String>,
    pub run_length: Option<u32>,
    pub genres: Vec<String>,
    pub release_date: Option<NaiveDate>,
    pub rating: Option<f64>,
    pub num_raters: Option<u64>,
    pub num_reviews: Option<u64>,
}

/// Column positions resolved once per table.
struct ColumnIndex {
    name: Option<usize>,
    year: Option<usize>,
    movie_rated: Option<usize>,
    run_length: Option<usize>,
    genres: Option<usize>,
    release_date: Option<usize>,
    rating: Option<usize>,
    num_raters: Option<usize>,
    num_reviews: Option<usize>,
}

impl ColumnIndex {
    fn resolve(table: &RawTable) -> Self {
        Self {
            name: table.column_index("name"),
            year: table.column_index("year"),
            movie_rated: table.column_index("movie_rated"),
            run_length: table.column_index("run_length"),
            genres: table.column_index("genres"),
            release_date: table.column_index("release_date"),
            rating: table.column_index("rating"),
            num_raters: table.column_index("num_raters"),
            num_reviews: table.column_index("num_reviews"),
        }
    }
}

fn cell(row: &[String], idx: Option<usize>) -> Option<&str> {
    idx.and_then(|i| row.get(i)).map(String::as_str)
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Normalize one raw row. Never fails.
pub fn normalize_row(
    table: &RawTable,
    row: &[String],
    options: &CleaningOptions,
) -> NormalizedRecord {
    normalize_with_index(&ColumnIndex::resolve(table), row, options)
}

fn normalize_with_index(
    index: &ColumnIndex,
    row: &[String],
    options: &CleaningOptions,
) -> NormalizedRecord {
    let delimiter = options.schema.genre_delimiter.as_str();
    NormalizedRecord {
        name: cell(row, index.name).and_then(non_empty),
        year: cell(row, index.year).and_then(parse_year),
        movie_rated: cell(row, index.movie_rated).and_then(non_empty),
        run_length: cell(row, index.run_length).and_then(parse_runtime),
        genres: cell(row, index.genres)
            .map(|text| split_genres(text, delimiter))
            .unwrap_or_default(),
        release_date: cell(row, index.release_date)
            .and_then(|text| parse_release_date(text, options.date_mode)),
        rating: cell(row, index.rating).and_then(parse_f64),
        num_raters: cell(row, index.num_raters).and_then(parse_count),
        num_reviews: cell(row, index.num_reviews).and_then(parse_count),
    }
}

/// Normalize every row of `table`, preserving row order.
pub fn normalize_rows(table: &RawTable, options: &CleaningOptions) -> Vec<NormalizedRecord> {
    let index = ColumnIndex::resolve(table);
    table
        .rows
        .iter()
        .map(|row| normalize_with_index(&index, row, options))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(headers: &[&str], rows: &[&[&str]]) -> RawTable {
        RawTable::new(
            headers.iter().map(|h| (*h).to_string()).collect(),
            rows.iter()
                .map(|row| row.iter().map(|c| (*c).to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn normalizes_a_full_row() {
        let table = raw(
            &["name", "year", "run_length", "genres", "release_date", "rating", "num_raters"],
            &[&[
                "The Dark Knight",
                "2008",
                "2h 32min",
                "Action; Crime; Drama;",
                "18 July 2008 (USA)",
                "9.0",
                "2224522",
            ]],
        );
        let records = normalize_rows(&table, &CleaningOptions::default());
        assert_eq!(
            records,
            vec![NormalizedRecord {
                name: Some("The Dark Knight".to_string()),
                year: Some(2008),
                movie_rated: None,
                run_length: Some(152),
                genres: vec!["Action".into(), "Crime".into(), "Drama".into()],
                release_date: NaiveDate::from_ymd_opt(2008, 7, 18),
                rating: Some(9.0),
                num_raters: Some(2_224_522),
                num_reviews: None,
            }]
        );
    }

    #[test]
    fn malformed_fields_become_absent() {
        let table = raw(
            &["name", "run_length", "genres", "release_date", "rating"],
            &[&["Mystery", "unknown", "", "not a date", "?"]],
        );
        let record = normalize_row(&table, &table.rows[0], &CleaningOptions::default());
        assert_eq!(record.name.as_deref(), Some("Mystery"));
        assert_eq!(record.run_length, None);
        assert!(record.genres.is_empty());
        assert_eq!(record.release_date, None);
        assert_eq!(record.rating, None);
    }
}
