//! Canonical columns, typed movie records and the canonical table.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::table::FieldValue;

/// Every column a canonical table may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalColumn {
    Name,
    Year,
    MovieRated,
    RunLength,
    Genres,
    ReleaseDate,
    Rating,
    NumRaters,
    NumReviews,
}

impl CanonicalColumn {
    pub const ALL: [CanonicalColumn; 9] = [
        CanonicalColumn::Name,
        CanonicalColumn::Year,
        CanonicalColumn::MovieRated,
        CanonicalColumn::RunLength,
        CanonicalColumn::Genres,
        CanonicalColumn::ReleaseDate,
        CanonicalColumn::Rating,
        CanonicalColumn::NumRaters,
        CanonicalColumn::NumReviews,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CanonicalColumn::Name => "name",
            CanonicalColumn::Year => "year",
            CanonicalColumn::MovieRated => "movie_rated",
            CanonicalColumn::RunLength => "run_length",
            CanonicalColumn::Genres => "genres",
            CanonicalColumn::ReleaseDate => "release_date",
            CanonicalColumn::Rating => "rating",
            CanonicalColumn::NumRaters => "num_raters",
            CanonicalColumn::NumReviews => "num_reviews",
        }
    }
}

impl fmt::Display for CanonicalColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CanonicalColumn {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        CanonicalColumn::ALL
            .into_iter()
            .find(|column| column.as_str() == trimmed)
            .ok_or_else(|| ModelError::UnknownColumn(trimmed.to_string()))
    }
}

/// One validated movie row.
///
/// `release_date` is always present; rows whose date could not be parsed
/// never become a `CanonicalRecord`. `run_length` may be absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalRecord {
    pub name: String,
    pub year: Option<i32>,
    pub movie_rated: Option<String>,
    pub run_length: Option<u32>,
    pub genres: Vec<String>,
    pub release_date: NaiveDate,
    pub rating: Option<f64>,
    pub num_raters: Option<u64>,
    pub num_reviews: Option<u64>,
}

impl CanonicalRecord {
    /// Year derived from the release date.
    pub fn release_year(&self) -> i32 {
        self.release_date.year()
    }

    pub fn value(&self, column: CanonicalColumn) -> FieldValue {
        match column {
            CanonicalColumn::Name => FieldValue::text(&self.name),
            CanonicalColumn::Year => self.year.map(i64::from).into(),
            CanonicalColumn::MovieRated => self
                .movie_rated
                .as_deref()
                .map_or(FieldValue::Absent, FieldValue::text),
            CanonicalColumn::RunLength => self.run_length.map(i64::from).into(),
            CanonicalColumn::Genres => FieldValue::Tags(self.genres.clone()),
            CanonicalColumn::ReleaseDate => FieldValue::Date(self.release_date),
            CanonicalColumn::Rating => self.rating.into(),
            CanonicalColumn::NumRaters => count_value(self.num_raters),
            CanonicalColumn::NumReviews => count_value(self.num_reviews),
        }
    }
}

fn count_value(value: Option<u64>) -> FieldValue {
    value
        .and_then(|count| i64::try_from(count).ok())
        .into()
}

/// The write-once output of a pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalTable {
    pub columns: Vec<CanonicalColumn>,
    pub records: Vec<CanonicalRecord>,
}

impl CanonicalTable {
    pub fn new(columns: Vec<CanonicalColumn>, records: Vec<CanonicalRecord>) -> Self {
        Self { columns, records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_column(&self, column: CanonicalColumn) -> bool {
        self.columns.contains(&column)
    }

    pub fn column_names(&self) -> Vec<&'static str> {
        self.columns.iter().map(|column| column.as_str()).collect()
    }

    /// Cells of every record, laid out in column order.
    pub fn rows(&self) -> impl Iterator<Item = Vec<FieldValue>> + '_ {
        self.records.iter().map(|record| {
            self.columns
                .iter()
                .map(|column| record.value(*column))
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> CanonicalRecord {
        CanonicalRecord {
            name: "The Matrix".to_string(),
            year: Some(1999),
            movie_rated: Some("R".to_string()),
            run_length: None,
            genres: vec!["Action".to_string(), "Sci-Fi".to_string()],
            release_date: NaiveDate::from_ymd_opt(1999, 3, 31).unwrap(),
            rating: Some(8.7),
            num_raters: Some(1_619_761),
            num_reviews: None,
        }
    }

    #[test]
    fn column_names_round_trip() {
        for column in CanonicalColumn::ALL {
            assert_eq!(column.as_str().parse::<CanonicalColumn>(), Ok(column));
        }
        assert_eq!(
            "review_url".parse::<CanonicalColumn>(),
            Err(ModelError::UnknownColumn("review_url".to_string()))
        );
    }

    #[test]
    fn rows_follow_column_order() {
        let table = CanonicalTable::new(
            vec![
                CanonicalColumn::RunLength,
                CanonicalColumn::Name,
                CanonicalColumn::ReleaseDate,
            ],
            vec![record()],
        );
        let rows: Vec<Vec<FieldValue>> = table.rows().collect();
        assert_eq!(
            rows[0],
            vec![
                FieldValue::Absent,
                FieldValue::Text("The Matrix".to_string()),
                FieldValue::Date(NaiveDate::from_ymd_opt(1999, 3, 31).unwrap()),
            ]
        );
    }

    #[test]
    fn release_year_comes_from_date() {
        assert_eq!(record().release_year(), 1999);
    }
}
