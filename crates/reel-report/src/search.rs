//! Genre/year search.

use std::collections::BTreeSet;

use reel_model::{CanonicalRecord, CanonicalTable};

/// True when `genre` is one of the record's tags and the record was released in `year`.
pub fn matches_genre_year(record: &CanonicalRecord, genre: &str, year: i32) -> bool {
    record.release_year() == year && record.genres.iter().any(|tag| tag == genre)
}

/// Records matching [`matches_genre_year`], in table order.
pub fn search<'a>(table: &'a CanonicalTable, genre: &str, year: i32) -> Vec<&'a CanonicalRecord> {
    table
        .records
        .iter()
        .filter(|record| matches_genre_year(record, genre, year))
        .collect()
}

/// Every distinct genre tag, sorted.
pub fn available_genres(table: &CanonicalTable) -> Vec<String> {
    let genres: BTreeSet<&str> = table
        .records
        .iter()
        .flat_map(|record| record.genres.iter().map(String::as_str))
        .collect();
    genres.into_iter().map(String::from).collect()
}

/// Every distinct release year, ascending.
pub fn available_years(table: &CanonicalTable) -> Vec<i32> {
    let years: BTreeSet<i32> = table
        .records
        .iter()
        .map(CanonicalRecord::release_year)
        .collect();
    years.into_iter().collect()
}
