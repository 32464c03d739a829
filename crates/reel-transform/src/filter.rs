//! Row filtering: exact-duplicate removal, column dropping and the date gate.
//!
//! Deduplication runs on raw text before normalization. Two rows whose date
//! text differs only in layout are therefore both kept; the source snapshot
//! has no such near-duplicates.

use std::collections::BTreeSet;

use tracing::debug;

use reel_model::{CanonicalRecord, RawTable};

use crate::normalize::NormalizedRecord;

/// Remove rows that are field-for-field copies of an earlier row.
///
/// The first occurrence is kept and survivors stay in their original order.
/// Returns the number of rows removed.
pub fn dedupe_rows(table: &mut RawTable) -> usize {
    let before = table.rows.len();
    let mut seen: BTreeSet<Vec<String>> = BTreeSet::new();
    table.rows.retain(|row| seen.insert(row.clone()));
    before - table.rows.len()
}

/// Remove the named columns when present; absent names are ignored.
///
/// Returns the names that were actually removed.
pub fn drop_columns(table: &mut RawTable, columns: &[String]) -> Vec<String> {
    let mut drop_idx: Vec<usize> = columns
        .iter()
        .filter_map(|name| table.column_index(name))
        .collect();
    drop_idx.sort_unstable();
    drop_idx.dedup();
    let dropped = drop_idx
        .iter()
        .map(|idx| table.headers[*idx].clone())
        .collect();
    for idx in drop_idx.into_iter().rev() {
        table.headers.remove(idx);
        for row in &mut table.rows {
            row.remove(idx);
        }
    }
    dropped
}

/// Outcome of the date gate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DateGate {
    pub records: Vec<CanonicalRecord>,
    /// Rows removed because the release date could not be parsed.
    pub undated: usize,
    /// Rows removed because the name was blank.
    pub unnamed: usize,
}

/// Keep only records with a parsed release date and a non-empty name.
pub fn retain_dated(rows: Vec<NormalizedRecord>) -> DateGate {
    let mut gate = DateGate::default();
    for (idx, row) in rows.into_iter().enumerate() {
        let Some(release_date) = row.release_date else {
            debug!(row = idx, "dropping row with unparseable release date");
            gate.undated += 1;
            continue;
        };
        let Some(name) = row.name else {
            debug!(row = idx, "dropping row with empty name");
            gate.unnamed += 1;
            continue;
        };
        gate.records.push(CanonicalRecord {
            name,
            year: row.year,
            movie_rated: row.movie_rated,
            run_length: row.run_length,
            genres: row.genres,
            release_date,
            rating: row.rating,
            num_raters: row.num_raters,
            num_reviews: row.num_reviews,
        });
    }
    gate
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn raw(rows: &[&[&str]]) -> RawTable {
        RawTable::new(
            vec!["name".into(), "release_date".into(), "review_url".into()],
            rows.iter()
                .map(|row| row.iter().map(|c| (*c).to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn dedupe_keeps_first_and_order() {
        let mut table = raw(&[
            &["B", "1 May 2000", "u1"],
            &["A", "2 May 2000", "u2"],
            &["B", "1 May 2000", "u1"],
            &["B", "1 May 2000", "u9"],
        ]);
        assert_eq!(dedupe_rows(&mut table), 1);
        let names: Vec<&str> = table.rows.iter().map(|r| r[0].as_str()).collect();
        assert_eq!(names, vec!["B", "A", "B"]);
        assert_eq!(table.rows[2][2], "u9");
    }

    #[test]
    fn drop_ignores_missing_columns() {
        let mut table = raw(&[&["A", "2 May 2000", "u2"]]);
        let dropped = drop_columns(
            &mut table,
            &["num_reviews".to_string(), "review_url".to_string()],
        );
        assert_eq!(dropped, vec!["review_url".to_string()]);
        assert_eq!(table.headers, vec!["name", "release_date"]);
        assert_eq!(table.rows[0], vec!["A", "2 May 2000"]);
    }

    #[test]
    fn date_gate_counts_drops() {
        let dated = NormalizedRecord {
            name: Some("Up".to_string()),
            year: None,
            movie_rated: None,
            run_length: None,
            genres: Vec::new(),
            release_date: NaiveDate::from_ymd_opt(2009, 5, 29),
            rating: None,
            num_raters: None,
            num_reviews: None,
        };
        let undated = NormalizedRecord {
            release_date: None,
            ..dated.clone()
        };
        let unnamed = NormalizedRecord {
            name: None,
            ..dated.clone()
        };
        let gate = retain_dated(vec![undated, dated, unnamed]);
        assert_eq!(gate.records.len(), 1);
        assert_eq!(gate.records[0].name, "Up");
        assert_eq!(gate.undated, 1);
        assert_eq!(gate.unnamed, 1);
    }
}
