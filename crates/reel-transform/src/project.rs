//! Schema projection onto the canonical column order.

use reel_model::{CanonicalColumn, CanonicalRecord, CanonicalTable};

/// Reshape records to exactly `order`.
///
/// Optional fields whose column is not in `order` are cleared so the table
/// carries no data outside its schema. Columns in `order` that a record has
/// no value for stay absent. No rows are removed.
pub fn project(records: Vec<CanonicalRecord>, order: &[CanonicalColumn]) -> CanonicalTable {
    let keep = |column: CanonicalColumn| order.contains(&column);
    let records = records
        .into_iter()
        .map(|mut record| {
            if !keep(CanonicalColumn::Year) {
                record.year = None;
            }
            if !keep(CanonicalColumn::MovieRated) {
                record.movie_rated = None;
            }
            if !keep(CanonicalColumn::RunLength) {
                record.run_length = None;
            }
            if !keep(CanonicalColumn::Rating) {
                record.rating = None;
            }
            if !keep(CanonicalColumn::NumRaters) {
                record.num_raters = None;
            }
            if !keep(CanonicalColumn::NumReviews) {
                record.num_reviews = None;
            }
            record
        })
        .collect();
    CanonicalTable::new(order.to_vec(), records)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use reel_model::FieldValue;

    use super::*;

    #[test]
    fn clears_fields_outside_the_order() {
        let record = CanonicalRecord {
            name: "Inception".to_string(),
            year: Some(2010),
            movie_rated: Some("PG-13".to_string()),
            run_length: Some(148),
            genres: vec!["Action".to_string()],
            release_date: NaiveDate::from_ymd_opt(2010, 7, 16).unwrap(),
            rating: Some(8.8),
            num_raters: Some(1_981_675),
            num_reviews: Some(3820),
        };
        let order = [
            CanonicalColumn::ReleaseDate,
            CanonicalColumn::Name,
            CanonicalColumn::Genres,
            CanonicalColumn::Rating,
        ];
        let table = project(vec![record], &order);
        assert_eq!(table.column_names(), vec!["release_date", "name", "genres", "rating"]);
        let projected = &table.records[0];
        assert_eq!(projected.year, None);
        assert_eq!(projected.movie_rated, None);
        assert_eq!(projected.run_length, None);
        assert_eq!(projected.num_reviews, None);
        assert_eq!(projected.rating, Some(8.8));
        assert_eq!(projected.value(CanonicalColumn::Year), FieldValue::Absent);
    }
}
