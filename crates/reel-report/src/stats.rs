//! Aggregations behind the dashboard charts.
//!
//! Every function is pure over a [`CanonicalTable`]. Absent ratings and
//! runtimes are skipped rather than treated as zero.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use reel_model::{CanonicalColumn, CanonicalRecord, CanonicalTable};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupMean {
    pub key: String,
    pub mean: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupCount {
    pub key: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreYearCount {
    pub year: i32,
    pub genre: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DecadeCount {
    pub decade: i32,
    pub count: usize,
}

/// Half-open `[lower, upper)` bin; the last bin also includes `upper`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

fn rated(table: &CanonicalTable) -> Vec<(&CanonicalRecord, f64)> {
    table
        .records
        .iter()
        .filter_map(|record| record.rating.map(|rating| (record, rating)))
        .collect()
}

fn by_rating_desc(table: &CanonicalTable) -> Vec<&CanonicalRecord> {
    let mut rated = rated(table);
    rated.sort_by(|a, b| b.1.total_cmp(&a.1));
    rated.into_iter().map(|(record, _)| record).collect()
}

/// Highest-rated records, best first. Ties keep table order.
pub fn top_rated(table: &CanonicalTable, n: usize) -> Vec<&CanonicalRecord> {
    let mut sorted = by_rating_desc(table);
    sorted.truncate(n);
    sorted
}

/// Lowest-rated records: the last `n` of the descending ranking.
pub fn bottom_rated(table: &CanonicalTable, n: usize) -> Vec<&CanonicalRecord> {
    let sorted = by_rating_desc(table);
    let start = sorted.len().saturating_sub(n);
    sorted[start..].to_vec()
}

fn means(groups: BTreeMap<String, (f64, usize)>) -> Vec<GroupMean> {
    groups
        .into_iter()
        .map(|(key, (sum, count))| GroupMean {
            key,
            mean: sum / count as f64,
            count,
        })
        .collect()
}

/// Mean rating per genre tag, highest mean first.
pub fn average_rating_by_genre(table: &CanonicalTable) -> Vec<GroupMean> {
    let mut groups: BTreeMap<String, (f64, usize)> = BTreeMap::new();
    for (record, rating) in rated(table) {
        for genre in &record.genres {
            let entry = groups.entry(genre.clone()).or_default();
            entry.0 += rating;
            entry.1 += 1;
        }
    }
    let mut result = means(groups);
    result.sort_by(|a, b| b.mean.total_cmp(&a.mean).then_with(|| a.key.cmp(&b.key)));
    result
}

/// Mean rating per certification (`movie_rated`), sorted by certification.
///
/// `None` when the table does not carry the `movie_rated` column.
pub fn average_rating_by_movie_rated(table: &CanonicalTable) -> Option<Vec<GroupMean>> {
    if !table.has_column(CanonicalColumn::MovieRated) {
        debug!("movie_rated not retained; skipping certification chart");
        return None;
    }
    let mut groups: BTreeMap<String, (f64, usize)> = BTreeMap::new();
    for (record, rating) in rated(table) {
        let Some(certificate) = &record.movie_rated else {
            continue;
        };
        let entry = groups.entry(certificate.clone()).or_default();
        entry.0 += rating;
        entry.1 += 1;
    }
    Some(means(groups))
}

/// Number of records per genre tag, most common first.
pub fn genre_distribution(table: &CanonicalTable) -> Vec<GroupCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in &table.records {
        for genre in &record.genres {
            *counts.entry(genre.as_str()).or_insert(0) += 1;
        }
    }
    let mut result: Vec<GroupCount> = counts
        .into_iter()
        .map(|(key, count)| GroupCount {
            key: key.to_string(),
            count,
        })
        .collect();
    result.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.key.cmp(&b.key)));
    result
}

/// Records per (release year, genre), ordered by year then genre.
pub fn movies_by_genre_over_time(table: &CanonicalTable) -> Vec<GenreYearCount> {
    let mut counts: BTreeMap<(i32, &str), usize> = BTreeMap::new();
    for record in &table.records {
        for genre in &record.genres {
            *counts
                .entry((record.release_year(), genre.as_str()))
                .or_insert(0) += 1;
        }
    }
    counts
        .into_iter()
        .map(|((year, genre), count)| GenreYearCount {
            year,
            genre: genre.to_string(),
            count,
        })
        .collect()
}

/// Records per release decade, ascending.
pub fn movies_by_decade(table: &CanonicalTable) -> Vec<DecadeCount> {
    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
    for record in &table.records {
        let decade = record.release_year().div_euclid(10) * 10;
        *counts.entry(decade).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(decade, count)| DecadeCount { decade, count })
        .collect()
}

/// Equal-width histogram over `[min, max]` of `values`.
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if min == max {
        return vec![HistogramBin {
            lower: min,
            upper: max,
            count: values.len(),
        }];
    }
    let width = (max - min) / bins as f64;
    let mut result: Vec<HistogramBin> = (0..bins)
        .map(|idx| HistogramBin {
            lower: min + width * idx as f64,
            upper: if idx + 1 == bins {
                max
            } else {
                min + width * (idx + 1) as f64
            },
            count: 0,
        })
        .collect();
    for value in values {
        let idx = (((value - min) / width) as usize).min(bins - 1);
        result[idx].count += 1;
    }
    result
}

pub fn rating_distribution(table: &CanonicalTable, bins: usize) -> Vec<HistogramBin> {
    let values: Vec<f64> = table.records.iter().filter_map(|r| r.rating).collect();
    histogram(&values, bins)
}

pub fn runtime_distribution(table: &CanonicalTable, bins: usize) -> Vec<HistogramBin> {
    let values: Vec<f64> = table
        .records
        .iter()
        .filter_map(|r| r.run_length.map(f64::from))
        .collect();
    histogram(&values, bins)
}

/// `(num_raters, rating)` scatter points.
pub fn rating_vs_raters(table: &CanonicalTable) -> Vec<Point> {
    table
        .records
        .iter()
        .filter_map(|r| {
            Some(Point {
                x: r.num_raters? as f64,
                y: r.rating?,
            })
        })
        .collect()
}

/// `(release year, run_length)` scatter points.
pub fn runtime_vs_year(table: &CanonicalTable) -> Vec<Point> {
    table
        .records
        .iter()
        .filter_map(|r| {
            Some(Point {
                x: f64::from(r.release_year()),
                y: f64::from(r.run_length?),
            })
        })
        .collect()
}

/// Every dashboard aggregation in one serializable value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub movies: usize,
    pub top_rated: Vec<CanonicalRecord>,
    pub bottom_rated: Vec<CanonicalRecord>,
    pub average_rating_by_genre: Vec<GroupMean>,
    pub average_rating_by_movie_rated: Option<Vec<GroupMean>>,
    pub genre_distribution: Vec<GroupCount>,
    pub movies_by_genre_over_time: Vec<GenreYearCount>,
    pub movies_by_decade: Vec<DecadeCount>,
    pub rating_distribution: Vec<HistogramBin>,
    pub runtime_distribution: Vec<HistogramBin>,
    pub rating_vs_raters: Vec<Point>,
    pub runtime_vs_year: Vec<Point>,
}

pub fn summarize(table: &CanonicalTable, top_n: usize, bins: usize) -> Dashboard {
    Dashboard {
        movies: table.len(),
        top_rated: top_rated(table, top_n).into_iter().cloned().collect(),
        bottom_rated: bottom_rated(table, top_n).into_iter().cloned().collect(),
        average_rating_by_genre: average_rating_by_genre(table),
        average_rating_by_movie_rated: average_rating_by_movie_rated(table),
        genre_distribution: genre_distribution(table),
        movies_by_genre_over_time: movies_by_genre_over_time(table),
        movies_by_decade: movies_by_decade(table),
        rating_distribution: rating_distribution(table, bins),
        runtime_distribution: runtime_distribution(table, bins),
        rating_vs_raters: rating_vs_raters(table),
        runtime_vs_year: runtime_vs_year(table),
    }
}
