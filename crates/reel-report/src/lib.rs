//! Consumers of the canonical table.
//!
//! - **search**: the genre/year predicate behind the dashboard search page
//! - **stats**: the aggregations each dashboard chart is drawn from
//! - **frame**: polars frames for plotting, including the genre explode

pub mod error;
pub mod frame;
pub mod search;
pub mod stats;

pub use error::ReportError;
pub use frame::{explode_genres, to_dataframe, write_exploded};
pub use search::{available_genres, available_years, matches_genre_year, search};
pub use stats::{
    Dashboard, DecadeCount, GenreYearCount, GroupCount, GroupMean, HistogramBin, Point,
    average_rating_by_genre, average_rating_by_movie_rated, bottom_rated, genre_distribution,
    histogram, movies_by_decade, movies_by_genre_over_time, rating_distribution,
    rating_vs_raters, runtime_distribution, runtime_vs_year, summarize, top_rated,
};
