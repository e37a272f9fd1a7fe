//! Data preparation for the dashboard views.
//!
//! This crate provides:
//! - GenreTally and `top_genres` for the genre pie chart
//! - `top_rated` / `top_rated_ascending` / `ratings_table` for the ratings
//!   chart and table
//! - Filter trait and the actor filters for the actor search
//!
//! Everything here is a pure function of a borrowed `MovieTable`: nothing
//! mutates the table, and any number of sessions can call in at once.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{filter_by_actor, top_genres, top_rated_ascending};
//!
//! let genres = top_genres(&table, 5);
//! let bars = top_rated_ascending(&table, 10);
//! let rows = filter_by_actor(&table, Some("Bateman"));
//! ```

pub mod traits;
pub mod filters;
pub mod genre_tally;
pub mod top_rated;

// Re-export main types
pub use traits::Filter;
pub use filters::{filter_by_actor, titles_by_actor, ActorFilter, CastContainsFilter, CastRow};
pub use genre_tally::{top_genres, GenreCount, GenreTally, DEFAULT_TOP_GENRES};
pub use top_rated::{
    ratings_table, top_rated, top_rated_ascending, RatedTitle, RATINGS_TABLE_LIMIT,
    TOP_CHART_LIMIT,
};
