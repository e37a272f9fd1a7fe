//! Cleaning raw rows into the `MovieTable`.
//!
//! Two steps, in this order:
//! 1. Deduplicate by title, keeping the first occurrence in source order.
//!    The source lists some films on several rows; without this they would
//!    be counted more than once by every view.
//! 2. Resolve each genre cell into `Genres` by splitting on `", "`.
//!
//! Ratings and cast text pass through untouched.

use crate::error::Result;
use crate::parser;
use crate::types::{Genres, Movie, MovieTable, RawMovie};
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

/// Separator between genres inside one cell
pub const GENRE_SEPARATOR: &str = ", ";

impl MovieTable {
    /// Load and clean the dataset at `path`.
    ///
    /// This is the main entry point for building the dashboard's table.
    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading movie dataset from {:?}", path);

        let raw = parser::parse_movies(path)?;
        let table = clean(raw);

        info!("MovieTable built with {} unique titles", table.len());
        Ok(table)
    }
}

/// Deduplicate rows by title and resolve their genre cells.
pub fn clean(rows: Vec<RawMovie>) -> MovieTable {
    let raw_count = rows.len();

    let mut seen: HashSet<String> = HashSet::with_capacity(raw_count);
    let unique: Vec<RawMovie> = rows
        .into_iter()
        .filter(|row| seen.insert(row.title.clone()))
        .collect();

    // Indexed parallel collect keeps source order
    let movies: Vec<Movie> = unique
        .into_par_iter()
        .map(|row| Movie {
            genres: parse_genres(row.genre.as_deref()),
            title: row.title,
            rating: row.rating,
            stars: row.stars,
        })
        .collect();

    info!(
        "Cleaned {} raw rows into {} unique titles ({} duplicates dropped)",
        raw_count,
        movies.len(),
        raw_count - movies.len()
    );

    MovieTable::from_unique_rows(movies)
}

/// Split a genre cell into its genres.
///
/// Parts are kept byte for byte: `"Drama,Comedy"` (no space) stays a single
/// genre and `" Drama"` keeps its leading space.
///
/// Example: `Some("Action, Adventure")` -> `Present(["Action", "Adventure"])`
///          `None` -> `Absent`
pub fn parse_genres(cell: Option<&str>) -> Genres {
    match cell {
        Some(value) => Genres::Present(
            value
                .split(GENRE_SEPARATOR)
                .map(str::to_string)
                .collect(),
        ),
        None => Genres::Absent,
    }
}
