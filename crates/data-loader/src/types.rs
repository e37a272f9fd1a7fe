//! Core domain types for the movie-ratings dataset.
//!
//! There are two stages of a row:
//! - `RawMovie` is what the parser produces, one per source record, with
//!   every dirty cell kept as an `Option`
//! - `Movie` is what the cleaner produces, unique by title and with the
//!   genre cell already resolved into `Genres`
//!
//! `MovieTable` owns the cleaned rows. It is built once and never mutated.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::slice;

// =============================================================================
// Raw rows
// =============================================================================

/// One record exactly as it appears in the source file.
///
/// Only the four columns the dashboard reads are kept; any other column
/// (year, duration, votes, ...) is dropped by the parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMovie {
    /// Empty string when the cell is missing
    pub title: String,
    /// `None` for missing, non-numeric or NaN cells
    pub rating: Option<f64>,
    /// Comma separated genre list, `None` when the cell is empty
    pub genre: Option<String>,
    /// Free text cast list, `None` when the cell is empty
    pub stars: Option<String>,
}

impl RawMovie {
    pub fn new(
        title: impl Into<String>,
        rating: Option<f64>,
        genre: Option<&str>,
        stars: Option<&str>,
    ) -> Self {
        Self {
            title: title.into(),
            rating,
            genre: genre.map(str::to_string),
            stars: stars.map(str::to_string),
        }
    }
}

// =============================================================================
// Cleaned rows
// =============================================================================

/// Genre cell after cleaning.
///
/// Resolved once so nothing downstream has to look at the raw cell again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "genres", rename_all = "snake_case")]
pub enum Genres {
    Present(Vec<String>),
    Absent,
}

impl Genres {
    /// Genre strings in cell order; empty for `Absent`
    pub fn as_slice(&self) -> &[String] {
        match self {
            Genres::Present(list) => list,
            Genres::Absent => &[],
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Genres::Absent)
    }
}

/// A deduplicated movie row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub rating: Option<f64>,
    pub genres: Genres,
    pub stars: Option<String>,
}

// =============================================================================
// MovieTable - the cleaned, read-only dataset
// =============================================================================

/// The cleaned dataset in source order.
///
/// Titles are unique. The only way to build one is through
/// [`crate::cleaner::clean`] (or [`MovieTable::load`]), which is what keeps
/// that invariant.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MovieTable {
    rows: Vec<Movie>,
    #[serde(skip)]
    by_title: HashMap<String, usize>,
}

impl MovieTable {
    /// Rows must already be unique by title.
    pub(crate) fn from_unique_rows(rows: Vec<Movie>) -> Self {
        let by_title = rows
            .iter()
            .enumerate()
            .map(|(idx, movie)| (movie.title.clone(), idx))
            .collect();
        Self { rows, by_title }
    }

    pub fn rows(&self) -> &[Movie] {
        &self.rows
    }

    pub fn iter(&self) -> slice::Iter<'_, Movie> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Look a movie up by its exact title
    pub fn get(&self, title: &str) -> Option<&Movie> {
        self.by_title.get(title).map(|&idx| &self.rows[idx])
    }
}

impl<'a> IntoIterator for &'a MovieTable {
    type Item = &'a Movie;
    type IntoIter = slice::Iter<'a, Movie>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
