//! Genre frequency tally for the genre pie chart.
//!
//! ## Algorithm
//! 1. Walk the table in source order
//! 2. For each genre string of each row, bump its counter (a genre seen for
//!    the first time is appended to the tally)
//! 3. Sort the tally by count descending with a stable sort, so genres with
//!    equal counts keep the order they were first encountered in
//! 4. Keep the first `k`
//!
//! Keys are the literal genre strings: `"Drama"` and `" Drama"` are counted
//! separately. Rows with `Genres::Absent` contribute nothing.

use data_loader::MovieTable;
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// How many genres the dashboard's pie chart shows
pub const DEFAULT_TOP_GENRES: usize = 5;

/// One genre and how many rows list it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreCount {
    pub genre: String,
    pub count: usize,
}

impl GenreCount {
    pub fn new(genre: impl Into<String>, count: usize) -> Self {
        Self {
            genre: genre.into(),
            count,
        }
    }
}

/// Occurrence counts per genre, kept in first-encounter order.
#[derive(Debug, Clone, Default)]
pub struct GenreTally {
    entries: Vec<GenreCount>,
    positions: HashMap<String, usize>,
}

impl GenreTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally every (row, genre) pair of `table`.
    pub fn from_table(table: &MovieTable) -> Self {
        let mut tally = Self::new();
        for movie in table {
            for genre in movie.genres.as_slice() {
                tally.add(genre);
            }
        }
        debug!(
            "Tallied {} genre entries across {} distinct genres",
            tally.total(),
            tally.len()
        );
        tally
    }

    /// Count one more occurrence of `genre`
    pub fn add(&mut self, genre: &str) {
        match self.positions.get(genre) {
            Some(&idx) => self.entries[idx].count += 1,
            None => {
                self.positions.insert(genre.to_string(), self.entries.len());
                self.entries.push(GenreCount::new(genre, 1));
            }
        }
    }

    pub fn get(&self, genre: &str) -> Option<usize> {
        self.positions.get(genre).map(|&idx| self.entries[idx].count)
    }

    /// Number of distinct genres
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the number of (row, genre) pairs tallied
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Entries in first-encounter order
    pub fn entries(&self) -> &[GenreCount] {
        &self.entries
    }

    /// All entries by count descending, ties in first-encounter order
    pub fn ranked(&self) -> Vec<GenreCount> {
        let mut ranked = self.entries.clone();
        // sort_by is stable
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked
    }

    /// The `k` most frequent genres
    pub fn top(&self, k: usize) -> Vec<GenreCount> {
        let mut ranked = self.ranked();
        ranked.truncate(k);
        ranked
    }
}

/// The `k` most frequent genres of `table`.
pub fn top_genres(table: &MovieTable, k: usize) -> Vec<GenreCount> {
    GenreTally::from_table(table).top(k)
}
