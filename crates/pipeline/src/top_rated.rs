//! Top-rated title selection for the ratings chart and table.
//!
//! Selection and display order are separate steps. `top_rated` picks the
//! `n` highest ratings (ties in source order); `top_rated_ascending` takes
//! that exact selection and only re-orders it for the horizontal bar chart.
//! Rows without a rating never take part.

use data_loader::MovieTable;
use serde::Serialize;
use std::cmp::Ordering;

/// Bars shown in the top-rated chart
pub const TOP_CHART_LIMIT: usize = 10;

/// Rows shown in the ratings table
pub const RATINGS_TABLE_LIMIT: usize = 50;

/// A title and its rating
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatedTitle {
    pub title: String,
    pub rating: f64,
}

impl RatedTitle {
    pub fn new(title: impl Into<String>, rating: f64) -> Self {
        Self {
            title: title.into(),
            rating,
        }
    }
}

/// Every rated row, in source order
fn rated_titles(table: &MovieTable) -> Vec<RatedTitle> {
    table
        .iter()
        .filter_map(|movie| Some(RatedTitle::new(movie.title.clone(), movie.rating?)))
        .collect()
}

/// The `n` highest-rated titles, best first, ties in source order.
pub fn top_rated(table: &MovieTable, n: usize) -> Vec<RatedTitle> {
    let mut rated = rated_titles(table);

    // Stable sort so equal ratings keep source order
    rated.sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal));
    rated.truncate(n);
    rated
}

/// The same selection as [`top_rated`], ordered by rating ascending.
pub fn top_rated_ascending(table: &MovieTable, n: usize) -> Vec<RatedTitle> {
    let mut selected = top_rated(table, n);
    selected.sort_by(|a, b| a.rating.partial_cmp(&b.rating).unwrap_or(Ordering::Equal));
    selected
}

/// Rows of the ratings table.
///
/// `Some(n)` is the top `n` by rating. `None` is every rated row in source
/// order, left unsorted for the viewer to sort.
pub fn ratings_table(table: &MovieTable, limit: Option<usize>) -> Vec<RatedTitle> {
    match limit {
        Some(n) => top_rated(table, n),
        None => rated_titles(table),
    }
}
