//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that lets each view pick the rows
//! it shows from the shared `MovieTable` without copying the table.

use data_loader::{Movie, MovieTable};
use rayon::prelude::*;
use tracing;

/// A row predicate over the cleaned table.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared between sessions
/// - Filters borrow the table and return references in source order,
///   callers project the rows into whatever shape their view needs
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `movie` passes this filter
    fn matches(&self, movie: &Movie) -> bool;

    /// Every matching row of `table`, in source order.
    fn select<'t>(&self, table: &'t MovieTable) -> Vec<&'t Movie> {
        tracing::debug!(
            "Applying filter: {} (input count: {})",
            self.name(),
            table.len()
        );
        let selected: Vec<&Movie> = table
            .rows()
            .par_iter()
            .filter(|movie| self.matches(movie))
            .collect();
        tracing::debug!(
            "Filter applied: {} (output count: {})",
            self.name(),
            selected.len()
        );
        selected
    }
}
