//! Actor search over the title/cast projection.
//!
//! Matching is a literal, case-sensitive substring check on the raw cast
//! text. There is no tokenizing and no pattern language: `"Smith"` matches
//! `"Matt Smith"`, `"smith"` does not, and `"D.B."` only matches a literal
//! `D.B.`. Rows whose cast cell is missing never match a query.

use crate::traits::Filter;
use data_loader::{Movie, MovieTable};
use serde::Serialize;

/// One row of the actor table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CastRow {
    pub title: String,
    pub stars: Option<String>,
}

impl From<&Movie> for CastRow {
    fn from(movie: &Movie) -> Self {
        Self {
            title: movie.title.clone(),
            stars: movie.stars.clone(),
        }
    }
}

/// Keeps rows whose cast contains the query.
///
/// An absent or empty query disables the filter: every row passes,
/// including rows with no cast data.
pub struct ActorFilter {
    query: Option<String>,
}

impl ActorFilter {
    pub fn new(query: Option<&str>) -> Self {
        Self {
            query: query.filter(|q| !q.is_empty()).map(str::to_string),
        }
    }

    /// True when this filter lets every row through
    pub fn is_passthrough(&self) -> bool {
        self.query.is_none()
    }
}

impl Filter for ActorFilter {
    fn name(&self) -> &str {
        "ActorFilter"
    }

    fn matches(&self, movie: &Movie) -> bool {
        match &self.query {
            Some(query) => stars_contain(movie, query),
            None => true,
        }
    }
}

/// Keeps rows whose cast contains the query, always running the check.
///
/// The empty query is still a substring check here, so it matches every
/// row that has cast data and drops the ones that do not.
pub struct CastContainsFilter {
    query: String,
}

impl CastContainsFilter {
    pub fn new(query: Option<&str>) -> Self {
        Self {
            query: query.unwrap_or_default().to_string(),
        }
    }
}

impl Filter for CastContainsFilter {
    fn name(&self) -> &str {
        "CastContainsFilter"
    }

    fn matches(&self, movie: &Movie) -> bool {
        stars_contain(movie, &self.query)
    }
}

fn stars_contain(movie: &Movie, query: &str) -> bool {
    movie
        .stars
        .as_deref()
        .is_some_and(|stars| stars.contains(query))
}

/// Title/cast rows matching `query`; the whole projection when `query` is
/// absent or empty.
pub fn filter_by_actor(table: &MovieTable, query: Option<&str>) -> Vec<CastRow> {
    ActorFilter::new(query)
        .select(table)
        .into_iter()
        .map(CastRow::from)
        .collect()
}

/// Titles of the rows whose cast contains `query`.
pub fn titles_by_actor(table: &MovieTable, query: Option<&str>) -> Vec<String> {
    CastContainsFilter::new(query)
        .select(table)
        .into_iter()
        .map(|movie| movie.title.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::{clean, RawMovie};

    fn create_test_table() -> MovieTable {
        clean(vec![
            RawMovie::new("Ozark", Some(8.5), Some("Crime, Drama"), Some("Jason Bateman, Laura Linney")),
            RawMovie::new("Lucifer", Some(8.1), Some("Crime"), Some("Tom Ellis, D.B. Woodside")),
            RawMovie::new("Untitled", None, None, None),
            RawMovie::new("Arrested Development", Some(8.7), Some("Comedy"), Some("Jason Bateman")),
        ])
    }

    fn titles(rows: &[CastRow]) -> Vec<&str> {
        rows.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let table = create_test_table();

        let all = filter_by_actor(&table, None);
        assert_eq!(all.len(), 4);
        assert_eq!(filter_by_actor(&table, Some("")), all);
        assert_eq!(all[2], CastRow { title: "Untitled".to_string(), stars: None });
    }

    #[test]
    fn test_substring_match_in_source_order() {
        let table = create_test_table();
        let rows = filter_by_actor(&table, Some("Bateman"));

        assert_eq!(titles(&rows), vec!["Ozark", "Arrested Development"]);
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let table = create_test_table();
        assert!(filter_by_actor(&table, Some("bateman")).is_empty());
    }

    #[test]
    fn test_match_is_not_word_based() {
        let table = create_test_table();
        let rows = filter_by_actor(&table, Some("ate"));
        assert_eq!(titles(&rows), vec!["Ozark", "Arrested Development"]);
    }

    #[test]
    fn test_pattern_characters_are_literal() {
        let table = create_test_table();

        assert_eq!(titles(&filter_by_actor(&table, Some("D.B."))), vec!["Lucifer"]);
        assert!(filter_by_actor(&table, Some("D.*")).is_empty());
        assert!(filter_by_actor(&table, Some("[J]ason")).is_empty());
        assert!(filter_by_actor(&table, Some("(")).is_empty());
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let table = create_test_table();
        assert!(filter_by_actor(&table, Some("Zzzznoone")).is_empty());
    }

    #[test]
    fn test_titles_by_actor() {
        let table = create_test_table();

        assert_eq!(titles_by_actor(&table, Some("Ellis")), vec!["Lucifer"]);
        // Empty query still skips rows without cast data
        assert_eq!(
            titles_by_actor(&table, Some("")),
            vec!["Ozark", "Lucifer", "Arrested Development"]
        );
        assert_eq!(titles_by_actor(&table, None), titles_by_actor(&table, Some("")));
    }

    #[test]
    fn test_actor_filter_passthrough() {
        assert!(ActorFilter::new(None).is_passthrough());
        assert!(ActorFilter::new(Some("")).is_passthrough());
        assert!(!ActorFilter::new(Some(" ")).is_passthrough());
    }
}
