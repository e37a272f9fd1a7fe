//! Dashboard configuration.
//!
//! Every field has a default, so a config file only needs the values it
//! changes:
//!
//! ```json
//! { "data_path": "/srv/data/n_movies.csv", "ratings_table_limit": null }
//! ```
//!
//! `ratings_table_limit: null` shows every rated title in the ratings table.

use crate::error::{DashboardError, Result};
use pipeline::{DEFAULT_TOP_GENRES, RATINGS_TABLE_LIMIT, TOP_CHART_LIMIT};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the dataset, relative to the working directory
pub const DEFAULT_DATA_PATH: &str = "data/n_movies.csv";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Delimited file with at least `title, rating, genre, stars`
    pub data_path: PathBuf,
    /// Bars in the top-rated chart
    pub top_chart_limit: usize,
    /// Rows in the ratings table; `None` for all
    pub ratings_table_limit: Option<usize>,
    /// Slices in the genre pie chart
    pub top_genre_limit: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            top_chart_limit: TOP_CHART_LIMIT,
            ratings_table_limit: Some(RATINGS_TABLE_LIMIT),
            top_genre_limit: DEFAULT_TOP_GENRES,
        }
    }
}

impl DashboardConfig {
    /// Read a config from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let label = path.display().to_string();
        let text = fs::read_to_string(path).map_err(|source| DashboardError::ConfigRead {
            path: label.clone(),
            source,
        })?;
        parse_json(&text, label)
    }

    /// Parse a config from JSON text
    pub fn from_json_str(text: &str) -> Result<Self> {
        parse_json(text, "<inline>".to_string())
    }

    /// Builder-style override of the dataset path
    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = path.into();
        self
    }
}

fn parse_json(text: &str, label: String) -> Result<DashboardConfig> {
    serde_json::from_str(text).map_err(|source| DashboardError::ConfigParse {
        path: label,
        source,
    })
}
