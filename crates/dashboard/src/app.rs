//! # Dashboard
//!
//! The `Dashboard` owns the cleaned table and builds every view from it:
//! 1. Top-rated bar chart (top N by rating, drawn ascending)
//! 2. Ratings table (top N, or every rated title)
//! 3. Genre pie chart (top K genres, labelled per the session's mode)
//! 4. Actor table (title/cast rows filtered by the session's query)
//! 5. Title summary (titles whose cast matches the session's title query)
//!
//! The table sits behind an `Arc` and is never mutated, so one `Dashboard`
//! can serve any number of sessions. Everything that changes per viewer
//! lives in their `Session`.

use std::sync::Arc;

use tracing::debug;

use data_loader::MovieTable;
use pipeline::{filter_by_actor, ratings_table, titles_by_actor, top_genres, top_rated_ascending};

use crate::config::DashboardConfig;
use crate::error::Result;
use crate::reactive::OutputId;
use crate::session::Session;
use crate::toggle::LabelMode;
use crate::views::{ActorTable, BarChart, PieChart, RatingsTable, TitleSummary, View};

/// Shared application state
#[derive(Debug, Clone)]
pub struct Dashboard {
    table: Arc<MovieTable>,
    config: DashboardConfig,
}

impl Dashboard {
    /// Load the dataset named by `config` and build the dashboard
    pub fn load(config: DashboardConfig) -> Result<Self> {
        let table = MovieTable::load(&config.data_path)?;
        debug!(
            "Dashboard ready: {} titles, chart limit {}, genre limit {}",
            table.len(),
            config.top_chart_limit,
            config.top_genre_limit
        );
        Ok(Self::new(Arc::new(table), config))
    }

    /// Build a dashboard over an already cleaned table
    pub fn new(table: Arc<MovieTable>, config: DashboardConfig) -> Self {
        Self { table, config }
    }

    pub fn table(&self) -> &MovieTable {
        &self.table
    }

    /// Shared handle to the table, for handing to other sessions or threads
    pub fn shared_table(&self) -> Arc<MovieTable> {
        Arc::clone(&self.table)
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Top-rated titles as horizontal bars, lowest at the bottom
    pub fn top_rated_chart(&self) -> BarChart {
        let n = self.config.top_chart_limit;
        BarChart::from_rated(
            format!("Top {} Best Reviewed Movies", n),
            top_rated_ascending(&self.table, n),
        )
    }

    pub fn ratings_table(&self) -> RatingsTable {
        let limit = self.config.ratings_table_limit;
        RatingsTable {
            limit,
            rows: ratings_table(&self.table, limit),
        }
    }

    /// Most frequent genres, labelled for `mode`
    pub fn genre_chart(&self, mode: LabelMode) -> PieChart {
        let k = self.config.top_genre_limit;
        PieChart::from_counts(
            format!("Top {} Popular Genres", k),
            top_genres(&self.table, k),
            mode,
        )
    }

    pub fn actor_table(&self, query: Option<&str>) -> ActorTable {
        ActorTable {
            query: query.map(str::to_string),
            rows: filter_by_actor(&self.table, query),
        }
    }

    pub fn title_summary(&self, query: Option<&str>) -> TitleSummary {
        TitleSummary {
            query: query.map(str::to_string),
            titles: titles_by_actor(&self.table, query),
        }
    }

    /// Current content of `output` for `session`
    pub fn render(&self, output: OutputId, session: &Session) -> View {
        match output {
            OutputId::TopRatedChart => View::BarChart(self.top_rated_chart()),
            OutputId::RatingsTable => View::RatingsTable(self.ratings_table()),
            OutputId::GenreChart => View::PieChart(self.genre_chart(session.label_mode())),
            OutputId::ActorTable => View::ActorTable(self.actor_table(session.actor_query())),
            OutputId::TitleSummary => View::TitleSummary(self.title_summary(session.title_query())),
        }
    }

    /// Every output for `session`, in page order.
    ///
    /// For a fresh session this is the page as first shown.
    pub fn initial_views(&self, session: &Session) -> Vec<(OutputId, View)> {
        OutputId::ALL
            .iter()
            .map(|&output| (output, self.render(output, session)))
            .collect()
    }
}
