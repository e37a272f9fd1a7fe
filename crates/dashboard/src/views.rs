//! Prepared view data handed to a renderer.
//!
//! These types carry everything a chart or table widget needs (titles,
//! ordered data points, label text) and nothing about how it is drawn. A
//! presentation adapter implements [`ViewRenderer`] to turn them into
//! whatever it displays.

use crate::reactive::OutputId;
use crate::toggle::LabelMode;
use pipeline::{CastRow, GenreCount, RatedTitle};
use serde::Serialize;

/// One bar of a horizontal bar chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

/// Horizontal bar chart, bars listed bottom to top
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<Bar>,
}

impl BarChart {
    pub fn from_rated(title: impl Into<String>, rated: Vec<RatedTitle>) -> Self {
        Self {
            title: title.into(),
            x_label: "Rating".to_string(),
            y_label: "Movie Title".to_string(),
            bars: rated
                .into_iter()
                .map(|r| Bar {
                    label: r.title,
                    value: r.rating,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: usize,
    /// Share of the slices shown, 0-100
    pub percent: f64,
    /// Text drawn on the slice for the chart's mode
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub title: String,
    pub mode: LabelMode,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    /// Build slices from genre counts.
    ///
    /// Percentages are relative to the slices shown, not to every genre in
    /// the dataset.
    pub fn from_counts(title: impl Into<String>, counts: Vec<GenreCount>, mode: LabelMode) -> Self {
        let total: usize = counts.iter().map(|c| c.count).sum();
        let slices = counts
            .into_iter()
            .map(|c| {
                let percent = if total > 0 {
                    c.count as f64 * 100.0 / total as f64
                } else {
                    0.0
                };
                let text = match mode {
                    LabelMode::Value => c.count.to_string(),
                    LabelMode::Percent => format!("{:.1}%", percent),
                };
                PieSlice {
                    label: c.genre,
                    value: c.count,
                    percent,
                    text,
                }
            })
            .collect();

        Self {
            title: title.into(),
            mode,
            slices,
        }
    }
}

/// Title/rating table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingsTable {
    /// `Some(n)`: the top `n`, best first. `None`: every rated title in
    /// source order, unsorted; renderers must not assume a rating order.
    pub limit: Option<usize>,
    pub rows: Vec<RatedTitle>,
}

/// Title/cast table for the actor search
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActorTable {
    pub query: Option<String>,
    pub rows: Vec<CastRow>,
}

/// One-line list of the titles matching a cast query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleSummary {
    pub query: Option<String>,
    pub titles: Vec<String>,
}

impl TitleSummary {
    /// `Films: [A, B]`
    pub fn text(&self) -> String {
        format!("Films: [{}]", self.titles.join(", "))
    }
}

/// Content of one output region
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum View {
    BarChart(BarChart),
    PieChart(PieChart),
    RatingsTable(RatingsTable),
    ActorTable(ActorTable),
    TitleSummary(TitleSummary),
}

/// Turns prepared views into displayable output.
pub trait ViewRenderer {
    type Output;

    fn render(&self, output: OutputId, view: &View) -> Self::Output;
}

/// Renders each view as a JSON object `{ "output": ..., "view": ... }`
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer {
    pub pretty: bool,
}

#[derive(Serialize)]
struct Envelope<'a> {
    output: OutputId,
    view: &'a View,
}

impl ViewRenderer for JsonRenderer {
    type Output = serde_json::Result<String>;

    fn render(&self, output: OutputId, view: &View) -> Self::Output {
        let envelope = Envelope { output, view };
        if self.pretty {
            serde_json::to_string_pretty(&envelope)
        } else {
            serde_json::to_string(&envelope)
        }
    }
}
