//! Label mode toggle for the genre pie chart.
//!
//! The state is a click counter. Odd counts show raw values, even counts
//! show percentages. The counter starts at 1, so a chart rendered before
//! any click shows values, and every click flips the mode.

use serde::{Deserialize, Serialize};

/// How pie-chart slices are labelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelMode {
    /// The slice's raw count
    Value,
    /// The slice's share of the chart
    Percent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleState {
    click_count: u64,
}

impl ToggleState {
    /// Counter value before the first click
    pub const INITIAL_CLICK_COUNT: u64 = 1;

    pub fn new() -> Self {
        Self {
            click_count: Self::INITIAL_CLICK_COUNT,
        }
    }

    /// Resume from a counter reported by the surface
    pub fn from_click_count(click_count: u64) -> Self {
        Self { click_count }
    }

    /// Register one click and return the new mode
    pub fn click(&mut self) -> LabelMode {
        // wrapping keeps the parity alternating
        self.click_count = self.click_count.wrapping_add(1);
        self.mode()
    }

    pub fn click_count(&self) -> u64 {
        self.click_count
    }

    pub fn mode(&self) -> LabelMode {
        if self.click_count % 2 == 1 {
            LabelMode::Value
        } else {
            LabelMode::Percent
        }
    }
}

impl Default for ToggleState {
    fn default() -> Self {
        Self::new()
    }
}
