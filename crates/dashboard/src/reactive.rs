//! Handler table for the reactive surface.
//!
//! The surface owns the widgets. When one of its inputs changes it calls
//! [`HandlerTable::dispatch`] with that input's id and new value, then
//! replaces the returned output region with the returned view. Each input
//! has exactly one handler and each handler feeds exactly one output.
//! Dispatch is synchronous, one event at a time per session.

use crate::app::Dashboard;
use crate::error::{DashboardError, Result};
use crate::session::Session;
use crate::views::View;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Named inputs of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputId {
    /// Button that flips the genre chart's label mode
    GenreToggle,
    /// Free-text box above the actor table
    #[serde(rename = "actor-input")]
    ActorQuery,
    /// Free-text box above the title summary
    #[serde(rename = "title-input")]
    TitleQuery,
}

impl InputId {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputId::GenreToggle => "genre-toggle",
            InputId::ActorQuery => "actor-input",
            InputId::TitleQuery => "title-input",
        }
    }
}

impl fmt::Display for InputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named output regions of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputId {
    TopRatedChart,
    RatingsTable,
    GenreChart,
    ActorTable,
    TitleSummary,
}

impl OutputId {
    /// Every output, in page order
    pub const ALL: [OutputId; 5] = [
        OutputId::TopRatedChart,
        OutputId::RatingsTable,
        OutputId::GenreChart,
        OutputId::ActorTable,
        OutputId::TitleSummary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputId::TopRatedChart => "top-rated-chart",
            OutputId::RatingsTable => "ratings-table",
            OutputId::GenreChart => "genre-chart",
            OutputId::ActorTable => "actor-table",
            OutputId::TitleSummary => "title-summary",
        }
    }
}

impl fmt::Display for OutputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// New value of an input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputValue {
    /// A button press
    Click,
    /// Text box contents; `None` when the box has never held a value
    Text(Option<String>),
}

/// A handler updates the session and returns the new content of its output.
pub type Handler = fn(&Dashboard, &mut Session, InputValue) -> Result<View>;

#[derive(Clone, Copy)]
struct Registration {
    output: OutputId,
    handler: Handler,
}

/// Maps each input to the one handler and output it drives.
#[derive(Clone, Default)]
pub struct HandlerTable {
    handlers: HashMap<InputId, Registration>,
}

impl HandlerTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// The dashboard's handlers: genre toggle, actor table, title summary
    pub fn standard() -> Self {
        Self::new()
            .register(InputId::GenreToggle, OutputId::GenreChart, on_genre_toggle)
            .register(InputId::ActorQuery, OutputId::ActorTable, on_actor_query)
            .register(InputId::TitleQuery, OutputId::TitleSummary, on_title_query)
    }

    /// Register `handler` for `input` (builder pattern).
    ///
    /// Registering the same input twice replaces the earlier handler.
    pub fn register(mut self, input: InputId, output: OutputId, handler: Handler) -> Self {
        self.handlers.insert(input, Registration { output, handler });
        self
    }

    /// Output region `input` drives, if it is registered
    pub fn output_for(&self, input: InputId) -> Option<OutputId> {
        self.handlers.get(&input).map(|r| r.output)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Run the handler registered for `input`.
    ///
    /// Returns the output region to replace and its new content.
    pub fn dispatch(
        &self,
        dashboard: &Dashboard,
        session: &mut Session,
        input: InputId,
        value: InputValue,
    ) -> Result<(OutputId, View)> {
        let registration = self
            .handlers
            .get(&input)
            .ok_or(DashboardError::UnregisteredInput(input))?;

        debug!("Dispatching {:?} on {} -> {}", value, input, registration.output);
        let view = (registration.handler)(dashboard, session, value)?;
        Ok((registration.output, view))
    }
}

impl fmt::Debug for HandlerTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.handlers.iter().map(|(input, r)| (input, r.output)))
            .finish()
    }
}

/// Toggle click: flip the label mode and redraw the genre chart
fn on_genre_toggle(dashboard: &Dashboard, session: &mut Session, value: InputValue) -> Result<View> {
    match value {
        InputValue::Click => {
            let mode = session.toggle_mut().click();
            Ok(View::PieChart(dashboard.genre_chart(mode)))
        }
        InputValue::Text(_) => Err(DashboardError::InputMismatch {
            input: InputId::GenreToggle,
            expected: "click",
        }),
    }
}

/// Actor query change: refilter the actor table
fn on_actor_query(dashboard: &Dashboard, session: &mut Session, value: InputValue) -> Result<View> {
    match value {
        InputValue::Text(query) => {
            session.set_actor_query(query);
            Ok(View::ActorTable(dashboard.actor_table(session.actor_query())))
        }
        InputValue::Click => Err(DashboardError::InputMismatch {
            input: InputId::ActorQuery,
            expected: "text",
        }),
    }
}

/// Title query change: rebuild the title summary
fn on_title_query(dashboard: &Dashboard, session: &mut Session, value: InputValue) -> Result<View> {
    match value {
        InputValue::Text(query) => {
            session.set_title_query(query);
            Ok(View::TitleSummary(dashboard.title_summary(session.title_query())))
        }
        InputValue::Click => Err(DashboardError::InputMismatch {
            input: InputId::TitleQuery,
            expected: "text",
        }),
    }
}
