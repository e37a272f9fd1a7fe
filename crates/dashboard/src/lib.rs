//! Dashboard crate for ReelDash.
//!
//! This crate turns a cleaned `MovieTable` into the dashboard's views and
//! wires the interactive inputs to them:
//! - `Dashboard` builds each view (bar chart, ratings table, genre pie,
//!   actor table, title summary)
//! - `HandlerTable` maps each input to its handler and output region
//! - `Session` holds one viewer's toggle counter and query text
//! - `ViewRenderer` is the seam a presentation adapter plugs into
//!
//! ## Example Usage
//! ```ignore
//! use dashboard::{Dashboard, DashboardConfig, HandlerTable, InputId, InputValue, Session};
//!
//! let dashboard = Dashboard::load(DashboardConfig::default())?;
//! let handlers = HandlerTable::standard();
//! let mut session = Session::new();
//!
//! let page = dashboard.initial_views(&session);
//! let (output, view) = handlers.dispatch(&dashboard, &mut session, InputId::GenreToggle, InputValue::Click)?;
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod reactive;
pub mod session;
pub mod toggle;
pub mod views;

// Re-export main types
pub use app::Dashboard;
pub use config::{DashboardConfig, DEFAULT_DATA_PATH};
pub use error::{DashboardError, Result};
pub use reactive::{Handler, HandlerTable, InputId, InputValue, OutputId};
pub use session::Session;
pub use toggle::{LabelMode, ToggleState};
pub use views::{
    ActorTable, Bar, BarChart, JsonRenderer, PieChart, PieSlice, RatingsTable, TitleSummary, View,
    ViewRenderer,
};
