//! Error types for the dashboard crate.

use crate::reactive::InputId;
use data_loader::DataLoadError;
use thiserror::Error;

/// Errors surfaced by the dashboard
///
/// Loading and config errors are fatal at startup. Dispatch errors mean the
/// surface sent an event no handler accepts; the session is left unchanged.
#[derive(Error, Debug)]
pub enum DashboardError {
    /// The dataset could not be loaded
    #[error("Failed to load dataset: {0}")]
    DataLoad(#[from] DataLoadError),

    /// Config file could not be read
    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: String,
        source: std::io::Error,
    },

    /// Config file is not valid JSON for `DashboardConfig`
    #[error("Invalid config {path}: {source}")]
    ConfigParse {
        path: String,
        source: serde_json::Error,
    },

    /// An event arrived for an input with no registered handler
    #[error("No handler registered for input '{0}'")]
    UnregisteredInput(InputId),

    /// An event carried the wrong kind of value for its input
    #[error("Input '{input}' expects a {expected} value")]
    InputMismatch {
        input: InputId,
        expected: &'static str,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DashboardError>;
