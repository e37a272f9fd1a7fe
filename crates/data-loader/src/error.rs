//! Error types for the data-loader crate.
//!
//! Only whole-file problems surface as errors. A single malformed cell
//! (missing genre, non-numeric rating, empty cast) loads as `None` and is
//! handled downstream, so nothing here describes per-cell failures.

use thiserror::Error;

/// Errors that can occur while loading the movie dataset
///
/// All of these are fatal at startup: the dashboard has nothing to show
/// without its table, so the caller reports the error and exits.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The delimited reader could not tokenize a record
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: u64,
        reason: String,
    },

    /// One of the required columns is absent from the header row
    #[error("Missing column '{column}' in {file}")]
    MissingColumn { file: String, column: String },

    /// A record carries more fields than the header declares
    #[error("Expected {expected} fields but found {found} in line {line}")]
    FieldCountMismatch {
        expected: usize,
        found: usize,
        line: u64,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
