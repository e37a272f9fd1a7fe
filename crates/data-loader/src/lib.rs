//! # Data Loader Crate
//!
//! This crate loads the movie-ratings dataset and cleans it into the
//! read-only `MovieTable` every dashboard view is built from.
//!
//! ## Main Components
//!
//! - **types**: Raw and cleaned row types, `Genres`, `MovieTable`
//! - **parser**: Read the delimited file into `RawMovie` rows
//! - **cleaner**: Deduplicate by title and resolve genre cells
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::MovieTable;
//! use std::path::Path;
//!
//! let table = MovieTable::load(Path::new("data/n_movies.csv"))?;
//!
//! for movie in &table {
//!     println!("{} ({:?})", movie.title, movie.rating);
//! }
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod cleaner;

// Re-export commonly used types for convenience
pub use cleaner::{clean, parse_genres};
pub use error::{DataLoadError, Result};
pub use parser::{parse_movies, parse_reader};
pub use types::{Genres, Movie, MovieTable, RawMovie};
