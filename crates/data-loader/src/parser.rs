//! Parser for the delimited movie-ratings file.
//!
//! Expected layout: a header row, then one comma separated record per line.
//! The columns `title`, `rating`, `genre` and `stars` must be present (in
//! any position); every other column is ignored.
//!
//! Cell rules:
//! - an empty cell, or one of the usual missing-value markers (`NA`, `NaN`,
//!   `null`, ...), is missing
//! - `rating` must parse as a float, anything else is missing
//! - bytes that are not valid UTF-8 are replaced, never rejected

use crate::error::{DataLoadError, Result};
use crate::types::RawMovie;
use csv::{ByteRecord, ReaderBuilder};
use std::borrow::Cow;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::{debug, warn};

/// Columns the dashboard reads, in `RawMovie` field order
pub const REQUIRED_COLUMNS: [&str; 4] = ["title", "rating", "genre", "stars"];

/// Cell contents treated as a missing value
const MISSING_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Parse the movie file at `path`
pub fn parse_movies(path: &Path) -> Result<Vec<RawMovie>> {
    let file_name = path.display().to_string();
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: file_name.clone(),
        },
        _ => DataLoadError::IoError(e),
    })?;

    parse_reader(file, &file_name)
}

/// Parse movie records from any reader.
///
/// `file_name` is only used in error messages.
pub fn parse_reader<R: Read>(reader: R, file_name: &str) -> Result<Vec<RawMovie>> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = reader
        .byte_headers()
        .map_err(|e| csv_error(file_name, e))?
        .clone();
    let columns = ColumnIndex::from_headers(&headers, file_name)?;
    let expected = headers.len();

    let mut movies = Vec::new();
    let mut record = ByteRecord::new();
    while reader
        .read_byte_record(&mut record)
        .map_err(|e| csv_error(file_name, e))?
    {
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        if record.len() > expected {
            return Err(DataLoadError::FieldCountMismatch {
                expected,
                found: record.len(),
                line,
            });
        }
        if record.len() < expected {
            warn!(
                "Short record at line {} in {} ({} of {} fields), missing cells left empty",
                line,
                file_name,
                record.len(),
                expected
            );
        }

        movies.push(columns.extract(&record));
    }

    debug!("Parsed {} records from {}", movies.len(), file_name);
    Ok(movies)
}

/// Positions of the required columns within a record
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    title: usize,
    rating: usize,
    genre: usize,
    stars: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &ByteRecord, file_name: &str) -> Result<Self> {
        let names: Vec<String> = headers
            .iter()
            .map(|h| {
                String::from_utf8_lossy(h)
                    .trim_start_matches('\u{feff}')
                    .trim()
                    .to_string()
            })
            .collect();

        let find = |column: &str| {
            names
                .iter()
                .position(|name| name == column)
                .ok_or_else(|| DataLoadError::MissingColumn {
                    file: file_name.to_string(),
                    column: column.to_string(),
                })
        };

        let [title, rating, genre, stars] = REQUIRED_COLUMNS;
        Ok(Self {
            title: find(title)?,
            rating: find(rating)?,
            genre: find(genre)?,
            stars: find(stars)?,
        })
    }

    fn extract(&self, record: &ByteRecord) -> RawMovie {
        RawMovie {
            title: cell(record, self.title)
                .map(Cow::into_owned)
                .unwrap_or_default(),
            rating: cell(record, self.rating).and_then(|s| parse_rating(&s)),
            genre: cell(record, self.genre).map(Cow::into_owned),
            stars: cell(record, self.stars).map(Cow::into_owned),
        }
    }
}

/// Read one cell, `None` when it is absent or holds a missing-value marker
fn cell(record: &ByteRecord, idx: usize) -> Option<Cow<'_, str>> {
    record
        .get(idx)
        .map(String::from_utf8_lossy)
        .filter(|value| !MISSING_MARKERS.contains(&&**value))
}

/// Parse a rating cell. NaN and infinities count as missing.
fn parse_rating(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|r| r.is_finite())
}

fn csv_error(file: &str, err: csv::Error) -> DataLoadError {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    let reason = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(io_err) => DataLoadError::IoError(io_err),
        _ => DataLoadError::ParseError {
            file: file.to_string(),
            line,
            reason,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Result<Vec<RawMovie>> {
        parse_reader(input.as_bytes(), "test.csv")
    }

    #[test]
    fn test_parse_rating() {
        assert_eq!(parse_rating("8.1"), Some(8.1));
        assert_eq!(parse_rating(" 7 "), Some(7.0));
        assert_eq!(parse_rating("eight"), None);
        assert_eq!(parse_rating("NaN"), None);
    }

    #[test]
    fn test_parse_rating_rejects_infinities() {
        assert_eq!(parse_rating("inf"), None);
        assert_eq!(parse_rating("-infinity"), None);
        assert_eq!(parse_rating("1e400"), None);
        assert_eq!(parse_rating("1e12"), Some(1e12));

        let rows = parse("title,rating,genre,stars\nA,inf,Drama,X\n").unwrap();
        assert_eq!(rows[0].rating, None);
    }

    #[test]
    fn test_columns_found_in_any_order() {
        let rows = parse("stars,year,genre,title,rating\nX Y,1999,Drama,A,8.1\n").unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "A");
        assert_eq!(rows[0].rating, Some(8.1));
        assert_eq!(rows[0].genre.as_deref(), Some("Drama"));
        assert_eq!(rows[0].stars.as_deref(), Some("X Y"));
    }

    #[test]
    fn test_quoted_genre_list_kept_whole() {
        let rows = parse("title,rating,genre,stars\nA,8.1,\"Drama, Comedy\",\"X, Y\"\n").unwrap();
        assert_eq!(rows[0].genre.as_deref(), Some("Drama, Comedy"));
        assert_eq!(rows[0].stars.as_deref(), Some("X, Y"));
    }

    #[test]
    fn test_missing_cells_become_none() {
        let rows = parse("title,rating,genre,stars\nA,,NaN,\nB,n/a,Drama\n").unwrap();

        assert_eq!(rows[0].rating, None);
        assert_eq!(rows[0].genre, None);
        assert_eq!(rows[0].stars, None);

        // Short record: stars cell missing entirely
        assert_eq!(rows[1].rating, None);
        assert_eq!(rows[1].genre.as_deref(), Some("Drama"));
        assert_eq!(rows[1].stars, None);
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let err = parse("title,rating,genre\nA,8.1,Drama\n").unwrap_err();
        assert!(matches!(
            err,
            DataLoadError::MissingColumn { ref column, .. } if column == "stars"
        ));
    }

    #[test]
    fn test_empty_input_is_not_tabular() {
        assert!(matches!(
            parse("").unwrap_err(),
            DataLoadError::MissingColumn { .. }
        ));
    }

    #[test]
    fn test_long_record_is_an_error() {
        let err = parse("title,rating,genre,stars\nA,8.1,Drama,X,extra\n").unwrap_err();
        assert!(matches!(
            err,
            DataLoadError::FieldCountMismatch {
                expected: 4,
                found: 5,
                line: 2
            }
        ));
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let mut input = b"title,rating,genre,stars\n".to_vec();
        input.extend_from_slice(b"Caf\xe9,7.0,Drama,X\n");

        let rows = parse_reader(input.as_slice(), "latin1.csv").unwrap();
        assert_eq!(rows[0].title, "Caf\u{fffd}");
    }

    #[test]
    fn test_missing_file() {
        let err = parse_movies(Path::new("does/not/exist.csv")).unwrap_err();
        assert!(matches!(err, DataLoadError::FileNotFound { .. }));
    }
}
