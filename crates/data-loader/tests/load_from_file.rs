//! Integration tests for loading a dataset from disk.

use data_loader::{clean, DataLoadError, Genres, MovieTable, RawMovie};
use proptest::prelude::*;
use std::collections::HashSet;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_dataset(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_dedups_and_parses_genres() {
    let file = write_dataset(
        "title,year,certificate,duration,genre,rating,description,stars,votes\n\
         Cobra Kai,(2018– ),TV-14,30 min,\"Action, Comedy, Drama\",8.5,Karate.,\"Ralph Macchio, William Zabka\",\"177,031\"\n\
         Cobra Kai,(2018– ),TV-14,30 min,\"Action, Comedy, Drama\",8.5,Karate.,\"Ralph Macchio, William Zabka\",\"177,031\"\n\
         The Crown,(2016– ),TV-MA,58 min,\"Biography, Drama, History\",8.7,Royals.,\"Claire Foy, Olivia Colman\",\"199,885\"\n\
         Untitled,,,,,,,,\n",
    );

    let table = MovieTable::load(file.path()).unwrap();

    assert_eq!(table.len(), 3);

    let cobra = table.get("Cobra Kai").unwrap();
    assert_eq!(cobra.rating, Some(8.5));
    assert_eq!(cobra.genres.as_slice(), ["Action", "Comedy", "Drama"]);
    assert_eq!(cobra.stars.as_deref(), Some("Ralph Macchio, William Zabka"));

    let untitled = table.get("Untitled").unwrap();
    assert_eq!(untitled.rating, None);
    assert_eq!(untitled.genres, Genres::Absent);
    assert_eq!(untitled.stars, None);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = MovieTable::load(&dir.path().join("n_movies.csv")).unwrap_err();

    assert!(matches!(err, DataLoadError::FileNotFound { .. }));
}

#[test]
fn test_load_without_required_columns() {
    let file = write_dataset("name,score\nA,1\n");
    let err = MovieTable::load(file.path()).unwrap_err();

    assert!(matches!(err, DataLoadError::MissingColumn { ref column, .. } if column == "title"));
}

fn raw_rows() -> impl Strategy<Value = Vec<RawMovie>> {
    prop::collection::vec(
        (
            "[A-E]{0,2}",
            prop::option::of(0.0f64..10.0),
            prop::option::of("[a-c]{1,3}(, [a-c]{1,3}){0,2}"),
        )
            .prop_map(|(title, rating, genre)| RawMovie::new(title, rating, genre.as_deref(), None)),
        0..40,
    )
}

proptest! {
    #[test]
    fn prop_clean_titles_are_unique(rows in raw_rows()) {
        let table = clean(rows);
        let mut seen = HashSet::new();
        for movie in &table {
            prop_assert!(seen.insert(movie.title.clone()));
        }
    }

    #[test]
    fn prop_clean_keeps_first_occurrence_order(rows in raw_rows()) {
        let mut expected: Vec<RawMovie> = Vec::new();
        for row in &rows {
            if !expected.iter().any(|kept| kept.title == row.title) {
                expected.push(row.clone());
            }
        }

        let table = clean(rows);
        prop_assert_eq!(table.len(), expected.len());
        for (movie, raw) in table.iter().zip(&expected) {
            prop_assert_eq!(&movie.title, &raw.title);
            prop_assert_eq!(movie.rating, raw.rating);
        }
    }
}
