use data_loader::MovieTable;
use std::path::Path;
use std::time::Instant;

fn main() {
    let path = Path::new("data/n_movies.csv");

    println!("Loading movie dataset...\n");

    let start = Instant::now();
    let table = MovieTable::load(path).expect("Failed to load dataset");
    let elapsed = start.elapsed();

    let no_genre = table.iter().filter(|m| m.genres.is_absent()).count();
    let no_rating = table.iter().filter(|m| m.rating.is_none()).count();

    println!("=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Unique titles: {}", table.len());
    println!("Without genre: {}", no_genre);
    println!("Without rating: {}", no_rating);
}
