//! Verify command implementation.

use castlink_core::{DatasetDir, Film, IndexStore};
use castlink_storage::{BufferSource, FileBuffer};
use std::path::Path;
use tracing::info;

/// Verification result for one index table.
#[derive(Debug)]
pub struct VerifyResult {
    /// Number of records checked.
    pub records_checked: usize,
    /// Number of corrupt or misordered records.
    pub corrupt_records: usize,
    /// List of errors found.
    pub errors: Vec<String>,
}

impl VerifyResult {
    fn new() -> Self {
        Self {
            records_checked: 0,
            corrupt_records: 0,
            errors: Vec::new(),
        }
    }

    fn is_ok(&self) -> bool {
        self.corrupt_records == 0 && self.errors.is_empty()
    }
}

/// Runs the verify command.
pub fn run(data_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    println!("Verifying index at {:?}", data_dir);
    println!();

    let dataset = DatasetDir::open(data_dir)?;
    let actors = FileBuffer::open(&dataset.actor_path())?;
    let movies = FileBuffer::open(&dataset.movie_path())?;
    println!(
        "actordata: {} bytes, moviedata: {} bytes",
        actors.bytes().len(),
        movies.bytes().len()
    );

    let store = IndexStore::open(Box::new(actors), Box::new(movies))?;
    info!(
        actors = store.actor_count(),
        movies = store.movie_count(),
        "index opened for verification"
    );

    println!("Checking actor table...");
    let actor_result = verify_actors(&store);
    print_result("Actors", &actor_result);

    println!("Checking movie table...");
    let movie_result = verify_movies(&store);
    print_result("Movies", &movie_result);

    println!();
    if actor_result.is_ok() && movie_result.is_ok() {
        println!("✓ Index verification passed");
        Ok(())
    } else {
        println!("✗ Index verification failed");
        Err("Verification failed".into())
    }
}

/// Walks the actor table: every record must decode, names must be
/// strictly ascending, and each record's film offsets must decode as
/// movie keys (checked through the lookup path).
fn verify_actors(store: &IndexStore) -> VerifyResult {
    let mut result = VerifyResult::new();
    let mut previous: Option<String> = None;

    for index in 0..store.actor_count() {
        result.records_checked += 1;

        let record = match store.actor_record_at(index) {
            Ok(record) => record,
            Err(e) => {
                result.corrupt_records += 1;
                result
                    .errors
                    .push(format!("actor record {index} failed to decode: {e}"));
                continue;
            }
        };

        if let Some(prev) = &previous {
            if prev.as_bytes() >= record.name.as_bytes() {
                result.errors.push(format!(
                    "actor table not strictly sorted at slot {index}: {prev:?} >= {:?}",
                    record.name
                ));
            }
        }

        match store.credits_of(&record.name) {
            Ok(Some(films)) => {
                if films.len() != record.film_offsets.len() {
                    result.errors.push(format!(
                        "actor {:?} credit count mismatch: {} offsets, {} films",
                        record.name,
                        record.film_offsets.len(),
                        films.len()
                    ));
                }
            }
            Ok(None) => {
                result.errors.push(format!(
                    "actor {:?} at slot {index} not reachable by binary search",
                    record.name
                ));
            }
            Err(e) => {
                result.corrupt_records += 1;
                result
                    .errors
                    .push(format!("actor {:?} film offsets corrupt: {e}", record.name));
            }
        }

        previous = Some(record.name);
    }

    result
}

/// Walks the movie table: the mirror of [`verify_actors`], keyed by
/// (title, year).
fn verify_movies(store: &IndexStore) -> VerifyResult {
    let mut result = VerifyResult::new();
    let mut previous: Option<Film> = None;

    for index in 0..store.movie_count() {
        result.records_checked += 1;

        let record = match store.movie_record_at(index) {
            Ok(record) => record,
            Err(e) => {
                result.corrupt_records += 1;
                result
                    .errors
                    .push(format!("movie record {index} failed to decode: {e}"));
                continue;
            }
        };

        if let Some(prev) = &previous {
            if prev >= &record.film {
                result.errors.push(format!(
                    "movie table not strictly sorted at slot {index}: {prev} >= {}",
                    record.film
                ));
            }
        }

        match store.cast_of(&record.film) {
            Ok(Some(cast)) => {
                if cast.len() != record.cast_offsets.len() {
                    result.errors.push(format!(
                        "movie {} cast count mismatch: {} offsets, {} names",
                        record.film,
                        record.cast_offsets.len(),
                        cast.len()
                    ));
                }
            }
            Ok(None) => {
                result.errors.push(format!(
                    "movie {} at slot {index} not reachable by binary search",
                    record.film
                ));
            }
            Err(e) => {
                result.corrupt_records += 1;
                result
                    .errors
                    .push(format!("movie {} cast offsets corrupt: {e}", record.film));
            }
        }

        previous = Some(record.film);
    }

    result
}

fn print_result(label: &str, result: &VerifyResult) {
    println!(
        "{}: {} records checked, {} corrupt",
        label, result.records_checked, result.corrupt_records
    );
    for error in &result.errors {
        println!("  - {error}");
    }
}
