//! Benchmark utilities.

#![deny(unsafe_code)]
#![warn(missing_docs)]

use castlink_testkit::{Dataset, DatasetBuilder};
use rand::Rng;

/// The name of the person at `index` in a generated dataset.
#[must_use]
pub fn person_name(index: usize) -> String {
    format!("Person {index:05}")
}

/// Generates a dataset of `films` films where film `i` is cast with the
/// `cast_size` people starting at index `i`, so casts overlap and every
/// person links to their neighbors.
#[must_use]
pub fn dense_dataset(films: usize, cast_size: usize) -> Dataset {
    let mut builder = DatasetBuilder::new();
    for i in 0..films {
        let names: Vec<String> = (i..i + cast_size).map(person_name).collect();
        let cast: Vec<&str> = names.iter().map(String::as_str).collect();
        let title = format!("Film {i:05}");
        builder = builder.film(&title, 1900 + (i % 200) as u16, &cast);
    }
    builder.build()
}

/// Picks `count` random person names present in a dataset of `people`
/// people.
#[must_use]
pub fn random_person_names(people: usize, count: usize) -> Vec<String> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| person_name(rng.gen_range(0..people)))
        .collect()
}
