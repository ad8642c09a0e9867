//! Property-based test generators using proptest.
//!
//! Provides strategies for generating random names, films, and whole
//! datasets that maintain the index format's invariants (no NUL bytes in
//! strings, encodable years, casts drawn from a shared name pool).

use crate::builder::{Dataset, DatasetBuilder};
use proptest::prelude::*;

/// Strategy for valid person names.
pub fn name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z][A-Za-z .'-]{0,23}").expect("Invalid regex")
}

/// Strategy for valid film titles.
pub fn title_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9][A-Za-z0-9 :,]{0,23}").expect("Invalid regex")
}

/// Strategy for encodable release years.
pub fn year_strategy() -> impl Strategy<Value = u16> {
    1900u16..=2050
}

/// Strategy for whole datasets: up to `max_films` films whose casts are
/// drawn from a shared pool of names, so co-appearances actually occur.
pub fn dataset_strategy(max_films: usize) -> impl Strategy<Value = Dataset> {
    (
        prop::collection::vec(name_strategy(), 2..12),
        prop::collection::vec(
            (
                title_strategy(),
                year_strategy(),
                prop::collection::vec(any::<prop::sample::Index>(), 1..5),
            ),
            1..=max_films,
        ),
    )
        .prop_map(|(pool, films)| {
            let mut builder = DatasetBuilder::new();
            for (title, year, picks) in films {
                let cast: Vec<&str> = picks
                    .iter()
                    .map(|pick| pool[pick.index(pool.len())].as_str())
                    .collect();
                builder = builder.film(&title, year, &cast);
            }
            builder.build()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn generated_datasets_open(dataset in dataset_strategy(8)) {
            let store = dataset.store();
            prop_assert!(store.actor_count() >= 1);
            prop_assert!(store.movie_count() >= 1);
        }
    }
}
