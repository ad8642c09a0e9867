//! Binary format invariants: table ordering and padding rules.

use castlink_codec::{decode_actor_record, decode_movie_record};
use castlink_core::Film;
use castlink_testkit::DatasetBuilder;

#[test]
fn actor_table_is_strictly_sorted_by_name() {
    let store = DatasetBuilder::new()
        .film("M", 2000, &["Walter", "Ada", "Zoe", "Bert", "ada"])
        .build_store();

    let mut previous: Option<String> = None;
    for index in 0..store.actor_count() {
        let name = store.actor_record_at(index).unwrap().name;
        if let Some(prev) = &previous {
            assert!(
                prev.as_bytes() < name.as_bytes(),
                "table not sorted: {prev:?} before {name:?}"
            );
        }
        previous = Some(name);
    }
}

#[test]
fn movie_table_is_strictly_sorted_by_title_then_year() {
    let store = DatasetBuilder::new()
        .film("Beta", 1990, &["A"])
        .film("Alpha", 2005, &["A"])
        .film("Alpha", 1960, &["B"])
        .film("alpha", 1950, &["B"])
        .build_store();

    let mut previous: Option<Film> = None;
    for index in 0..store.movie_count() {
        let film = store.movie_record_at(index).unwrap().film;
        if let Some(prev) = &previous {
            assert!(
                prev < &film,
                "table not sorted: {prev} before {film}"
            );
        }
        previous = Some(film);
    }
}

/// Padding invariant: for each name length in {2,3,4,5}, the film count
/// decodes to the known injected value, proving the pad byte after the
/// NUL is skipped exactly when the name length is even.
#[test]
fn actor_padding_rule_for_name_lengths_two_to_five() {
    for name in ["Jo", "Kim", "Alex", "Susan"] {
        let store = DatasetBuilder::new()
            .film("One", 1990, &[name, "Partner"])
            .film("Two", 1991, &[name, "Partner"])
            .film("Three", 1992, &[name, "Partner"])
            .build_store();

        let films = store.credits_of(name).unwrap().unwrap();
        assert_eq!(films.len(), 3, "wrong film count for name {name:?}");
    }
}

/// The movie-side rule has the opposite parity: titles of lengths
/// {1,2,3,4} with a known cast count.
#[test]
fn movie_padding_rule_for_title_lengths_one_to_four() {
    for title in ["Q", "Up", "Ran", "Jaws"] {
        let store = DatasetBuilder::new()
            .film(title, 1975, &["A", "B", "C"])
            .build_store();

        let cast = store.cast_of(&Film::new(title, 1975)).unwrap().unwrap();
        assert_eq!(cast.len(), 3, "wrong cast count for title {title:?}");
    }
}

#[test]
fn encoded_records_decode_through_the_codec_directly() {
    let dataset = DatasetBuilder::new()
        .film("Heat", 1995, &["Al", "Bob"])
        .build();

    // table slot 0 of each buffer
    let actor_offset = u32::from_le_bytes(dataset.actor_bytes[4..8].try_into().unwrap());
    let actor = decode_actor_record(&dataset.actor_bytes, actor_offset).unwrap();
    assert_eq!(actor.name, "Al");
    assert_eq!(actor.film_offsets.len(), 1);

    let movie_offset = u32::from_le_bytes(dataset.movie_bytes[4..8].try_into().unwrap());
    let movie = decode_movie_record(&dataset.movie_bytes, movie_offset).unwrap();
    assert_eq!(movie.film, Film::new("Heat", 1995));
    assert_eq!(movie.cast_offsets.len(), 2);
}
