//! Synthetic dataset builder.
//!
//! Encodes the binary index format so tests can fabricate
//! `actordata`/`moviedata` buffer pairs with known contents. The layout
//! mirrors the decoder exactly: little-endian integers, sorted offset
//! tables, NUL-terminated strings, the even-length pad rule for actor
//! names and the odd-length pad rule for movie titles, and 4-byte
//! alignment of each offset list relative to its record start.

use castlink_codec::Film;
use castlink_core::IndexStore;
use castlink_storage::InMemoryBuffer;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// Accumulates films and casts, then encodes both index buffers.
///
/// Actors are derived from the casts; both offset tables come out sorted
/// because the builder keys its maps by the on-disk orderings.
///
/// # Example
///
/// ```rust
/// use castlink_testkit::DatasetBuilder;
///
/// let dataset = DatasetBuilder::new()
///     .film("M", 2000, &["A", "B"])
///     .film("N", 2001, &["B", "C"])
///     .build();
/// let store = dataset.store();
/// assert_eq!(store.actor_count(), 3);
/// assert_eq!(store.movie_count(), 2);
/// ```
#[derive(Debug, Default)]
pub struct DatasetBuilder {
    films: BTreeMap<Film, Vec<String>>,
}

/// An encoded buffer pair ready to back an [`IndexStore`].
#[derive(Debug, Clone)]
pub struct Dataset {
    /// The encoded actor buffer (`actordata`).
    pub actor_bytes: Vec<u8>,
    /// The encoded movie buffer (`moviedata`).
    pub movie_bytes: Vec<u8>,
}

impl DatasetBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a film with its cast. Adding the same (title, year) again
    /// merges the casts; duplicate names within a cast are kept once.
    ///
    /// # Panics
    ///
    /// Panics if the year is outside the encodable range 1900..=2155.
    #[must_use]
    pub fn film(mut self, title: &str, year: u16, cast: &[&str]) -> Self {
        assert!(
            (1900..=2155).contains(&year),
            "year {year} not encodable as a byte delta from 1900"
        );
        let entry = self.films.entry(Film::new(title, year)).or_default();
        for name in cast {
            if !entry.iter().any(|existing| existing == name) {
                entry.push((*name).to_owned());
            }
        }
        self
    }

    /// Encodes the accumulated films into an index buffer pair.
    #[must_use]
    pub fn build(&self) -> Dataset {
        // Derive each actor's credit list; BTreeMap iteration gives the
        // table orderings for free.
        let mut credits: BTreeMap<String, Vec<Film>> = BTreeMap::new();
        for (film, cast) in &self.films {
            for name in cast {
                credits.entry(name.clone()).or_default().push(film.clone());
            }
        }

        // Layout pass: record offsets follow the header and offset table.
        let mut actor_offsets: HashMap<&str, u32> = HashMap::new();
        let mut position = 4 + 4 * credits.len();
        for (name, films) in &credits {
            actor_offsets.insert(name.as_str(), position as u32);
            position += actor_record_len(name, films.len());
        }

        let mut movie_offsets: HashMap<&Film, u32> = HashMap::new();
        let mut position = 4 + 4 * self.films.len();
        for (film, cast) in &self.films {
            movie_offsets.insert(film, position as u32);
            position += movie_record_len(&film.title, cast.len());
        }

        // Emit pass.
        let mut actor_bytes = Vec::new();
        put_u32(&mut actor_bytes, credits.len() as u32);
        for name in credits.keys() {
            put_u32(&mut actor_bytes, actor_offsets[name.as_str()]);
        }
        for (name, films) in &credits {
            let start = actor_bytes.len();
            actor_bytes.extend_from_slice(name.as_bytes());
            actor_bytes.push(0);
            if name.len() % 2 == 0 {
                actor_bytes.push(0);
            }
            put_u16(&mut actor_bytes, films.len());
            align_to_word(&mut actor_bytes, start);
            for film in films {
                put_u32(&mut actor_bytes, movie_offsets[film]);
            }
        }

        let mut movie_bytes = Vec::new();
        put_u32(&mut movie_bytes, self.films.len() as u32);
        for film in self.films.keys() {
            put_u32(&mut movie_bytes, movie_offsets[film]);
        }
        for (film, cast) in &self.films {
            let start = movie_bytes.len();
            movie_bytes.extend_from_slice(film.title.as_bytes());
            movie_bytes.push(0);
            movie_bytes.push((film.year - 1900) as u8);
            if film.title.len() % 2 == 1 {
                movie_bytes.push(0);
            }
            put_u16(&mut movie_bytes, cast.len());
            align_to_word(&mut movie_bytes, start);
            for name in cast {
                put_u32(&mut movie_bytes, actor_offsets[name.as_str()]);
            }
        }

        Dataset {
            actor_bytes,
            movie_bytes,
        }
    }

    /// Builds and opens a store over the encoded buffers.
    ///
    /// # Panics
    ///
    /// Panics if the built dataset fails header validation, which would
    /// be a builder bug.
    #[must_use]
    pub fn build_store(&self) -> IndexStore {
        self.build().store()
    }
}

impl Dataset {
    /// Opens an [`IndexStore`] over copies of the encoded buffers.
    ///
    /// # Panics
    ///
    /// Panics if the dataset fails header validation.
    #[must_use]
    pub fn store(&self) -> IndexStore {
        IndexStore::open(
            Box::new(InMemoryBuffer::new(self.actor_bytes.clone())),
            Box::new(InMemoryBuffer::new(self.movie_bytes.clone())),
        )
        .expect("built dataset must pass header validation")
    }

    /// Writes the buffer pair as `actordata`/`moviedata` files in `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if either file cannot be written.
    pub fn write_to(&self, dir: &Path) -> std::io::Result<()> {
        std::fs::write(dir.join(castlink_core::ACTOR_FILE), &self.actor_bytes)?;
        std::fs::write(dir.join(castlink_core::MOVIE_FILE), &self.movie_bytes)?;
        Ok(())
    }
}

fn actor_record_len(name: &str, film_count: usize) -> usize {
    let mut len = name.len() + 1;
    if name.len() % 2 == 0 {
        len += 1;
    }
    len += 2;
    if len % 4 != 0 {
        len += 2;
    }
    len + 4 * film_count
}

fn movie_record_len(title: &str, cast_count: usize) -> usize {
    let mut len = title.len() + 2;
    if title.len() % 2 == 1 {
        len += 1;
    }
    len += 2;
    if len % 4 != 0 {
        len += 2;
    }
    len + 4 * cast_count
}

fn put_u32(bytes: &mut Vec<u8>, value: u32) {
    bytes.extend_from_slice(&value.to_le_bytes());
}

fn put_u16(bytes: &mut Vec<u8>, value: usize) {
    let value = u16::try_from(value).expect("count must fit in u16");
    bytes.extend_from_slice(&value.to_le_bytes());
}

fn align_to_word(bytes: &mut Vec<u8>, record_start: usize) {
    if (bytes.len() - record_start) % 4 != 0 {
        bytes.extend_from_slice(&[0, 0]);
    }
}
