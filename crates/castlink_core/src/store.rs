//! The index store: binary-searched lookups over the two index buffers.

use crate::dir::DatasetDir;
use crate::error::{CoreError, CoreResult};
use crate::path::ConnectionPath;
use castlink_codec::{
    compare_film_at, compare_name_at, decode_actor_record, decode_movie_record, read_film_at,
    read_name_at, ActorRecord, Film, MovieRecord,
};
use castlink_storage::{BufferSource, FileBuffer};
use std::cmp::Ordering;
use std::path::Path;
use tracing::debug;

/// Byte size of the count header at the start of each buffer.
const HEADER_LEN: usize = 4;
/// Byte size of one offset table entry.
const TABLE_ENTRY_LEN: usize = 4;

/// Read-only query engine over the actor and movie index buffers.
///
/// The store owns both buffers for its whole lifetime and releases them
/// exactly once when dropped. All operations are pure reads; a single
/// store may back concurrent searches on separate threads without
/// locking.
///
/// Record decoding is lazy: opening validates only the count headers and
/// offset table bounds, and each lookup decodes just the records it
/// touches.
pub struct IndexStore {
    actors: Box<dyn BufferSource>,
    movies: Box<dyn BufferSource>,
    actor_count: u32,
    movie_count: u32,
}

impl IndexStore {
    /// Opens a store over two acquired buffers.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidFormat`] if either buffer is empty,
    /// lacks a count header, or declares an offset table that extends past
    /// its end.
    pub fn open(
        actors: Box<dyn BufferSource>,
        movies: Box<dyn BufferSource>,
    ) -> CoreResult<Self> {
        let actor_count = read_count_header(actors.as_ref(), "actor")?;
        let movie_count = read_count_header(movies.as_ref(), "movie")?;
        debug!(
            actor_count,
            movie_count,
            actor_bytes = actors.len(),
            movie_bytes = movies.len(),
            "index store opened"
        );
        Ok(Self {
            actors,
            movies,
            actor_count,
            movie_count,
        })
    }

    /// Opens a store over the index file pair in a dataset directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or either file is missing,
    /// unreadable, or fails header validation.
    pub fn open_dir(path: &Path) -> CoreResult<Self> {
        let dir = DatasetDir::open(path)?;
        let actors = FileBuffer::open(&dir.actor_path()).map_err(CoreError::Storage)?;
        let movies = FileBuffer::open(&dir.movie_path()).map_err(CoreError::Storage)?;
        Self::open(Box::new(actors), Box::new(movies))
    }

    /// Returns the number of actor records in the index.
    #[must_use]
    pub fn actor_count(&self) -> u32 {
        self.actor_count
    }

    /// Returns the number of movie records in the index.
    #[must_use]
    pub fn movie_count(&self) -> u32 {
        self.movie_count
    }

    /// Returns the films `name` appears in, in on-disk cast-table order,
    /// or `None` if no exact name match exists.
    ///
    /// # Errors
    ///
    /// Returns an error only on a structural violation in the index;
    /// absence is `Ok(None)`.
    pub fn credits_of(&self, name: &str) -> CoreResult<Option<Vec<Film>>> {
        let data = self.actors.bytes();
        let hit = search_table(self.actors.as_ref(), self.actor_count, |offset| {
            Ok(compare_name_at(name, data, offset)?)
        })?;
        let Some(offset) = hit else {
            return Ok(None);
        };

        let record = decode_actor_record(data, offset)?;
        let movie_data = self.movies.bytes();
        let mut films = Vec::with_capacity(record.film_offsets.len());
        for film_offset in record.film_offsets {
            films.push(read_film_at(movie_data, film_offset)?);
        }
        Ok(Some(films))
    }

    /// Returns the names of `film`'s cast, in on-disk order, or `None` if
    /// no exact (title, year) match exists.
    ///
    /// # Errors
    ///
    /// Returns an error only on a structural violation in the index;
    /// absence is `Ok(None)`.
    pub fn cast_of(&self, film: &Film) -> CoreResult<Option<Vec<String>>> {
        let data = self.movies.bytes();
        let hit = search_table(self.movies.as_ref(), self.movie_count, |offset| {
            Ok(compare_film_at(film, data, offset)?)
        })?;
        let Some(offset) = hit else {
            return Ok(None);
        };

        let record = decode_movie_record(data, offset)?;
        let actor_data = self.actors.bytes();
        let mut names = Vec::with_capacity(record.cast_offsets.len());
        for cast_offset in record.cast_offsets {
            names.push(read_name_at(actor_data, cast_offset)?);
        }
        Ok(Some(names))
    }

    /// Returns `true` if `name` has at least one credit in the index.
    ///
    /// Touches only the compared key bytes, never a film list; meant for
    /// validating user input before a search.
    ///
    /// # Errors
    ///
    /// Returns an error only on a structural violation in the index.
    pub fn has_credits(&self, name: &str) -> CoreResult<bool> {
        let data = self.actors.bytes();
        let hit = search_table(self.actors.as_ref(), self.actor_count, |offset| {
            Ok(compare_name_at(name, data, offset)?)
        })?;
        Ok(hit.is_some())
    }

    /// Finds a shortest chain of co-appearances from `source` to `dest`,
    /// bounded by [`crate::MAX_DEGREE`] hops.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::SamePerson`] if `source == dest`, or a
    /// structural error from the index. An unreachable destination is
    /// `Ok(None)`.
    pub fn find_connection(&self, source: &str, dest: &str) -> CoreResult<Option<ConnectionPath>> {
        crate::search::find_connection(self, source, dest)
    }

    /// Decodes the actor record referenced by table slot `index`.
    ///
    /// Serves the verification tooling and the sortedness tests; lookups
    /// never go through here.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range or the record is
    /// malformed.
    pub fn actor_record_at(&self, index: u32) -> CoreResult<ActorRecord> {
        let offset = checked_table_offset(self.actors.as_ref(), self.actor_count, index, "actor")?;
        Ok(decode_actor_record(self.actors.bytes(), offset)?)
    }

    /// Decodes the movie record referenced by table slot `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range or the record is
    /// malformed.
    pub fn movie_record_at(&self, index: u32) -> CoreResult<MovieRecord> {
        let offset = checked_table_offset(self.movies.as_ref(), self.movie_count, index, "movie")?;
        Ok(decode_movie_record(self.movies.bytes(), offset)?)
    }
}

/// Bounds-checked table entry read for the record accessors.
fn checked_table_offset(
    buffer: &dyn BufferSource,
    count: u32,
    index: u32,
    kind: &str,
) -> CoreResult<u32> {
    if index >= count {
        return Err(CoreError::invalid_format(format!(
            "{kind} table index {index} out of range for {count} records"
        )));
    }
    table_offset(buffer, index)
}

/// Reads a table entry: the record offset stored in slot `index`.
fn table_offset(buffer: &dyn BufferSource, index: u32) -> CoreResult<u32> {
    let position = HEADER_LEN + TABLE_ENTRY_LEN * index as usize;
    let bytes = buffer.slice_at(position, TABLE_ENTRY_LEN)?;
    Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

/// Validates the count header and offset table bounds of one buffer.
fn read_count_header(buffer: &dyn BufferSource, kind: &str) -> CoreResult<u32> {
    if buffer.len() < HEADER_LEN {
        return Err(CoreError::invalid_format(format!(
            "{kind} buffer too small for a count header: {} bytes",
            buffer.len()
        )));
    }
    let bytes = buffer.slice_at(0, HEADER_LEN)?;
    let count = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    let table_end = HEADER_LEN + TABLE_ENTRY_LEN * count as usize;
    if table_end > buffer.len() {
        return Err(CoreError::invalid_format(format!(
            "{kind} offset table of {count} entries extends past buffer end ({} bytes)",
            buffer.len()
        )));
    }
    Ok(count)
}

/// Binary search over a sorted offset table.
///
/// `compare` orders the probe key against the record behind a table entry
/// and is handed the entry's record offset. Exact match only; on a hit the
/// matching record offset is returned. Each probe touches only the
/// compared record's key bytes.
fn search_table<F>(buffer: &dyn BufferSource, count: u32, mut compare: F) -> CoreResult<Option<u32>>
where
    F: FnMut(u32) -> CoreResult<Ordering>,
{
    let mut lo = 0u32;
    let mut hi = count;
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let offset = table_offset(buffer, mid)?;
        match compare(offset)? {
            Ordering::Equal => return Ok(Some(offset)),
            Ordering::Less => hi = mid,
            Ordering::Greater => lo = mid + 1,
        }
    }
    Ok(None)
}
