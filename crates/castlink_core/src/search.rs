//! Bounded breadth-first connection search.
//!
//! The search runs over the implicit bipartite graph exposed by the index
//! store: neighbors of a person are `credits_of` then `cast_of` per film,
//! computed on demand. Nothing is materialized beyond the work queue and
//! the visited sets, all of which are private to a single invocation.

use crate::error::{CoreError, CoreResult};
use crate::path::ConnectionPath;
use crate::store::IndexStore;
use castlink_codec::Film;
use std::collections::{HashSet, VecDeque};
use tracing::debug;

/// Maximum number of person-to-person hops in a connection: "six degrees".
///
/// This bound is a hard contract, not a heuristic - a pair connected only
/// by a longer real-world chain reports no path.
pub const MAX_DEGREE: usize = 6;

/// Finds a shortest chain of co-appearances from `source` to `dest`,
/// bounded by [`MAX_DEGREE`] hops.
///
/// # Errors
///
/// Returns [`CoreError::SamePerson`] if `source == dest`, or a structural
/// error from the index. An unreachable destination is `Ok(None)`.
pub fn find_connection(
    store: &IndexStore,
    source: &str,
    dest: &str,
) -> CoreResult<Option<ConnectionPath>> {
    find_connection_bounded(store, source, dest, MAX_DEGREE)
}

/// [`find_connection`] with an explicit hop bound.
///
/// Expansion is strictly level-by-level (FIFO queue), so the first time
/// any person or film is reached is via a shortest path to it. The
/// visited sets are therefore marked globally, on first sight, across the
/// whole invocation: a film is expanded at most once and a person is
/// enqueued at most once, no matter how many paths could reach them. That
/// discipline is what keeps the search linear in the visited subgraph,
/// and it is only sound because of the level-order guarantee.
///
/// # Errors
///
/// Returns [`CoreError::SamePerson`] if `source == dest`, or a structural
/// error from the index.
pub fn find_connection_bounded(
    store: &IndexStore,
    source: &str,
    dest: &str,
    max_degree: usize,
) -> CoreResult<Option<ConnectionPath>> {
    if source == dest {
        return Err(CoreError::SamePerson);
    }
    debug!(source, dest, max_degree, "connection search started");

    let mut queue: VecDeque<ConnectionPath> = VecDeque::new();
    let mut visited_people: HashSet<String> = HashSet::new();
    let mut visited_films: HashSet<Film> = HashSet::new();

    visited_people.insert(source.to_owned());
    queue.push_back(ConnectionPath::new(source));

    while let Some(path) = queue.pop_front() {
        // FIFO order means path lengths are non-decreasing across the
        // queue: once the front reaches the bound, everything behind it
        // has too.
        if path.len() >= max_degree {
            break;
        }

        let Some(films) = store.credits_of(path.last_person())? else {
            continue;
        };
        for film in films {
            if !visited_films.insert(film.clone()) {
                continue;
            }
            let Some(cast) = store.cast_of(&film)? else {
                continue;
            };
            for co_star in cast {
                if visited_people.contains(&co_star) {
                    continue;
                }
                visited_people.insert(co_star.clone());

                let next = path.extended(film.clone(), co_star.as_str());
                if co_star == dest {
                    debug!(
                        hops = next.len(),
                        people_seen = visited_people.len(),
                        films_seen = visited_films.len(),
                        "connection found"
                    );
                    return Ok(Some(next));
                }
                queue.push_back(next);
            }
        }
    }

    debug!(
        people_seen = visited_people.len(),
        films_seen = visited_films.len(),
        "no connection within bound"
    );
    Ok(None)
}
