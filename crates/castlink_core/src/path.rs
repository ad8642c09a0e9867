//! The connection path value type.

use castlink_codec::Film;
use serde::Serialize;
use std::fmt;

/// One hop in a connection path: the shared film and the co-star reached
/// through it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hop {
    /// The film both people appeared in.
    pub film: Film,
    /// The person reached through that film.
    pub person: String,
}

/// An ordered chain of co-appearances from a source person.
///
/// A path of length 0 is just the source. Paths are value objects:
/// [`ConnectionPath::extended`] produces a new path and leaves the
/// original untouched, so search branches never share mutable state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionPath {
    source: String,
    hops: Vec<Hop>,
}

impl ConnectionPath {
    /// Creates a path of length 0 containing only `source`.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            hops: Vec::new(),
        }
    }

    /// Returns the number of hops in the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hops.len()
    }

    /// Returns `true` if the path has no hops.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }

    /// Returns the source person.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the terminal person of the path.
    #[must_use]
    pub fn last_person(&self) -> &str {
        self.hops.last().map_or(&self.source, |hop| &hop.person)
    }

    /// Returns the hops in order.
    #[must_use]
    pub fn hops(&self) -> &[Hop] {
        &self.hops
    }

    /// Returns a new path with one more hop through `film` to `person`.
    #[must_use]
    pub fn extended(&self, film: Film, person: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.hops.push(Hop {
            film,
            person: person.into(),
        });
        next
    }
}

impl fmt::Display for ConnectionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hops.is_empty() {
            return write!(f, "{}", self.source);
        }
        let mut from = self.source.as_str();
        for (i, hop) in self.hops.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{} was in {} with {}.", from, hop.film, hop.person)?;
            from = &hop.person;
        }
        Ok(())
    }
}
