//! The film value type.

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// A film identified by title and release year.
///
/// Two films are the same entity iff they compare equal under the index
/// ordering: title first, byte-wise and case-sensitive, then year
/// ascending. This is the sort key of the movie offset table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Film {
    /// The film's title, compared ordinally.
    pub title: String,
    /// The release year.
    pub year: u16,
}

impl Film {
    /// Creates a film from a title and year.
    pub fn new(title: impl Into<String>, year: u16) -> Self {
        Self {
            title: title.into(),
            year,
        }
    }
}

impl Ord for Film {
    fn cmp(&self, other: &Self) -> Ordering {
        self.title
            .as_bytes()
            .cmp(other.title.as_bytes())
            .then_with(|| self.year.cmp(&other.year))
    }
}

impl PartialOrd for Film {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Film {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.year)
    }
}
