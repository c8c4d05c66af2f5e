use std::{fmt, str::FromStr};

/// A seniority level from the fixed, ordered vocabulary.
///
/// Levels are referenced either by their 1-based position in [`Seniority::ALL`]
/// or by a case-insensitive exact match on their name. The canonical casing is
/// the one produced by [`fmt::Display`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Seniority {
    /// Entry level.
    Entry,
    /// Junior level.
    Junior,
    /// Middle level.
    Middle,
    /// Senior level.
    Senior,
    /// Management.
    Management,
    /// Executive.
    Executive,
}

impl Seniority {
    /// Every level, in display order.
    pub const ALL: [Self; 6] = [
        Self::Entry,
        Self::Junior,
        Self::Middle,
        Self::Senior,
        Self::Management,
        Self::Executive,
    ];

    /// Returns the canonically-cased name of the level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Entry => "Entry",
            Self::Junior => "Junior",
            Self::Middle => "Middle",
            Self::Senior => "Senior",
            Self::Management => "Management",
            Self::Executive => "Executive",
        }
    }

    /// Looks up a level by its 1-based position in [`Seniority::ALL`].
    ///
    /// Returns `None` for `0` and for positions past the end of the list.
    #[must_use]
    pub fn from_position(position: usize) -> Option<Self> {
        position
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index).copied())
    }

    /// Returns the 1-based position of this level.
    #[must_use]
    pub fn position(self) -> usize {
        Self::ALL
            .iter()
            .position(|level| *level == self)
            .map_or(0, |index| index + 1)
    }
}

impl fmt::Display for Seniority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Seniority {
    type Err = InvalidSeniority;

    /// Parses a level by case-insensitive name.
    ///
    /// Positions are not accepted here; see [`Seniority::from_position`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| InvalidSeniority(s.to_string()))
    }
}

/// Error returned when a string does not name a seniority level.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("'{0}' isn't a valid seniority level")]
pub struct InvalidSeniority(pub(crate) String);
