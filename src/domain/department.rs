use std::{fmt, ops::Deref};

use non_empty_string::NonEmptyString;

/// The human-readable name of a department, as typed by the user.
///
/// Case is preserved. The name is only used for display; storage is keyed by
/// the [`DepartmentKey`] derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentName(NonEmptyString);

impl DepartmentName {
    /// Wraps a non-empty display name.
    #[must_use]
    pub const fn new(name: NonEmptyString) -> Self {
        Self(name)
    }

    /// Returns the display name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Derives the storage key for this department.
    #[must_use]
    pub fn key(&self) -> DepartmentKey {
        DepartmentKey::derive(self.as_str())
    }

    /// Returns the name with the first letter of every word upper-cased and
    /// the remaining letters lower-cased.
    ///
    /// A "word" starts at any letter that follows a non-letter, so
    /// `"r&d team"` becomes `"R&D Team"`.
    #[must_use]
    pub fn title_case(&self) -> String {
        let mut title = String::with_capacity(self.as_str().len());
        let mut previous_is_letter = false;
        for c in self.as_str().chars() {
            if previous_is_letter {
                title.extend(c.to_lowercase());
            } else {
                title.extend(c.to_uppercase());
            }
            previous_is_letter = c.is_alphabetic();
        }
        title
    }
}

impl fmt::Display for DepartmentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The filesystem-safe storage key derived from a department name.
///
/// Derivation lower-cases the name, replaces each space with an underscore,
/// and then drops every character that is neither alphanumeric nor an
/// underscore. It is pure and total.
///
/// Distinct display names may derive the same key, for example names that
/// differ only in case or in punctuation. Such names refer to the same
/// department on disk.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DepartmentKey(String);

impl DepartmentKey {
    /// Derives the key for a display name.
    #[must_use]
    pub fn derive(name: &str) -> Self {
        let key = name
            .to_lowercase()
            .replace(' ', "_")
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == '_')
            .collect();
        Self(key)
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for DepartmentKey {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for DepartmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
