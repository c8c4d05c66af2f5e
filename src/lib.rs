//! Plain-text Department Rosters
//!
//! Each department's employees are stored one record per line in a text file
//! whose name is derived from the department's display name.

pub mod domain;
pub use domain::{Config, DepartmentKey, DepartmentName, Employee, Seniority};

/// Filesystem storage for department rosters.
pub mod storage;
pub use storage::{Directory, ReadError, RosterStore, WriteError};
