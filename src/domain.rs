//! Domain models for department rosters.
//!
//! This module contains the core domain types: the seniority vocabulary,
//! employee records, department names with their derived storage keys, and
//! configuration.

/// The fixed, ordered seniority vocabulary.
pub mod seniority;
pub use seniority::{InvalidSeniority, Seniority};

/// Employee records and their line format.
pub mod employee;
pub use employee::{Employee, ParseEmployeeError};

/// Department display names and derived storage keys.
pub mod department;
pub use department::{DepartmentKey, DepartmentName};

mod config;
pub use config::{Config, ConfigError};
