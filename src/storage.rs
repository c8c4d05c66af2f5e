mod directory;

pub use directory::{Directory, ReadError, RosterStore, WriteError};
