//! A filesystem backed store of department rosters
//!
//! Each department is one text file under the configured data directory. A
//! department exists exactly when its file exists; there is no separate
//! registry of departments.

use std::{
    fs::{self, File, OpenOptions},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use tracing::instrument;

use crate::domain::{Config, DepartmentKey, Employee};

/// Storage for department rosters, keyed by [`DepartmentKey`].
///
/// [`RosterStore::exists`] followed by [`RosterStore::write`] is not atomic.
/// No lock is taken between the two calls.
pub trait RosterStore {
    /// The location a department's roster is stored at.
    fn path(&self, key: &DepartmentKey) -> PathBuf;

    /// Whether a roster exists for the given key.
    fn exists(&self, key: &DepartmentKey) -> bool;

    /// Reads a roster back as raw lines, without line terminators.
    ///
    /// Lines are returned verbatim, including blank lines.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::NotFound`] if there is no roster for the key,
    /// [`ReadError::PermissionDenied`] if it cannot be opened for reading, and
    /// [`ReadError::Io`] for any other failure.
    fn read(&self, key: &DepartmentKey) -> Result<Vec<String>, ReadError>;

    /// Creates a new roster file with one line per employee.
    ///
    /// Returns the path that was written.
    ///
    /// # Errors
    ///
    /// Returns [`WriteError::AlreadyExists`] rather than overwriting an
    /// existing roster. A failure part-way through may leave a partially
    /// written file behind.
    fn write(&self, key: &DepartmentKey, employees: &[Employee]) -> Result<PathBuf, WriteError>;
}

/// Rosters stored as text files in a single directory.
#[derive(Debug, Clone)]
pub struct Directory {
    config: Config,
}

impl Directory {
    /// Opens the data directory described by `config`, creating it if it does
    /// not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn open(config: Config) -> io::Result<Self> {
        fs::create_dir_all(&config.data_dir)?;
        tracing::debug!("Using data directory {}", config.data_dir.display());
        Ok(Self { config })
    }

    /// Returns the configuration this directory was opened with.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }
}

impl RosterStore for Directory {
    fn path(&self, key: &DepartmentKey) -> PathBuf {
        self.config.roster_path(key)
    }

    fn exists(&self, key: &DepartmentKey) -> bool {
        self.path(key).exists()
    }

    #[instrument(skip(self))]
    fn read(&self, key: &DepartmentKey) -> Result<Vec<String>, ReadError> {
        let path = self.path(key);
        let content = fs::read_to_string(&path).map_err(|e| ReadError::from_io(path, e))?;
        Ok(content.lines().map(str::to_string).collect())
    }

    #[instrument(skip(self, employees), fields(count = employees.len()))]
    fn write(&self, key: &DepartmentKey, employees: &[Employee]) -> Result<PathBuf, WriteError> {
        let path = self.path(key);

        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| WriteError::from_io(&path, e))?;

        write_lines(file, employees).map_err(|e| WriteError::from_io(&path, e))?;

        tracing::debug!("Wrote {} record(s) to {}", employees.len(), path.display());
        Ok(path)
    }
}

fn write_lines(file: File, employees: &[Employee]) -> io::Result<()> {
    let mut writer = BufWriter::new(file);
    for employee in employees {
        writeln!(writer, "{employee}")?;
    }
    writer.flush()
}

/// Error reading a roster.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    /// No roster exists at the path.
    #[error("{} not found", path.display())]
    NotFound {
        /// The roster path.
        path: PathBuf,
    },

    /// The roster exists but may not be read.
    #[error("Permission denied reading {}", path.display())]
    PermissionDenied {
        /// The roster path.
        path: PathBuf,
    },

    /// Any other I/O failure.
    #[error("Unexpected error reading {}: {source}", path.display())]
    Io {
        /// The roster path.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
}

impl ReadError {
    fn from_io(path: PathBuf, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Io { path, source },
        }
    }
}

/// Error writing a roster.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    /// A roster already exists at the path and was left untouched.
    #[error("{} already exists", path.display())]
    AlreadyExists {
        /// The roster path.
        path: PathBuf,
    },

    /// The roster may not be created.
    #[error("Permission denied! Can't write to {}", path.display())]
    PermissionDenied {
        /// The roster path.
        path: PathBuf,
    },

    /// Any other I/O failure.
    #[error("Unexpected error saving {}: {source}", path.display())]
    Io {
        /// The roster path.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
}

impl WriteError {
    fn from_io(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::AlreadyExists => Self::AlreadyExists { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Io { path, source },
        }
    }
}
