use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::DepartmentKey;

/// Configuration for roster storage.
///
/// Controls where roster files live and how their names are formed. With the
/// defaults a department keyed `sales` is stored at
/// `data/employees_sales.txt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// The directory roster files are stored in.
    ///
    /// Relative paths are resolved against the working directory.
    pub data_dir: PathBuf,

    /// Prepended to the department key to form a file name.
    file_prefix: String,

    /// File extension, without the leading dot.
    extension: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            file_prefix: default_file_prefix(),
            extension: default_extension(),
        }
    }
}

impl Config {
    /// The default configuration with rosters stored under `data_dir`.
    #[must_use]
    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            ..Self::default()
        }
    }

    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads the configuration if the file exists, otherwise returns the
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("No config file at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Returns the file name prefix.
    #[must_use]
    pub fn file_prefix(&self) -> &str {
        &self.file_prefix
    }

    /// Returns the file extension.
    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Builds the storage path for a department key.
    ///
    /// This performs no I/O.
    #[must_use]
    pub fn roster_path(&self, key: &DepartmentKey) -> PathBuf {
        self.data_dir
            .join(format!("{}{key}.{}", self.file_prefix, self.extension))
    }
}

/// Error loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        /// The config file path.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The file was not valid TOML for this configuration.
    #[error("Failed to parse config file {}: {source}", path.display())]
    Parse {
        /// The config file path.
        path: PathBuf,
        /// The underlying TOML error.
        source: toml::de::Error,
    },
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_file_prefix() -> String {
    "employees_".to_string()
}

fn default_extension() -> String {
    "txt".to_string()
}

/// The serialized versions of the configuration.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_data_dir")]
        data_dir: PathBuf,

        #[serde(default = "default_file_prefix")]
        file_prefix: String,

        #[serde(default = "default_extension")]
        extension: String,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                data_dir,
                file_prefix,
                extension,
            } => Self {
                data_dir,
                file_prefix,
                extension,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            data_dir: config.data_dir,
            file_prefix: config.file_prefix,
            extension: config.extension,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn default_path_template() {
        let config = Config::default();
        let path = config.roster_path(&DepartmentKey::derive("Human Resources"));
        assert_eq!(path, Path::new("data/employees_human_resources.txt"));
    }

    #[test]
    fn with_data_dir_keeps_default_file_names() {
        let config = Config::with_data_dir(PathBuf::from("elsewhere"));
        assert_eq!(config.file_prefix(), "employees_");
        assert_eq!(config.extension(), "txt");
        assert_eq!(
            config.roster_path(&DepartmentKey::derive("Sales")),
            Path::new("elsewhere/employees_sales.txt")
        );
    }

    #[test]
    fn load_reads_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            b"_version = \"1\"\ndata_dir = \"rosters\"\nfile_prefix = \"dept_\"\nextension = \"csv\"\n",
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.data_dir, Path::new("rosters"));
        assert_eq!(config.file_prefix(), "dept_");
        assert_eq!(config.extension(), "csv");
        assert_eq!(
            config.roster_path(&DepartmentKey::derive("Sales")),
            Path::new("rosters/dept_sales.csv")
        );
    }

    #[test]
    fn load_missing_file_returns_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.toml");

        let error = Config::load(&missing).unwrap_err();
        assert!(matches!(error, ConfigError::Read { .. }));
        assert!(error.to_string().starts_with("Failed to read config file"));
    }

    #[test]
    fn load_or_default_tolerates_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("roster.toml");

        assert_eq!(Config::load_or_default(&missing).unwrap(), Config::default());
    }

    #[test]
    fn load_invalid_toml_returns_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"_version = \"1\"\ndata_dir = 3\n").unwrap();

        let error = Config::load(file.path()).unwrap_err();
        assert!(matches!(error, ConfigError::Parse { .. }));
    }

    #[test]
    fn empty_file_returns_default() {
        let expected = Config::default();
        let actual: Config = toml::from_str(r#"_version = "1""#).unwrap();
        assert_eq!(actual, expected);
    }
}
