//! Store configuration.

use std::path::PathBuf;

/// Default data directory, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = "eventmanagement_data";

/// Configuration for opening a record store.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the data files.
    pub data_dir: PathBuf,

    /// File name of the events file inside `data_dir`.
    pub events_file: String,

    /// File name of the users file inside `data_dir`.
    pub users_file: String,

    /// Name of the backup subdirectory inside `data_dir`.
    pub backups_dir: String,

    /// Whether to insert sample events and default accounts into an empty store.
    pub seed_defaults: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            events_file: "events.txt".to_string(),
            users_file: "users.txt".to_string(),
            backups_dir: "backups".to_string(),
            seed_defaults: true,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the data directory.
    #[must_use]
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_dir = path.into();
        self
    }

    /// Sets the events file name.
    #[must_use]
    pub fn events_file(mut self, name: impl Into<String>) -> Self {
        self.events_file = name.into();
        self
    }

    /// Sets the users file name.
    #[must_use]
    pub fn users_file(mut self, name: impl Into<String>) -> Self {
        self.users_file = name.into();
        self
    }

    /// Sets the backup subdirectory name.
    #[must_use]
    pub fn backups_dir(mut self, name: impl Into<String>) -> Self {
        self.backups_dir = name.into();
        self
    }

    /// Sets whether an empty store is seeded with defaults.
    #[must_use]
    pub const fn seed_defaults(mut self, value: bool) -> Self {
        self.seed_defaults = value;
        self
    }
}
