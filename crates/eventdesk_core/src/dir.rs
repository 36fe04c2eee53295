//! Data directory layout.
//!
//! ```text
//! <data_dir>/
//! ├─ events.txt                 # one event per line
//! ├─ users.txt                  # one account per line
//! └─ backups/
//!    ├─ events_<yyyyMMdd>.txt   # daily snapshot of events.txt
//!    └─ users_<yyyyMMdd>.txt    # daily snapshot of users.txt
//! ```
//!
//! Snapshots are keyed by calendar day only, so a second backup on the same
//! day replaces the first.

use crate::config::Config;
use crate::error::CoreResult;
use chrono::NaiveDate;
use eventdesk_codec::backup_stamp;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolves the paths of every file EventDesk keeps on disk.
///
/// `DataDir` only computes paths; it never creates anything. Creation is the
/// job of the storage backends, which create missing parent directories.
#[derive(Debug, Clone)]
pub struct DataDir {
    root: PathBuf,
    events_file: String,
    users_file: String,
    backups_dir: String,
}

impl DataDir {
    /// Builds the layout described by `config`.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            root: config.data_dir.clone(),
            events_file: config.events_file.clone(),
            users_file: config.users_file.clone(),
            backups_dir: config.backups_dir.clone(),
        }
    }

    /// Returns the data directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the path to the events file.
    #[must_use]
    pub fn events_path(&self) -> PathBuf {
        self.root.join(&self.events_file)
    }

    /// Returns the path to the users file.
    #[must_use]
    pub fn users_path(&self) -> PathBuf {
        self.root.join(&self.users_file)
    }

    /// Returns the path to the backups directory.
    #[must_use]
    pub fn backups_path(&self) -> PathBuf {
        self.root.join(&self.backups_dir)
    }

    /// Returns the snapshot path of the events file for `date`.
    #[must_use]
    pub fn events_backup_path(&self, date: NaiveDate) -> PathBuf {
        self.backups_path().join(snapshot_name(&self.events_file, date))
    }

    /// Returns the snapshot path of the users file for `date`.
    #[must_use]
    pub fn users_backup_path(&self, date: NaiveDate) -> PathBuf {
        self.backups_path().join(snapshot_name(&self.users_file, date))
    }

    /// Lists existing snapshot files, sorted by name.
    ///
    /// A missing backups directory yields an empty list.
    pub fn list_backups(&self) -> CoreResult<Vec<PathBuf>> {
        let dir = self.backups_path();
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut paths = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.is_file() {
                paths.push(path);
            }
        }
        paths.sort();
        Ok(paths)
    }
}

/// `events.txt` + 2024-12-15 -> `events_20241215.txt`
fn snapshot_name(file_name: &str, date: NaiveDate) -> String {
    let path = Path::new(file_name);
    let stem = path
        .file_stem()
        .map_or_else(|| file_name.to_string(), |s| s.to_string_lossy().into_owned());
    let stamp = backup_stamp(date);

    match path.extension() {
        Some(ext) => format!("{stem}_{stamp}.{}", ext.to_string_lossy()),
        None => format!("{stem}_{stamp}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 15).unwrap()
    }

    #[test]
    fn paths_are_correct() {
        let dir = DataDir::new(&Config::new().data_dir("data"));

        assert_eq!(dir.root(), Path::new("data"));
        assert_eq!(dir.events_path(), Path::new("data/events.txt"));
        assert_eq!(dir.users_path(), Path::new("data/users.txt"));
        assert_eq!(dir.backups_path(), Path::new("data/backups"));
    }

    #[test]
    fn backup_paths_carry_day_stamp() {
        let dir = DataDir::new(&Config::new().data_dir("data"));

        assert_eq!(
            dir.events_backup_path(day()),
            Path::new("data/backups/events_20241215.txt")
        );
        assert_eq!(
            dir.users_backup_path(day()),
            Path::new("data/backups/users_20241215.txt")
        );
    }

    #[test]
    fn snapshot_name_without_extension() {
        assert_eq!(snapshot_name("events", day()), "events_20241215");
    }

    #[test]
    fn list_backups_missing_dir_is_empty() {
        let temp = tempdir().unwrap();
        let dir = DataDir::new(&Config::new().data_dir(temp.path()));
        assert!(dir.list_backups().unwrap().is_empty());
    }

    #[test]
    fn list_backups_sorted() {
        let temp = tempdir().unwrap();
        let dir = DataDir::new(&Config::new().data_dir(temp.path()));
        fs::create_dir_all(dir.backups_path()).unwrap();
        fs::write(dir.users_backup_path(day()), "").unwrap();
        fs::write(dir.events_backup_path(day()), "").unwrap();

        let listed = dir.list_backups().unwrap();
        assert_eq!(
            listed,
            vec![dir.events_backup_path(day()), dir.users_backup_path(day())]
        );
    }
}
