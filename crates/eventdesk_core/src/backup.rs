//! Daily snapshots of the data files.
//!
//! A snapshot is a byte-for-byte copy of a data file placed in the backups
//! directory under a name carrying the day stamp (see [`crate::DataDir`]).
//! Copies overwrite, so taking several snapshots on one day leaves only the
//! last.

use crate::error::CoreResult;
use chrono::NaiveDate;
use eventdesk_storage::{FileBackend, StorageBackend};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Files written by one backup run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackupReport {
    /// Day the snapshot is filed under.
    pub date: NaiveDate,
    /// Snapshot files that were written.
    pub files: Vec<PathBuf>,
}

impl BackupReport {
    /// Returns true if nothing was copied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Copies the contents of `source` to `target`.
///
/// Returns `Ok(false)` without touching `target` when `source` does not
/// exist yet.
pub(crate) fn copy_snapshot(source: &dyn StorageBackend, target: &Path) -> CoreResult<bool> {
    if !source.exists() {
        return Ok(false);
    }
    let data = source.read_all()?;
    let mut snapshot = FileBackend::open_with_create_dirs(target)?;
    snapshot.write_all(&data)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventdesk_storage::InMemoryBackend;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn copies_and_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("backups/events_20241215.txt");
        let source = InMemoryBackend::with_data("1|A|15/12/2024|R|O|\n");

        assert!(copy_snapshot(&source, &target).unwrap());
        assert_eq!(fs::read_to_string(&target).unwrap(), "1|A|15/12/2024|R|O|\n");
    }

    #[test]
    fn missing_source_is_skipped() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("backups/users_20241215.txt");

        assert!(!copy_snapshot(&InMemoryBackend::new(), &target).unwrap());
        assert!(!target.exists());
    }

    #[test]
    fn second_copy_overwrites() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("snap.txt");

        copy_snapshot(&InMemoryBackend::with_data("first\nsecond\n"), &target).unwrap();
        copy_snapshot(&InMemoryBackend::with_data("third\n"), &target).unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "third\n");
    }
}
