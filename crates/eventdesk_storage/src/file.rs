//! File-based storage backend for persistent storage.

use crate::backend::StorageBackend;
use crate::error::{StorageError, StorageResult};
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

/// A file-based storage backend.
///
/// The backend is bound to a path, not to an open handle: every operation
/// opens the file, does its work and closes it again. A backend can
/// therefore be constructed before its directory exists, and a file that
/// could not be created at startup is retried on the next write.
///
/// # Durability
///
/// `write_all` truncates the file, writes the new contents and calls
/// `File::sync_all()`. A crash between truncate and write leaves a short
/// file behind.
///
/// # Example
///
/// ```no_run
/// use eventdesk_storage::{StorageBackend, FileBackend};
/// use std::path::Path;
///
/// let mut backend = FileBackend::new(Path::new("data/events.txt"));
/// backend.create().unwrap();
/// backend.write_all(b"1|AI Workshop|15/12/2024|Room 101|Dr. Smith|\n").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Creates a backend for the file at `path`.
    ///
    /// Nothing is touched on disk until an operation runs.
    #[must_use]
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Creates a backend and makes sure the file and its parent
    /// directories exist.
    ///
    /// # Errors
    ///
    /// Returns an error if directories or the file cannot be created.
    pub fn open_with_create_dirs(path: &Path) -> StorageResult<Self> {
        let mut backend = Self::new(path);
        backend.create()?;
        Ok(backend)
    }

    /// Returns the path to the underlying file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn not_found(&self) -> StorageError {
        StorageError::NotFound {
            location: self.location(),
        }
    }
}

impl StorageBackend for FileBackend {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn create(&mut self) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.path)?;

        Ok(())
    }

    fn read_all(&self) -> StorageResult<Vec<u8>> {
        let mut file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(self.not_found()),
            Err(e) => return Err(e.into()),
        };

        let mut buffer = Vec::new();
        file.read_to_end(&mut buffer)?;
        Ok(buffer)
    }

    fn write_all(&mut self, data: &[u8]) -> StorageResult<()> {
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;

        file.write_all(data)?;
        file.flush()?;
        file.sync_all()?;
        Ok(())
    }

    fn size(&self) -> StorageResult<u64> {
        match fs::metadata(&self.path) {
            Ok(meta) => Ok(meta.len()),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(self.not_found()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn file_create_new() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("events.txt");

        let mut backend = FileBackend::new(&path);
        assert!(!backend.exists());

        backend.create().unwrap();
        assert!(backend.exists());
        assert_eq!(backend.size().unwrap(), 0);
    }

    #[test]
    fn create_keeps_existing_contents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("users.txt");
        fs::write(&path, "admin|admin123\n").unwrap();

        let mut backend = FileBackend::new(&path);
        backend.create().unwrap();

        assert_eq!(backend.read_all().unwrap(), b"admin|admin123\n");
    }

    #[test]
    fn write_replaces_contents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("events.txt");

        let mut backend = FileBackend::open_with_create_dirs(&path).unwrap();
        backend.write_all(b"a much longer first version\n").unwrap();
        backend.write_all(b"short\n").unwrap();

        assert_eq!(backend.read_all().unwrap(), b"short\n");
        assert_eq!(backend.size().unwrap(), 6);
    }

    #[test]
    fn read_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let backend = FileBackend::new(&dir.path().join("missing.txt"));

        assert!(matches!(
            backend.read_all(),
            Err(StorageError::NotFound { .. })
        ));
        assert!(matches!(backend.size(), Err(StorageError::NotFound { .. })));
    }

    #[test]
    fn file_create_with_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("path").join("events.txt");

        let backend = FileBackend::open_with_create_dirs(&path).unwrap();
        assert!(path.exists());
        assert_eq!(backend.size().unwrap(), 0);
    }

    #[test]
    fn write_without_parent_dir_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent").join("events.txt");

        let mut backend = FileBackend::new(&path);
        assert!(matches!(backend.write_all(b"x"), Err(StorageError::Io(_))));
    }

    #[test]
    fn read_text_rejects_invalid_utf8() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("events.txt");
        fs::write(&path, [0xff, 0xfe, 0xfd]).unwrap();

        let backend = FileBackend::new(&path);
        assert!(matches!(
            backend.read_text(),
            Err(StorageError::InvalidText { .. })
        ));
    }

    #[test]
    fn file_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("events.txt");

        let backend = FileBackend::new(&path);
        assert_eq!(backend.path(), path);
        assert_eq!(backend.location(), path.display().to_string());
    }
}
