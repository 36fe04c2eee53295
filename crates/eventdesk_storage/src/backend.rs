//! Storage backend trait definition.

use crate::error::{StorageError, StorageResult};

/// A whole-file storage backend.
///
/// A backend stores exactly one blob. Reads return the entire blob and
/// writes replace it. EventDesk rewrites its data files completely on every
/// mutation, so there is no offset-based access.
///
/// # Invariants
///
/// - After `write_all(data)` succeeds, `read_all()` returns `data`
/// - `create` never truncates existing contents
/// - `size` is 0 for a blob that exists but is empty
///
/// # Implementors
///
/// - [`super::InMemoryBackend`] - For testing
/// - [`super::FileBackend`] - For persistent storage
pub trait StorageBackend: Send + Sync {
    /// Returns a human-readable location for logs (a path for files).
    fn location(&self) -> String;

    /// Returns true if the blob exists.
    fn exists(&self) -> bool;

    /// Creates an empty blob if none exists yet.
    ///
    /// Existing contents are left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the blob (or its parent directory) cannot be created.
    fn create(&mut self) -> StorageResult<()>;

    /// Reads the entire blob.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if the blob does not exist, or an
    /// I/O error if reading fails.
    fn read_all(&self) -> StorageResult<Vec<u8>>;

    /// Replaces the entire blob with `data`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails. A failed write may leave the
    /// blob truncated; there is no partial-write protection.
    fn write_all(&mut self, data: &[u8]) -> StorageResult<()>;

    /// Returns the current size of the blob in bytes.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if the blob does not exist.
    fn size(&self) -> StorageResult<u64>;

    /// Reads the entire blob as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::InvalidText`] if the bytes are not UTF-8.
    fn read_text(&self) -> StorageResult<String> {
        let bytes = self.read_all()?;
        String::from_utf8(bytes).map_err(|_| StorageError::InvalidText {
            location: self.location(),
        })
    }
}
