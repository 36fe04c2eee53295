//! In-memory storage backend for testing.

use crate::backend::StorageBackend;
use crate::error::{StorageError, StorageResult};
use parking_lot::RwLock;
use std::sync::Arc;

/// An in-memory storage backend.
///
/// This backend keeps its blob in memory and is suitable for:
/// - Unit tests
/// - Integration tests
/// - Stores that don't need persistence
///
/// Clones share the same blob, so a test can keep a handle and inspect
/// what a store wrote through its own copy.
///
/// # Example
///
/// ```rust
/// use eventdesk_storage::{StorageBackend, InMemoryBackend};
///
/// let mut backend = InMemoryBackend::new();
/// let observer = backend.clone();
/// backend.write_all(b"test data").unwrap();
/// assert_eq!(observer.data(), Some(b"test data".to_vec()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryBackend {
    data: Arc<RwLock<Option<Vec<u8>>>>,
}

impl InMemoryBackend {
    /// Creates a backend with no blob (as if the file did not exist).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend holding pre-existing data.
    ///
    /// Useful for testing load paths.
    #[must_use]
    pub fn with_data(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: Arc::new(RwLock::new(Some(data.into()))),
        }
    }

    /// Returns a copy of the blob, or `None` if it was never created.
    #[must_use]
    pub fn data(&self) -> Option<Vec<u8>> {
        self.data.read().clone()
    }

    /// Returns the blob as text, or `None` if absent or not UTF-8.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        self.data().and_then(|bytes| String::from_utf8(bytes).ok())
    }

    /// Removes the blob entirely.
    pub fn clear(&mut self) {
        *self.data.write() = None;
    }
}

impl StorageBackend for InMemoryBackend {
    fn location(&self) -> String {
        "<memory>".to_string()
    }

    fn exists(&self) -> bool {
        self.data.read().is_some()
    }

    fn create(&mut self) -> StorageResult<()> {
        let mut data = self.data.write();
        if data.is_none() {
            *data = Some(Vec::new());
        }
        Ok(())
    }

    fn read_all(&self) -> StorageResult<Vec<u8>> {
        self.data.read().clone().ok_or_else(|| StorageError::NotFound {
            location: self.location(),
        })
    }

    fn write_all(&mut self, data: &[u8]) -> StorageResult<()> {
        *self.data.write() = Some(data.to_vec());
        Ok(())
    }

    fn size(&self) -> StorageResult<u64> {
        self.data
            .read()
            .as_ref()
            .map(|d| d.len() as u64)
            .ok_or_else(|| StorageError::NotFound {
                location: self.location(),
            })
    }
}
