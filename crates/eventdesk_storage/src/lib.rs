//! # EventDesk Storage
//!
//! Storage backend trait and implementations for EventDesk.
//!
//! Backends are **opaque whole-file stores**: they hold one blob of bytes
//! that is always read completely and always replaced completely. They know
//! nothing about the line format written into them.
//!
//! ## Design Principles
//!
//! - One backend per data file (events, users, backup snapshots)
//! - Writes replace the entire contents; there is no append mode
//! - Must be `Send + Sync`
//! - EventDesk owns all format interpretation
//!
//! ## Available Backends
//!
//! - [`InMemoryBackend`] - For testing and ephemeral storage
//! - [`FileBackend`] - For persistent storage using OS file APIs
//!
//! ## Example
//!
//! ```rust
//! use eventdesk_storage::{StorageBackend, InMemoryBackend};
//!
//! let mut backend = InMemoryBackend::new();
//! backend.write_all(b"admin|admin123\n").unwrap();
//! assert_eq!(backend.read_all().unwrap(), b"admin|admin123\n");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod error;
mod file;
mod memory;

pub use backend::StorageBackend;
pub use error::{StorageError, StorageResult};
pub use file::FileBackend;
pub use memory::InMemoryBackend;
