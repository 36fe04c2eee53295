//! # EventDesk Core
//!
//! Record store for university events and the accounts allowed to manage
//! them, persisted as flat text files.
//!
//! This crate provides:
//! - [`RecordStore`], the single owner of all events and accounts
//! - [`PersistenceGateway`], which moves whole collections to and from disk,
//!   exports CSV and takes daily backups
//! - [`AuthGate`], a plaintext username/password check
//! - Search, status and summary helpers for front ends
//!
//! ## Design Principles
//!
//! - One store per process, created once and passed by reference
//! - Every mutation rewrites both data files before returning
//! - Storage failures are logged and reported, never fatal
//! - Malformed lines in a data file are skipped, never fatal
//!
//! ## Example
//!
//! ```rust
//! use eventdesk_core::{Config, EventDraft, ParticipantKind, RecordStore};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let mut store = RecordStore::open(Config::new().data_dir(dir.path()).seed_defaults(false));
//!
//! let draft = EventDraft::parse("Hackathon", "05/04/2025", "Lab 3", "CS Society").unwrap();
//! let id = store.add_event(draft);
//! store.register_participant(id, "Jane Doe", ParticipantKind::Student).unwrap();
//!
//! let conflicts = store.get_conflicting_events(
//!     eventdesk_codec::parse_date("05/04/2025").unwrap(),
//!     "lab 3",
//! );
//! assert_eq!(conflicts.len(), 1);
//! assert!(dir.path().join("events.txt").exists());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod backup;
mod config;
mod dir;
mod error;
mod gateway;
mod model;
mod query;
mod seed;
mod session;
mod stats;
mod store;
mod types;

pub use backup::BackupReport;
pub use config::{Config, DEFAULT_DATA_DIR};
pub use dir::DataDir;
pub use error::{CoreError, CoreResult};
pub use gateway::PersistenceGateway;
pub use model::{Event, EventDraft, ParticipantKind, User};
pub use query::{EventFilter, EventStatus};
pub use seed::{default_users, sample_events, DEFAULT_USERS};
pub use session::{AuthGate, AuthenticatedUser};
pub use stats::EventSummary;
pub use store::RecordStore;
pub use types::EventId;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
