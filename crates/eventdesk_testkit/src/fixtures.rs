//! Test fixtures and store helpers.
//!
//! Provides convenience functions for setting up test stores and common
//! test scenarios.

use chrono::NaiveDate;
use eventdesk_core::{Config, EventDraft, PersistenceGateway, RecordStore};
use eventdesk_storage::InMemoryBackend;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A record store with automatic cleanup.
///
/// Every variant gets its own temporary data directory, so backups and
/// exports never land in the working directory.
pub struct TestStore {
    /// The store instance.
    pub store: RecordStore,
    /// In-memory events file, if memory-backed.
    pub events: Option<InMemoryBackend>,
    /// In-memory users file, if memory-backed.
    pub users: Option<InMemoryBackend>,
    temp_dir: TempDir,
}

impl TestStore {
    /// Creates a memory-backed store with the sample events and default
    /// accounts.
    pub fn memory() -> Self {
        Self::memory_with(Config::default(), "", "")
    }

    /// Creates a memory-backed store with nothing seeded.
    pub fn empty() -> Self {
        Self::memory_with(Config::default().seed_defaults(false), "", "")
    }

    /// Creates a memory-backed store whose files start with the given text.
    ///
    /// `config.data_dir` is replaced by a temporary directory.
    pub fn memory_with(config: Config, events_text: &str, users_text: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let events = InMemoryBackend::with_data(events_text);
        let users = InMemoryBackend::with_data(users_text);

        let gateway = PersistenceGateway::with_backends(
            config.data_dir(temp_dir.path()),
            Box::new(events.clone()),
            Box::new(users.clone()),
        );

        Self {
            store: RecordStore::with_gateway(gateway),
            events: Some(events),
            users: Some(users),
            temp_dir,
        }
    }

    /// Creates a file-backed store in a fresh temporary directory.
    pub fn file() -> Self {
        Self::file_with(Config::default())
    }

    /// Creates a file-backed store; `config.data_dir` is replaced by a
    /// temporary directory.
    pub fn file_with(config: Config) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let store = RecordStore::open(config.data_dir(temp_dir.path()));
        Self {
            store,
            events: None,
            users: None,
            temp_dir,
        }
    }

    /// Reopens a file-backed store from the same directory, as a restart
    /// would.
    pub fn reopen(self) -> Self {
        let config = self.store.gateway().config().clone();
        let temp_dir = self.temp_dir;
        drop(self.store);
        Self {
            store: RecordStore::open(config),
            events: None,
            users: None,
            temp_dir,
        }
    }

    /// Returns the data directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Returns the path of `name` inside the data directory.
    pub fn file_path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    /// Returns the current events file text.
    pub fn events_text(&self) -> String {
        match &self.events {
            Some(backend) => backend.text().unwrap_or_default(),
            None => fs::read_to_string(self.file_path("events.txt")).unwrap_or_default(),
        }
    }

    /// Returns the current users file text.
    pub fn users_text(&self) -> String {
        match &self.users {
            Some(backend) => backend.text().unwrap_or_default(),
            None => fs::read_to_string(self.file_path("users.txt")).unwrap_or_default(),
        }
    }
}

impl std::ops::Deref for TestStore {
    type Target = RecordStore;

    fn deref(&self) -> &Self::Target {
        &self.store
    }
}

impl std::ops::DerefMut for TestStore {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.store
    }
}

/// Runs a test with an empty memory-backed store.
///
/// # Example
///
/// ```rust
/// use eventdesk_testkit::{draft, with_temp_store};
///
/// with_temp_store(|store| {
///     let id = store.add_event(draft("Open Day", "01/03/2025", "Main Hall"));
///     assert!(store.get_event(id).is_some());
/// });
/// ```
pub fn with_temp_store<F, R>(f: F) -> R
where
    F: FnOnce(&mut RecordStore) -> R,
{
    let mut test_store = TestStore::empty();
    f(&mut test_store.store)
}

/// Runs a test with a file-backed store.
pub fn with_file_store<F, R>(f: F) -> R
where
    F: FnOnce(&mut RecordStore, &Path) -> R,
{
    let mut test_store = TestStore::file();
    let path = test_store.path().to_path_buf();
    f(&mut test_store.store, &path)
}

/// Builds a draft with organizer "Dr. Smith". Panics on invalid input.
pub fn draft(name: &str, date: &str, venue: &str) -> EventDraft {
    EventDraft::parse(name, date, venue, "Dr. Smith").expect("invalid test draft")
}

/// Builds a date from `dd/MM/yyyy`. Panics on invalid input.
pub fn date(text: &str) -> NaiveDate {
    eventdesk_codec::parse_date(text).expect("invalid test date")
}

/// Test scenario helpers.
pub mod scenarios {
    use super::*;

    /// Creates an empty store holding `count` events on consecutive days of
    /// January 2025, alternating between two venues.
    pub fn populated_store(count: usize) -> TestStore {
        let mut test_store = TestStore::empty();
        let start = date("01/01/2025");

        for (i, day) in start.iter_days().take(count).enumerate() {
            let venue = if i % 2 == 0 { "Main Hall" } else { "Room 101" };
            let draft = EventDraft::new(&format!("Event {i}"), day, venue, "Dr. Smith")
                .expect("Failed to build draft");
            test_store.add_event(draft);
        }

        test_store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_is_seeded() {
        let test_store = TestStore::memory();
        assert_eq!(test_store.event_count(), 2);
        assert!(test_store.events_text().contains("AI Workshop"));
    }

    #[test]
    fn file_store_survives_reopen() {
        let mut test_store = TestStore::file_with(Config::default().seed_defaults(false));
        test_store.add_event(draft("Open Day", "01/03/2025", "Main Hall"));

        let reopened = test_store.reopen();
        assert_eq!(reopened.event_count(), 1);
        assert!(reopened.events_text().starts_with("1|Open Day|01/03/2025|"));
    }

    #[test]
    fn populated_scenario() {
        let test_store = scenarios::populated_store(5);
        assert_eq!(test_store.event_count(), 5);
        assert_eq!(
            test_store
                .get_conflicting_events(date("03/01/2025"), "main hall")
                .len(),
            1
        );
    }
}
