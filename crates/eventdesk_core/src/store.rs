//! The record store.
//!
//! [`RecordStore`] owns every event and account for the life of the process
//! and is the only thing that mutates them. Each mutating call rewrites both
//! data files before it returns, so the process can exit at any point
//! without losing acknowledged changes.
//!
//! ## Ids
//!
//! Event ids come from a per-store counter that starts at 1 and only moves
//! forward. Removing an event never frees its id. The ids written to disk
//! are informational: on startup every loaded event is given a fresh id in
//! file order.
//!
//! ## Flush failures
//!
//! A failed flush does not roll back the in-memory change. The error is
//! logged, returned from [`RecordStore::save_data`] and remembered in
//! [`RecordStore::last_flush_error`] until the next successful flush.

use crate::backup::BackupReport;
use crate::config::Config;
use crate::error::{CoreError, CoreResult};
use crate::gateway::PersistenceGateway;
use crate::model::{Event, EventDraft, ParticipantKind, User};
use crate::query::EventFilter;
use crate::seed::{default_users, sample_events};
use crate::stats::EventSummary;
use crate::types::EventId;
use chrono::NaiveDate;
use eventdesk_codec::{EventRecord, UserRecord};
use eventdesk_storage::InMemoryBackend;
use std::path::Path;
use tracing::{debug, info, warn};

/// In-memory events and accounts, mirrored to disk on every change.
///
/// # Example
///
/// ```rust
/// use eventdesk_core::{Config, EventDraft, RecordStore};
///
/// let mut store = RecordStore::in_memory(Config::default());
/// assert!(store.authenticate("admin", "admin123"));
///
/// let draft = EventDraft::parse("Career Fair", "10/03/2025", "Main Hall", "Careers Office").unwrap();
/// let id = store.add_event(draft);
/// assert_eq!(store.get_event(id).unwrap().name(), "Career Fair");
///
/// assert!(store.remove_event(id));
/// assert!(!store.remove_event(id));
/// ```
pub struct RecordStore {
    gateway: PersistenceGateway,
    events: Vec<Event>,
    users: Vec<User>,
    next_id: EventId,
    last_flush_error: Option<String>,
}

impl RecordStore {
    /// Opens the store backed by the data files described by `config`.
    ///
    /// Startup never fails: storage problems are logged and the store comes
    /// up with whatever could be read.
    #[must_use]
    pub fn open(config: Config) -> Self {
        Self::with_gateway(PersistenceGateway::open(config))
    }

    /// Opens a store whose data files live in memory.
    ///
    /// Backups are still written under `config.data_dir`.
    #[must_use]
    pub fn in_memory(config: Config) -> Self {
        let gateway = PersistenceGateway::with_backends(
            config,
            Box::new(InMemoryBackend::new()),
            Box::new(InMemoryBackend::new()),
        );
        Self::with_gateway(gateway)
    }

    /// Opens a store over an existing gateway.
    ///
    /// Loads both files. When loading succeeded but produced no events (or
    /// no accounts), the sample events (or default accounts) are inserted
    /// and written back, unless `seed_defaults` is off. Only the seeded file
    /// is written at startup, so a file that failed to load is never
    /// overwritten.
    #[must_use]
    pub fn with_gateway(mut gateway: PersistenceGateway) -> Self {
        // already logged by the gateway
        let _ = gateway.initialize();

        let seed = gateway.config().seed_defaults;
        let loaded_events = gateway.load_events();
        let loaded_users = gateway.load_users();

        let mut store = Self {
            gateway,
            events: Vec::new(),
            users: Vec::new(),
            next_id: EventId::FIRST,
            last_flush_error: None,
        };
        let mut seeded_events = false;
        let mut seeded_users = false;

        if let Ok(records) = loaded_events {
            for record in records {
                store.insert_record(record);
            }
            if seed && store.events.is_empty() {
                info!("no events stored, inserting sample events");
                for record in sample_events() {
                    store.insert_record(record);
                }
                seeded_events = true;
            }
        }

        if let Ok(records) = loaded_users {
            store.users = records.into_iter().map(User::from).collect();
            if seed && store.users.is_empty() {
                info!("no accounts stored, inserting default accounts");
                store.users = default_users().into_iter().map(User::from).collect();
                seeded_users = true;
            }
        }

        if seeded_events || seeded_users {
            let _ = store.write_files(seeded_events, seeded_users);
        }

        info!(
            events = store.events.len(),
            users = store.users.len(),
            "record store ready"
        );
        store
    }

    fn allocate_id(&mut self) -> EventId {
        let id = self.next_id;
        self.next_id = id.next();
        id
    }

    fn insert_record(&mut self, record: EventRecord) {
        let id = self.allocate_id();
        self.events.push(Event::from_record(id, record));
    }

    fn position(&self, id: EventId) -> Option<usize> {
        self.events.iter().position(|e| e.id() == id)
    }

    fn event_mut(&mut self, id: EventId) -> CoreResult<&mut Event> {
        self.events
            .iter_mut()
            .find(|e| e.id() == id)
            .ok_or_else(|| CoreError::event_not_found(id))
    }

    /// Flushes after a mutation. Failures are logged and recorded.
    fn flush(&mut self) {
        let _ = self.save_data();
    }

    /// Returns the gateway.
    #[must_use]
    pub fn gateway(&self) -> &PersistenceGateway {
        &self.gateway
    }

    /// Returns true if an account matches both fields exactly.
    #[must_use]
    pub fn authenticate(&self, username: &str, password: &str) -> bool {
        self.users.iter().any(|u| u.matches(username, password))
    }

    /// Number of accounts.
    #[must_use]
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Number of events.
    #[must_use]
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Adds an event with no participants and returns its new id.
    pub fn add_event(&mut self, draft: EventDraft) -> EventId {
        let id = self.allocate_id();
        self.events.push(Event::from_draft(id, draft));
        debug!(%id, "event added");
        self.flush();
        id
    }

    /// Removes an event.
    ///
    /// Returns false, without touching storage, if no such event exists.
    pub fn remove_event(&mut self, id: EventId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        self.events.remove(index);
        debug!(%id, "event removed");
        self.flush();
        true
    }

    /// Returns a copy of every event in insertion order.
    #[must_use]
    pub fn get_all_events(&self) -> Vec<Event> {
        self.events.clone()
    }

    /// Returns a copy of one event.
    #[must_use]
    pub fn get_event(&self, id: EventId) -> Option<Event> {
        self.events.iter().find(|e| e.id() == id).cloned()
    }

    /// Returns events on `date` at `venue`, comparing venues case-insensitively.
    ///
    /// Conflicts are advisory: the store never refuses an event because of
    /// them.
    #[must_use]
    pub fn get_conflicting_events(&self, date: NaiveDate, venue: &str) -> Vec<Event> {
        self.events
            .iter()
            .filter(|e| e.conflicts_with(date, venue))
            .cloned()
            .collect()
    }

    /// Replaces the name, date, venue and organizer of an event.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EventNotFound`] if no such event exists.
    pub fn update_event(&mut self, id: EventId, draft: EventDraft) -> CoreResult<()> {
        self.event_mut(id)?.apply(draft);
        debug!(%id, "event updated");
        self.flush();
        Ok(())
    }

    /// Appends a free-form participant label.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EventNotFound`] or a validation error. The store
    /// is unchanged on error.
    pub fn add_participant(&mut self, id: EventId, label: &str) -> CoreResult<()> {
        self.event_mut(id)?.add_participant(label)?;
        debug!(%id, "participant added");
        self.flush();
        Ok(())
    }

    /// Registers a student or staff member for an event.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EventNotFound`] or a validation error. The store
    /// is unchanged on error.
    pub fn register_participant(
        &mut self,
        id: EventId,
        name: &str,
        kind: ParticipantKind,
    ) -> CoreResult<()> {
        self.event_mut(id)?.register(name, kind)?;
        debug!(%id, %kind, "participant registered");
        self.flush();
        Ok(())
    }

    /// Returns copies of the events matching `filter` on day `today`.
    #[must_use]
    pub fn search(&self, filter: &EventFilter, today: NaiveDate) -> Vec<Event> {
        self.events
            .iter()
            .filter(|e| filter.matches(e, today))
            .cloned()
            .collect()
    }

    /// Returns events on or after `today`, earliest first.
    #[must_use]
    pub fn upcoming_events(&self, today: NaiveDate) -> Vec<Event> {
        let mut events: Vec<Event> = self
            .events
            .iter()
            .filter(|e| e.date() >= today)
            .cloned()
            .collect();
        events.sort_by_key(Event::date);
        events
    }

    /// Computes dashboard figures as seen on `today`.
    #[must_use]
    pub fn summary(&self, today: NaiveDate) -> EventSummary {
        EventSummary::from_events(&self.events, today)
    }

    /// Rewrites both data files from memory.
    ///
    /// Both files are attempted even if the first fails.
    ///
    /// # Errors
    ///
    /// Returns the first storage error. It has already been logged.
    pub fn save_data(&mut self) -> CoreResult<()> {
        self.write_files(true, true)
    }

    fn write_files(&mut self, events: bool, users: bool) -> CoreResult<()> {
        let mut result = Ok(());
        if events {
            let records: Vec<EventRecord> = self.events.iter().map(Event::to_record).collect();
            result = result.and(self.gateway.save_events(&records));
        }
        if users {
            let records: Vec<UserRecord> = self.users.iter().map(User::to_record).collect();
            result = result.and(self.gateway.save_users(&records));
        }

        match &result {
            Ok(()) => {
                debug!(events, users, "store flushed");
                self.last_flush_error = None;
            }
            Err(err) => {
                warn!(error = %err, "store flush incomplete, memory and disk may differ");
                self.last_flush_error = Some(err.to_string());
            }
        }
        result
    }

    /// Returns the error message of the most recent flush, or `None` if it
    /// succeeded.
    #[must_use]
    pub fn last_flush_error(&self) -> Option<&str> {
        self.last_flush_error.as_deref()
    }

    /// Writes every event as CSV to `path`.
    ///
    /// # Errors
    ///
    /// Returns the storage error if the file cannot be written.
    pub fn export_csv(&self, path: &Path) -> CoreResult<()> {
        let events: Vec<EventRecord> = self.events.iter().map(Event::to_record).collect();
        self.gateway.export_csv(&events, path)
    }

    /// Snapshots both data files under today's date.
    ///
    /// # Errors
    ///
    /// Returns the storage error if a snapshot cannot be written.
    pub fn create_backup(&self) -> CoreResult<BackupReport> {
        self.gateway.create_backup()
    }

    /// Snapshots both data files under `date`.
    ///
    /// # Errors
    ///
    /// Returns the storage error if a snapshot cannot be written.
    pub fn create_backup_on(&self, date: NaiveDate) -> CoreResult<BackupReport> {
        self.gateway.create_backup_on(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::EventStatus;

    fn empty_store() -> RecordStore {
        RecordStore::in_memory(Config::default().seed_defaults(false))
    }

    fn draft(name: &str, date: &str, venue: &str) -> EventDraft {
        EventDraft::parse(name, date, venue, "Dr. Smith").unwrap()
    }

    fn day(s: &str) -> NaiveDate {
        eventdesk_codec::parse_date(s).unwrap()
    }

    #[test]
    fn seeded_store_has_samples_and_defaults() {
        let store = RecordStore::in_memory(Config::default());

        let events = store.get_all_events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].id(), EventId::new(1));
        assert_eq!(events[1].id(), EventId::new(2));
        assert_eq!(events[1].name(), "Cultural Show");
        assert!(store.authenticate("admin", "admin123"));
        assert!(store.authenticate("groupfive", "BIT1201"));
        assert!(store.last_flush_error().is_none());
    }

    #[test]
    fn ids_are_never_reused() {
        let mut store = empty_store();
        let a = store.add_event(draft("A", "01/01/2025", "Hall"));
        let b = store.add_event(draft("B", "01/01/2025", "Hall"));
        assert!(store.remove_event(b));
        let c = store.add_event(draft("C", "01/01/2025", "Hall"));

        assert_eq!(a, EventId::new(1));
        assert_eq!(b, EventId::new(2));
        assert_eq!(c, EventId::new(3));
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut store = empty_store();
        store.add_event(draft("A", "01/01/2025", "Hall"));
        assert!(!store.remove_event(EventId::new(99)));
        assert_eq!(store.event_count(), 1);
    }

    #[test]
    fn returned_events_are_copies() {
        let mut store = empty_store();
        let id = store.add_event(draft("A", "01/01/2025", "Hall"));

        let mut copy = store.get_event(id).unwrap();
        copy.add_participant("Guest").unwrap();
        assert_eq!(store.get_event(id).unwrap().participant_count(), 0);

        let mut all = store.get_all_events();
        all.clear();
        assert_eq!(store.event_count(), 1);
    }

    #[test]
    fn conflicts_match_date_and_venue_ignoring_case() {
        let mut store = empty_store();
        let id = store.add_event(draft("A", "15/12/2024", "Room 101"));
        store.add_event(draft("B", "16/12/2024", "Room 101"));
        store.add_event(draft("C", "15/12/2024", "Room 102"));

        let conflicts = store.get_conflicting_events(day("15/12/2024"), "room 101");
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].id(), id);
    }

    #[test]
    fn conflicting_event_can_still_be_added() {
        let mut store = empty_store();
        store.add_event(draft("A", "15/12/2024", "Room 101"));
        store.add_event(draft("B", "15/12/2024", "ROOM 101"));
        assert_eq!(store.event_count(), 2);
    }

    #[test]
    fn update_and_register() {
        let mut store = empty_store();
        let id = store.add_event(draft("A", "15/12/2024", "Room 101"));

        store
            .update_event(id, draft("A2", "16/12/2024", "Room 102"))
            .unwrap();
        store
            .register_participant(id, "Jane Smith", ParticipantKind::Staff)
            .unwrap();
        store.add_participant(id, "Guest").unwrap();

        let event = store.get_event(id).unwrap();
        assert_eq!(event.name(), "A2");
        assert_eq!(event.venue(), "Room 102");
        assert_eq!(event.participants(), ["Jane Smith - Staff", "Guest"]);
    }

    #[test]
    fn update_missing_event_is_not_found() {
        let mut store = empty_store();
        let err = store
            .update_event(EventId::new(5), draft("A", "15/12/2024", "Hall"))
            .unwrap_err();
        assert!(matches!(err, CoreError::EventNotFound { .. }));

        let err = store
            .register_participant(EventId::new(5), "Jane", ParticipantKind::Student)
            .unwrap_err();
        assert!(matches!(err, CoreError::EventNotFound { .. }));
    }

    #[test]
    fn empty_participant_name_rejected() {
        let mut store = empty_store();
        let id = store.add_event(draft("A", "15/12/2024", "Hall"));

        let err = store
            .register_participant(id, "   ", ParticipantKind::Student)
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(store.get_event(id).unwrap().participant_count(), 0);
    }

    #[test]
    fn search_and_upcoming() {
        let mut store = empty_store();
        store.add_event(draft("Late Talk", "20/12/2024", "Hall"));
        store.add_event(draft("Past Talk", "01/12/2024", "Hall"));
        store.add_event(draft("Workshop", "16/12/2024", "Lab"));
        let today = day("15/12/2024");

        let talks = store.search(&EventFilter::new().query("talk"), today);
        assert_eq!(talks.len(), 2);

        let completed = store.search(&EventFilter::new().status(EventStatus::Completed), today);
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].name(), "Past Talk");

        let upcoming: Vec<String> = store
            .upcoming_events(today)
            .iter()
            .map(|e| e.name().to_string())
            .collect();
        assert_eq!(upcoming, vec!["Workshop", "Late Talk"]);

        let summary = store.summary(today);
        assert_eq!(summary.total_events, 3);
        assert_eq!(summary.upcoming_events, 2);
    }

    #[test]
    fn mutations_are_flushed() {
        let events = InMemoryBackend::new();
        let users = InMemoryBackend::new();
        let gateway = PersistenceGateway::with_backends(
            Config::default().seed_defaults(false),
            Box::new(events.clone()),
            Box::new(users.clone()),
        );
        let mut store = RecordStore::with_gateway(gateway);

        store.add_event(draft("A", "15/12/2024", "Hall"));
        assert_eq!(events.text().unwrap(), "1|A|15/12/2024|Hall|Dr. Smith|\n");
    }

    #[test]
    fn reload_renumbers_ids() {
        let events = InMemoryBackend::with_data(
            "7|A|15/12/2024|Hall|Dr. Smith|\n3|B|16/12/2024|Hall|Dr. Smith|x - Staff\n",
        );
        let gateway = PersistenceGateway::with_backends(
            Config::default(),
            Box::new(events),
            Box::new(InMemoryBackend::new()),
        );
        let store = RecordStore::with_gateway(gateway);

        let loaded = store.get_all_events();
        assert_eq!(loaded[0].id(), EventId::new(1));
        assert_eq!(loaded[1].id(), EventId::new(2));
        assert_eq!(loaded[1].participants(), ["x - Staff"]);
    }
}
