//! Persistence gateway.
//!
//! The gateway is the only component that touches storage. It moves whole
//! collections between memory and the two data files, writes CSV exports
//! and takes daily backups.
//!
//! ## Failure policy
//!
//! Every operation returns a [`CoreResult`], and every failure is logged at
//! `error` level before it is returned. Callers that only want the
//! log-and-continue behaviour can drop the result.

use crate::backup::{copy_snapshot, BackupReport};
use crate::config::Config;
use crate::dir::DataDir;
use crate::error::CoreResult;
use crate::seed::default_users;
use chrono::{Local, NaiveDate};
use eventdesk_codec::{
    decode_lines, encode_csv, encode_lines, Decoded, EventRecord, LineRecord, UserRecord,
};
use eventdesk_storage::{FileBackend, StorageBackend};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// Reads and writes the events file, the users file and their backups.
///
/// # Example
///
/// ```rust
/// use eventdesk_core::{Config, PersistenceGateway};
/// use eventdesk_storage::InMemoryBackend;
///
/// let mut gateway = PersistenceGateway::with_backends(
///     Config::default(),
///     Box::new(InMemoryBackend::new()),
///     Box::new(InMemoryBackend::new()),
/// );
/// gateway.initialize().unwrap();
///
/// assert!(gateway.load_events().unwrap().is_empty());
/// assert_eq!(gateway.load_users().unwrap().len(), 2); // defaults
/// ```
pub struct PersistenceGateway {
    config: Config,
    dir: DataDir,
    events: Box<dyn StorageBackend>,
    users: Box<dyn StorageBackend>,
}

impl PersistenceGateway {
    /// Creates a gateway over the files under `config.data_dir`.
    ///
    /// Nothing is touched on disk until [`initialize`](Self::initialize) or
    /// the first save.
    #[must_use]
    pub fn open(config: Config) -> Self {
        let dir = DataDir::new(&config);
        let events = Box::new(FileBackend::new(&dir.events_path()));
        let users = Box::new(FileBackend::new(&dir.users_path()));
        Self {
            config,
            dir,
            events,
            users,
        }
    }

    /// Creates a gateway over arbitrary backends.
    ///
    /// Backups are still written as files under `config.data_dir`.
    #[must_use]
    pub fn with_backends(
        config: Config,
        events: Box<dyn StorageBackend>,
        users: Box<dyn StorageBackend>,
    ) -> Self {
        let dir = DataDir::new(&config);
        Self {
            config,
            dir,
            events,
            users,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the data directory layout.
    #[must_use]
    pub fn data_dir(&self) -> &DataDir {
        &self.dir
    }

    /// Makes sure both data files exist, creating the data directory if
    /// needed. Existing contents are left alone.
    ///
    /// Both files are attempted even if the first fails; the first error is
    /// returned.
    pub fn initialize(&mut self) -> CoreResult<()> {
        let events = create_if_missing(self.events.as_mut(), "events");
        let users = create_if_missing(self.users.as_mut(), "users");
        events.and(users)
    }

    /// Loads all events.
    ///
    /// A missing or empty file yields an empty list. Malformed lines are
    /// logged and skipped.
    pub fn load_events(&self) -> CoreResult<Vec<EventRecord>> {
        let loaded = load(self.events.as_ref(), "events")?;
        Ok(loaded.unwrap_or_default())
    }

    /// Loads all accounts.
    ///
    /// A missing or empty file yields the default accounts. They are not
    /// written back until the next save.
    pub fn load_users(&self) -> CoreResult<Vec<UserRecord>> {
        let loaded = load(self.users.as_ref(), "users")?;
        Ok(loaded.unwrap_or_else(default_users))
    }

    /// Overwrites the events file with `events`.
    pub fn save_events(&mut self, events: &[EventRecord]) -> CoreResult<()> {
        save(self.events.as_mut(), "events", events)
    }

    /// Overwrites the users file with `users`.
    pub fn save_users(&mut self, users: &[UserRecord]) -> CoreResult<()> {
        save(self.users.as_mut(), "users", users)
    }

    /// Writes `events` as CSV to `path`, replacing any existing file.
    ///
    /// The parent directory must already exist.
    pub fn export_csv(&self, events: &[EventRecord], path: &Path) -> CoreResult<()> {
        let mut target = FileBackend::new(path);
        match target.write_all(encode_csv(events).as_bytes()) {
            Ok(()) => {
                info!(path = %path.display(), events = events.len(), "exported events to CSV");
                Ok(())
            }
            Err(err) => {
                error!(path = %path.display(), error = %err, "CSV export failed");
                Err(err.into())
            }
        }
    }

    /// Snapshots both data files under today's date.
    pub fn create_backup(&self) -> CoreResult<BackupReport> {
        self.create_backup_on(Local::now().date_naive())
    }

    /// Snapshots both data files under `date`.
    ///
    /// A data file that does not exist yet is skipped. An existing snapshot
    /// for the same day is overwritten.
    pub fn create_backup_on(&self, date: NaiveDate) -> CoreResult<BackupReport> {
        let mut report = BackupReport {
            date,
            files: Vec::new(),
        };

        let targets = [
            (self.events.as_ref(), self.dir.events_backup_path(date)),
            (self.users.as_ref(), self.dir.users_backup_path(date)),
        ];
        for (source, target) in targets {
            match copy_snapshot(source, &target) {
                Ok(true) => report.files.push(target),
                Ok(false) => {}
                Err(err) => {
                    error!(
                        source = %source.location(),
                        target = %target.display(),
                        error = %err,
                        "backup failed"
                    );
                    return Err(err);
                }
            }
        }

        info!(date = %date, files = report.files.len(), "backup created");
        Ok(report)
    }

    /// Lists snapshot files in the backups directory.
    pub fn list_backups(&self) -> CoreResult<Vec<PathBuf>> {
        self.dir.list_backups().inspect_err(|err| {
            error!(dir = %self.dir.backups_path().display(), error = %err, "cannot list backups");
        })
    }
}

fn create_if_missing(backend: &mut dyn StorageBackend, what: &str) -> CoreResult<()> {
    if backend.exists() {
        return Ok(());
    }
    backend.create().map_err(|err| {
        error!(file = what, location = %backend.location(), error = %err, "cannot create data file");
        err.into()
    })
}

/// Returns `None` for a missing or empty file.
fn load<T: LineRecord>(backend: &dyn StorageBackend, what: &str) -> CoreResult<Option<Vec<T>>> {
    if !backend.exists() || backend.size().is_ok_and(|size| size == 0) {
        return Ok(None);
    }

    let text = backend.read_text().map_err(|err| {
        error!(file = what, location = %backend.location(), error = %err, "cannot load data file");
        err
    })?;

    let Decoded { records, skipped } = decode_lines::<T>(&text);
    for line in &skipped {
        warn!(
            file = what,
            line = line.line_number,
            error = %line.error,
            "skipping malformed line"
        );
    }
    info!(file = what, records = records.len(), skipped = skipped.len(), "loaded data file");
    Ok(Some(records))
}

fn save<T: LineRecord>(backend: &mut dyn StorageBackend, what: &str, records: &[T]) -> CoreResult<()> {
    let text = encode_lines(records);
    match backend.write_all(text.as_bytes()) {
        Ok(()) => {
            info!(file = what, records = records.len(), "saved data file");
            Ok(())
        }
        Err(err) => {
            error!(file = what, location = %backend.location(), error = %err, "cannot save data file");
            Err(err.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventdesk_storage::InMemoryBackend;
    use std::fs;
    use tempfile::tempdir;

    fn memory_gateway(
        config: Config,
        events: &InMemoryBackend,
        users: &InMemoryBackend,
    ) -> PersistenceGateway {
        PersistenceGateway::with_backends(config, Box::new(events.clone()), Box::new(users.clone()))
    }

    fn record(name: &str) -> EventRecord {
        EventRecord {
            id: 1,
            name: name.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 12, 15).unwrap(),
            venue: "Room 101".to_string(),
            organizer: "Dr. Smith".to_string(),
            participants: vec!["John Doe - Student".to_string()],
        }
    }

    #[test]
    fn initialize_creates_files_on_disk() {
        let temp = tempdir().unwrap();
        let root = temp.path().join("data");
        let mut gateway = PersistenceGateway::open(Config::new().data_dir(&root));

        gateway.initialize().unwrap();

        assert!(root.join("events.txt").is_file());
        assert!(root.join("users.txt").is_file());
        assert_eq!(fs::read_to_string(root.join("events.txt")).unwrap(), "");
    }

    #[test]
    fn initialize_keeps_existing_contents() {
        let events = InMemoryBackend::with_data("1|A|15/12/2024|R|O|\n");
        let users = InMemoryBackend::new();
        let mut gateway = memory_gateway(Config::default(), &events, &users);

        gateway.initialize().unwrap();
        assert_eq!(events.text().unwrap(), "1|A|15/12/2024|R|O|\n");
        assert_eq!(users.text().unwrap(), "");
    }

    #[test]
    fn missing_users_file_yields_defaults() {
        let gateway = memory_gateway(
            Config::default(),
            &InMemoryBackend::new(),
            &InMemoryBackend::new(),
        );
        let users = gateway.load_users().unwrap();
        assert_eq!(users, default_users());
    }

    #[test]
    fn empty_users_file_yields_defaults_without_writing() {
        let users = InMemoryBackend::with_data("");
        let gateway = memory_gateway(Config::default(), &InMemoryBackend::new(), &users);

        assert_eq!(gateway.load_users().unwrap().len(), 2);
        assert_eq!(users.text().unwrap(), "");
    }

    #[test]
    fn load_skips_malformed_lines() {
        let events = InMemoryBackend::with_data(
            "1|AI Workshop|15/12/2024|Room 101|Dr. Smith|\n\n2|Broken|15/12/2024\n",
        );
        let gateway = memory_gateway(Config::default(), &events, &InMemoryBackend::new());

        let loaded = gateway.load_events().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name, "AI Workshop");
    }

    #[test]
    fn save_then_load() {
        let events = InMemoryBackend::new();
        let mut gateway = memory_gateway(Config::default(), &events, &InMemoryBackend::new());

        gateway
            .save_events(&[record("AI Workshop"), record("Cultural Show")])
            .unwrap();
        let loaded = gateway.load_events().unwrap();

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[1].name, "Cultural Show");
        assert!(events.text().unwrap().ends_with('\n'));
    }

    #[test]
    fn save_to_unwritable_location_is_an_error() {
        let temp = tempdir().unwrap();
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        // data dir is a regular file, so nothing below it can be written
        let mut gateway = PersistenceGateway::open(Config::new().data_dir(&blocker));
        assert!(gateway.initialize().is_err());
        assert!(gateway.save_events(&[record("A")]).is_err());
    }

    #[test]
    fn export_csv_writes_header_and_rows() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("events.csv");
        let gateway = memory_gateway(
            Config::default(),
            &InMemoryBackend::new(),
            &InMemoryBackend::new(),
        );

        gateway.export_csv(&[record("AI Workshop")], &path).unwrap();

        let csv = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Event ID,Event Name,Date,Venue,Organizer,Total Participants");
        assert_eq!(lines[1], "1,AI Workshop,15/12/2024,Room 101,Dr. Smith,1");
    }

    #[test]
    fn backup_copies_both_files() {
        let temp = tempdir().unwrap();
        let config = Config::new().data_dir(temp.path());
        let events = InMemoryBackend::with_data("events\n");
        let users = InMemoryBackend::with_data("admin|admin123\n");
        let gateway = memory_gateway(config, &events, &users);
        let day = NaiveDate::from_ymd_opt(2024, 12, 15).unwrap();

        let report = gateway.create_backup_on(day).unwrap();

        assert_eq!(report.files.len(), 2);
        let events_copy = temp.path().join("backups/events_20241215.txt");
        assert_eq!(fs::read_to_string(events_copy).unwrap(), "events\n");
        assert_eq!(gateway.list_backups().unwrap().len(), 2);
    }

    #[test]
    fn backup_skips_missing_files() {
        let temp = tempdir().unwrap();
        let gateway = memory_gateway(
            Config::new().data_dir(temp.path()),
            &InMemoryBackend::new(),
            &InMemoryBackend::with_data("admin|admin123\n"),
        );
        let day = NaiveDate::from_ymd_opt(2024, 12, 15).unwrap();

        let report = gateway.create_backup_on(day).unwrap();
        assert_eq!(report.files, vec![temp.path().join("backups/users_20241215.txt")]);
    }
}
