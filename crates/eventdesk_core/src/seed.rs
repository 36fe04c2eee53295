//! First-run defaults.

use chrono::NaiveDate;
use eventdesk_codec::{EventRecord, UserRecord};

/// Accounts available before anyone has been added.
///
/// Used both when seeding an empty store and when the users file is missing
/// or empty.
pub const DEFAULT_USERS: [(&str, &str); 2] = [("admin", "admin123"), ("groupfive", "BIT1201")];

/// Returns [`DEFAULT_USERS`] as records.
#[must_use]
pub fn default_users() -> Vec<UserRecord> {
    DEFAULT_USERS
        .iter()
        .map(|(username, password)| UserRecord::new(*username, *password))
        .collect()
}

/// Returns the two sample events inserted into an empty store.
#[must_use]
pub fn sample_events() -> Vec<EventRecord> {
    let samples: [(&str, (i32, u32, u32), &str, &str, &[&str]); 2] = [
        (
            "AI Workshop",
            (2024, 12, 15),
            "Room 101",
            "Dr. Smith",
            &["John Doe - Student", "Jane Smith - Staff"],
        ),
        (
            "Cultural Show",
            (2024, 12, 20),
            "Main Hall",
            "Prof. Johnson",
            &["Alice Brown - Student"],
        ),
    ];

    samples
        .iter()
        .filter_map(|(name, (y, m, d), venue, organizer, participants)| {
            let date = NaiveDate::from_ymd_opt(*y, *m, *d)?;
            Some(EventRecord {
                id: 0,
                name: (*name).to_string(),
                date,
                venue: (*venue).to_string(),
                organizer: (*organizer).to_string(),
                participants: participants.iter().map(|p| (*p).to_string()).collect(),
            })
        })
        .collect()
}
