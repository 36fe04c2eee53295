//! On-disk record shapes and their single-line encodings.

use crate::date::{format_date, parse_date};
use crate::error::{CodecError, CodecResult};
use chrono::NaiveDate;

/// Field separator within a line.
pub const FIELD_SEPARATOR: char = '|';

/// Separator between participant labels in the last event field.
pub const PARTICIPANT_SEPARATOR: char = ',';

/// A type stored as one line of a flat file.
pub trait LineRecord: Sized {
    /// Encodes the record as one line, without the trailing newline.
    fn encode_line(&self) -> String;

    /// Decodes a record from one line (trailing newline already removed).
    ///
    /// # Errors
    ///
    /// Returns an error if the line is malformed.
    fn decode_line(line: &str) -> CodecResult<Self>;
}

/// An event as stored in `events.txt`.
///
/// Line format: `id|name|dd/MM/yyyy|venue|organizer|p1,p2,...`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    /// Id at the time the line was written. Informational only: readers
    /// assign fresh ids, and an unparsable id decodes as 0.
    pub id: u64,
    /// Event name.
    pub name: String,
    /// Calendar date.
    pub date: NaiveDate,
    /// Venue.
    pub venue: String,
    /// Organizer.
    pub organizer: String,
    /// Participant labels in registration order.
    pub participants: Vec<String>,
}

impl LineRecord for EventRecord {
    fn encode_line(&self) -> String {
        let date = format_date(self.date);
        let participants = self.participants.join(",");
        format!(
            "{}|{}|{}|{}|{}|{}",
            self.id, self.name, date, self.venue, self.organizer, participants
        )
    }

    fn decode_line(line: &str) -> CodecResult<Self> {
        // Fields past the participant list are ignored.
        let parts: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        if parts.len() < 5 {
            return Err(CodecError::field_count("at least 5", parts.len()));
        }

        for (field, value) in [("name", parts[1]), ("venue", parts[3]), ("organizer", parts[4])] {
            if value.trim().is_empty() {
                return Err(CodecError::EmptyField { field });
            }
        }

        let id = parts[0].trim().parse().unwrap_or_default();
        let date = parse_date(parts[2])?;

        let participants = parts
            .get(5)
            .map(|field| {
                field
                    .split(PARTICIPANT_SEPARATOR)
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            id,
            name: parts[1].to_string(),
            date,
            venue: parts[3].to_string(),
            organizer: parts[4].to_string(),
            participants,
        })
    }
}

/// A credential pair as stored in `users.txt`.
///
/// Line format: `username|password`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    /// Login name.
    pub username: String,
    /// Plaintext password.
    pub password: String,
}

impl UserRecord {
    /// Creates a user record.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl LineRecord for UserRecord {
    fn encode_line(&self) -> String {
        format!("{}|{}", self.username, self.password)
    }

    fn decode_line(line: &str) -> CodecResult<Self> {
        let mut parts: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        // Trailing empty fields do not count: `admin|` is a one-field line.
        while parts.last().is_some_and(|p| p.is_empty()) {
            parts.pop();
        }

        match parts.as_slice() {
            [username, password] => Ok(Self::new(*username, *password)),
            _ => Err(CodecError::field_count("2", parts.len())),
        }
    }
}
