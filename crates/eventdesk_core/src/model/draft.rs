//! Validated input for creating and editing events.

use crate::error::{CoreError, CoreResult};
use chrono::NaiveDate;
use eventdesk_codec::{parse_date, FIELD_SEPARATOR, PARTICIPANT_SEPARATOR};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The four caller-editable fields of an event, already validated.
///
/// Constructing a draft is the only validation step: once a draft exists,
/// the store accepts it without further checks.
///
/// # Example
///
/// ```rust
/// use eventdesk_core::EventDraft;
///
/// let draft = EventDraft::parse("AI Workshop", "15/12/2024", "Room 101", "Dr. Smith").unwrap();
/// assert_eq!(draft.venue(), "Room 101");
///
/// let err = EventDraft::parse("AI Workshop", "2024-12-15", "Room 101", "Dr. Smith").unwrap_err();
/// assert!(err.is_validation());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    name: String,
    date: NaiveDate,
    venue: String,
    organizer: String,
}

impl EventDraft {
    /// Creates a draft from typed fields.
    ///
    /// Text fields are trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if a field is blank or contains `|`
    /// or a line break.
    pub fn new(
        name: &str,
        date: NaiveDate,
        venue: &str,
        organizer: &str,
    ) -> CoreResult<Self> {
        Ok(Self {
            name: required_text("event name", name)?,
            date,
            venue: required_text("venue", venue)?,
            organizer: required_text("organizer", organizer)?,
        })
    }

    /// Creates a draft from raw form input with a `dd/MM/yyyy` date.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if a field is missing or the date
    /// does not parse.
    pub fn parse(name: &str, date: &str, venue: &str, organizer: &str) -> CoreResult<Self> {
        if date.trim().is_empty() {
            return Err(CoreError::validation("date is required"));
        }
        let date = parse_date(date)
            .map_err(|_| CoreError::validation("invalid date format, use DD/MM/YYYY"))?;
        Self::new(name, date, venue, organizer)
    }

    /// Event name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Calendar date.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Venue.
    #[must_use]
    pub fn venue(&self) -> &str {
        &self.venue
    }

    /// Organizer.
    #[must_use]
    pub fn organizer(&self) -> &str {
        &self.organizer
    }

    pub(crate) fn into_parts(self) -> (String, NaiveDate, String, String) {
        (self.name, self.date, self.venue, self.organizer)
    }
}

/// Participant category offered at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ParticipantKind {
    /// A student.
    Student,
    /// A staff member.
    Staff,
}

impl ParticipantKind {
    /// Returns the label suffix, e.g. `"Student"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Staff => "Staff",
        }
    }

    /// Builds the participant label `"<name> - <Kind>"`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if the name is blank or contains a
    /// delimiter.
    pub fn label(self, name: &str) -> CoreResult<String> {
        let name = participant_label(name)?;
        Ok(format!("{name} - {}", self.as_str()))
    }
}

impl fmt::Display for ParticipantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParticipantKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "student" => Ok(Self::Student),
            "staff" => Ok(Self::Staff),
            other => Err(CoreError::validation(format!(
                "unknown participant type {other:?}, expected student or staff"
            ))),
        }
    }
}

/// Trims and checks a required text field.
pub(crate) fn required_text(field: &str, value: &str) -> CoreResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(CoreError::validation(format!("{field} is required")));
    }
    if value.contains(FIELD_SEPARATOR) || value.contains(['\n', '\r']) {
        return Err(CoreError::validation(format!(
            "{field} must not contain '|' or line breaks"
        )));
    }
    Ok(value.to_string())
}

/// Trims and checks a participant label.
pub(crate) fn participant_label(value: &str) -> CoreResult<String> {
    let value = required_text("participant name", value)?;
    if value.contains(PARTICIPANT_SEPARATOR) {
        return Err(CoreError::validation(
            "participant name must not contain ','",
        ));
    }
    Ok(value)
}
