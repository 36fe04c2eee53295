//! Event record.

use super::draft::{participant_label, EventDraft, ParticipantKind};
use crate::error::CoreResult;
use crate::types::EventId;
use chrono::NaiveDate;
use eventdesk_codec::EventRecord;
use serde::Serialize;

/// A university event and its participants.
///
/// Events only come into existence inside a [`crate::RecordStore`], which
/// assigns the id. Values handed out by the store are read-only copies;
/// changes go through the store's methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    id: EventId,
    name: String,
    date: NaiveDate,
    venue: String,
    organizer: String,
    participants: Vec<String>,
}

impl Event {
    pub(crate) fn from_draft(id: EventId, draft: EventDraft) -> Self {
        let (name, date, venue, organizer) = draft.into_parts();
        Self {
            id,
            name,
            date,
            venue,
            organizer,
            participants: Vec::new(),
        }
    }

    /// Rebuilds an event from a stored line, discarding the stored id.
    pub(crate) fn from_record(id: EventId, record: EventRecord) -> Self {
        Self {
            id,
            name: record.name,
            date: record.date,
            venue: record.venue,
            organizer: record.organizer,
            participants: record.participants,
        }
    }

    /// Converts to the on-disk shape.
    #[must_use]
    pub fn to_record(&self) -> EventRecord {
        EventRecord {
            id: self.id.as_u64(),
            name: self.name.clone(),
            date: self.date,
            venue: self.venue.clone(),
            organizer: self.organizer.clone(),
            participants: self.participants.clone(),
        }
    }

    /// Store-assigned id.
    #[must_use]
    pub fn id(&self) -> EventId {
        self.id
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

    /// Participant labels in registration order. May contain duplicates.
    #[must_use]
    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    /// Number of registered participants.
    #[must_use]
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// Replaces all four editable fields at once.
    pub(crate) fn apply(&mut self, draft: EventDraft) {
        let (name, date, venue, organizer) = draft.into_parts();
        self.name = name;
        self.date = date;
        self.venue = venue;
        self.organizer = organizer;
    }

    /// Appends a participant label.
    ///
    /// # Errors
    ///
    /// Returns a validation error for blank labels or labels containing `,`,
    /// `|` or line breaks.
    pub(crate) fn add_participant(&mut self, label: &str) -> CoreResult<()> {
        let label = participant_label(label)?;
        self.participants.push(label);
        Ok(())
    }

    /// Registers a person, appending the label `"<name> - <Kind>"`.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the name is blank or contains a
    /// delimiter.
    pub(crate) fn register(&mut self, name: &str, kind: ParticipantKind) -> CoreResult<()> {
        let label = kind.label(name)?;
        self.participants.push(label);
        Ok(())
    }

    /// Returns true if the event is at `venue` on `date`.
    ///
    /// The venue comparison ignores case.
    #[must_use]
    pub fn conflicts_with(&self, date: NaiveDate, venue: &str) -> bool {
        self.date == date && self.venue.to_lowercase() == venue.to_lowercase()
    }
}
