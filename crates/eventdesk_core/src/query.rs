//! Event search and status classification.

use crate::error::CoreError;
use crate::model::Event;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Where an event falls relative to a reference day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EventStatus {
    /// The event date is before the reference day.
    Completed,
    /// The event is on the reference day.
    Today,
    /// The event date is after the reference day.
    Upcoming,
}

impl EventStatus {
    /// Classifies `date` against `today`.
    #[must_use]
    pub fn of(date: NaiveDate, today: NaiveDate) -> Self {
        match date.cmp(&today) {
            std::cmp::Ordering::Less => Self::Completed,
            std::cmp::Ordering::Equal => Self::Today,
            std::cmp::Ordering::Greater => Self::Upcoming,
        }
    }

    /// Returns the display name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Today => "Today",
            Self::Upcoming => "Upcoming",
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "completed" => Ok(Self::Completed),
            "today" => Ok(Self::Today),
            "upcoming" => Ok(Self::Upcoming),
            other => Err(CoreError::validation(format!(
                "unknown status {other:?}, expected completed, today or upcoming"
            ))),
        }
    }
}

/// Search criteria for [`crate::RecordStore::search`].
///
/// An empty filter matches every event.
///
/// # Example
///
/// ```rust
/// use eventdesk_core::{EventFilter, EventStatus};
///
/// let filter = EventFilter::new().query("workshop").status(EventStatus::Upcoming);
/// assert_eq!(filter.status_filter(), Some(EventStatus::Upcoming));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    query: String,
    status: Option<EventStatus>,
}

impl EventFilter {
    /// Creates a filter that matches everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to events whose name, venue or organizer contains `text`,
    /// ignoring case. Surrounding whitespace is ignored.
    #[must_use]
    pub fn query(mut self, text: &str) -> Self {
        self.query = text.trim().to_lowercase();
        self
    }

    /// Restricts to events with the given status.
    #[must_use]
    pub const fn status(mut self, status: EventStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Returns the status restriction, if any.
    #[must_use]
    pub const fn status_filter(&self) -> Option<EventStatus> {
        self.status
    }

    /// Returns true if `event` passes the filter on day `today`.
    #[must_use]
    pub fn matches(&self, event: &Event, today: NaiveDate) -> bool {
        let status_ok = self
            .status
            .map_or(true, |status| EventStatus::of(event.date(), today) == status);

        let query_ok = self.query.is_empty()
            || [event.name(), event.venue(), event.organizer()]
                .iter()
                .any(|field| field.to_lowercase().contains(&self.query));

        status_ok && query_ok
    }
}
