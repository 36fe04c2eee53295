//! Dashboard figures over the event list.

use crate::model::Event;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Aggregate figures for a set of events, relative to a reference day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EventSummary {
    /// Number of events.
    pub total_events: usize,
    /// Events on or after the reference day.
    pub upcoming_events: usize,
    /// Events in the same calendar month and year as the reference day.
    pub events_this_month: usize,
    /// Sum of participant counts.
    pub total_participants: usize,
    /// Mean participants per event, 0 when there are no events.
    pub average_participants: f64,
}

impl EventSummary {
    /// Computes the summary of `events` as seen on `today`.
    #[must_use]
    pub fn from_events(events: &[Event], today: NaiveDate) -> Self {
        let total_events = events.len();
        let upcoming_events = events.iter().filter(|e| e.date() >= today).count();
        let events_this_month = events
            .iter()
            .filter(|e| e.date().year() == today.year() && e.date().month() == today.month())
            .count();
        let total_participants: usize = events.iter().map(Event::participant_count).sum();

        #[allow(clippy::cast_precision_loss)]
        let average_participants = if total_events == 0 {
            0.0
        } else {
            total_participants as f64 / total_events as f64
        };

        Self {
            total_events,
            upcoming_events,
            events_this_month,
            total_participants,
            average_participants,
        }
    }
}
