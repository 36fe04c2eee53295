//! Event commands: list, show, add, update, remove, register, conflicts.

use chrono::{Local, NaiveDate};
use eventdesk_codec::format_date;
use eventdesk_core::{
    Event, EventDraft, EventFilter, EventId, EventStatus, ParticipantKind, RecordStore,
};
use serde::Serialize;
use tracing::info;

use crate::OutputFormat;

/// An event as shown to the user, with its status for today.
#[derive(Debug, Serialize)]
pub struct EventRow {
    /// The event.
    #[serde(flatten)]
    pub event: Event,
    /// Number of participants.
    pub participant_count: usize,
    /// Status relative to today.
    pub status: EventStatus,
}

impl EventRow {
    fn new(event: Event, today: NaiveDate) -> Self {
        Self {
            participant_count: event.participant_count(),
            status: EventStatus::of(event.date(), today),
            event,
        }
    }
}

/// Field values for `add` and `update`. `None` keeps the current value.
#[derive(Debug, Default)]
pub struct EventFields {
    /// Event name.
    pub name: Option<String>,
    /// Date as `DD/MM/YYYY`.
    pub date: Option<String>,
    /// Venue.
    pub venue: Option<String>,
    /// Organizer.
    pub organizer: Option<String>,
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Runs the list command.
pub fn list(
    store: &RecordStore,
    search: Option<&str>,
    status: Option<EventStatus>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let today = today();
    let mut filter = EventFilter::new();
    if let Some(query) = search {
        filter = filter.query(query);
    }
    if let Some(status) = status {
        filter = filter.status(status);
    }

    let rows: Vec<EventRow> = store
        .search(&filter, today)
        .into_iter()
        .map(|event| EventRow::new(event, today))
        .collect();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Text => {
            print_table(&rows);
        }
    }

    Ok(())
}

/// Runs the show command.
pub fn show(
    store: &RecordStore,
    id: EventId,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let event = store
        .get_event(id)
        .ok_or_else(|| format!("No event with id {id}"))?;
    let row = EventRow::new(event, today());

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&row)?);
        }
        OutputFormat::Text => {
            let event = &row.event;
            println!("Event {}", event.id());
            println!("  Name:      {}", event.name());
            println!("  Date:      {}", format_date(event.date()));
            println!("  Venue:     {}", event.venue());
            println!("  Organizer: {}", event.organizer());
            println!("  Status:    {}", row.status);
            println!("  Participants ({}):", row.participant_count);
            for participant in event.participants() {
                println!("    - {participant}");
            }
        }
    }

    Ok(())
}

/// Runs the add command.
///
/// Refuses to add an event that clashes with another at the same venue on
/// the same day unless `force` is set.
pub fn add(
    store: &mut RecordStore,
    fields: EventFields,
    force: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let draft = EventDraft::parse(
        fields.name.as_deref().unwrap_or_default(),
        fields.date.as_deref().unwrap_or_default(),
        fields.venue.as_deref().unwrap_or_default(),
        fields.organizer.as_deref().unwrap_or_default(),
    )?;

    let conflicts = store.get_conflicting_events(draft.date(), draft.venue());
    if !conflicts.is_empty() {
        println!("⚠ {} is already booked on {}:", draft.venue(), format_date(draft.date()));
        for event in &conflicts {
            println!("    {} {}", event.id(), event.name());
        }
        if !force {
            return Err("Event not added; use --force to add it anyway".into());
        }
    }

    let id = store.add_event(draft);
    info!("Added event {}", id);
    report_flush(store);
    println!("✓ Event {id} added");
    Ok(())
}

/// Runs the update command.
pub fn update(
    store: &mut RecordStore,
    id: EventId,
    fields: EventFields,
) -> Result<(), Box<dyn std::error::Error>> {
    let current = store
        .get_event(id)
        .ok_or_else(|| format!("No event with id {id}"))?;

    let date = fields
        .date
        .unwrap_or_else(|| format_date(current.date()));
    let draft = EventDraft::parse(
        fields.name.as_deref().unwrap_or(current.name()),
        &date,
        fields.venue.as_deref().unwrap_or(current.venue()),
        fields.organizer.as_deref().unwrap_or(current.organizer()),
    )?;

    store.update_event(id, draft)?;
    report_flush(store);
    println!("✓ Event {id} updated");
    Ok(())
}

/// Runs the remove command.
pub fn remove(store: &mut RecordStore, id: EventId) -> Result<(), Box<dyn std::error::Error>> {
    if store.remove_event(id) {
        report_flush(store);
        println!("✓ Event {id} removed");
    } else {
        println!("No event with id {id}, nothing removed");
    }
    Ok(())
}

/// Runs the register command.
pub fn register(
    store: &mut RecordStore,
    id: EventId,
    name: &str,
    kind: ParticipantKind,
) -> Result<(), Box<dyn std::error::Error>> {
    store.register_participant(id, name, kind)?;
    report_flush(store);
    println!("✓ {} registered for event {id} as {kind}", name.trim());
    Ok(())
}

/// Runs the conflicts command.
pub fn conflicts(
    store: &RecordStore,
    date: &str,
    venue: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let date = eventdesk_codec::parse_date(date)
        .map_err(|_| "Invalid date format, use DD/MM/YYYY")?;
    let found = store.get_conflicting_events(date, venue.trim());

    if found.is_empty() {
        println!("✓ {} is free on {}", venue.trim(), format_date(date));
    } else {
        println!("⚠ {} event(s) at {} on {}:", found.len(), venue.trim(), format_date(date));
        for event in &found {
            println!("    {} {} ({})", event.id(), event.name(), event.organizer());
        }
    }
    Ok(())
}

/// Warns if the last write did not reach disk.
pub(crate) fn report_flush(store: &RecordStore) {
    if let Some(err) = store.last_flush_error() {
        println!("⚠ Change kept in memory but not saved: {err}");
    }
}

fn print_table(rows: &[EventRow]) {
    if rows.is_empty() {
        println!("No events found");
        return;
    }

    println!(
        "{:<5} {:<28} {:<10} {:<16} {:<18} {:>5}  {}",
        "ID", "Name", "Date", "Venue", "Organizer", "Ppl", "Status"
    );
    for row in rows {
        let event = &row.event;
        println!(
            "{:<5} {:<28} {:<10} {:<16} {:<18} {:>5}  {}",
            event.id().as_u64(),
            truncate(event.name(), 28),
            format_date(event.date()),
            truncate(event.venue(), 16),
            truncate(event.organizer(), 18),
            row.participant_count,
            row.status
        );
    }
    println!();
    println!("{} event(s)", rows.len());
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let mut short: String = text.chars().take(width.saturating_sub(1)).collect();
        short.push('…');
        short
    }
}
