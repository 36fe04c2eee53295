//! CSV export encoding.
//!
//! Only event summaries are exported: the participant list itself is
//! replaced by its length.

use crate::date::format_date;
use crate::record::EventRecord;
use std::borrow::Cow;

/// Fixed header row of every export.
pub const CSV_HEADER: &str = "Event ID,Event Name,Date,Venue,Organizer,Total Participants";

/// Quotes a text cell if it contains a comma or a double quote.
///
/// Quotes inside a quoted cell are doubled. Other characters, line breaks
/// included, do not trigger quoting.
#[must_use]
pub fn escape_field(value: &str) -> Cow<'_, str> {
    if value.contains(',') || value.contains('"') {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

/// Encodes one event as a CSV row (without line terminator).
#[must_use]
pub fn encode_csv_row(record: &EventRecord) -> String {
    format!(
        "{},{},{},{},{},{}",
        record.id,
        escape_field(&record.name),
        format_date(record.date),
        escape_field(&record.venue),
        escape_field(&record.organizer),
        record.participants.len()
    )
}

/// Encodes a complete export: header plus one row per event.
#[must_use]
pub fn encode_csv(records: &[EventRecord]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for record in records {
        out.push_str(&encode_csv_row(record));
        out.push('\n');
    }
    out
}
