//! Stats command implementation.

use chrono::Local;
use eventdesk_core::{EventSummary, RecordStore};

use crate::OutputFormat;

/// Runs the stats command.
pub fn run(store: &RecordStore, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let summary = store.summary(Local::now().date_naive());

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Text => {
            print_text_output(&summary);
        }
    }

    Ok(())
}

fn print_text_output(summary: &EventSummary) {
    println!("EventDesk Summary");
    println!("=================");
    println!();
    println!("Events:");
    println!("  Total:       {}", summary.total_events);
    println!("  Upcoming:    {}", summary.upcoming_events);
    println!("  This month:  {}", summary.events_this_month);
    println!();
    println!("Participants:");
    println!("  Total:       {}", summary.total_participants);
    println!("  Per event:   {:.1}", summary.average_participants);
}
