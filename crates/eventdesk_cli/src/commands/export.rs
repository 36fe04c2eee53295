//! CSV export command.

use eventdesk_core::RecordStore;
use std::path::Path;
use tracing::info;

/// Runs the export command.
pub fn run(store: &RecordStore, output: &Path) -> Result<(), Box<dyn std::error::Error>> {
    info!("Exporting events to {:?}", output);

    store.export_csv(output)?;

    println!("✓ Exported {} event(s)", store.event_count());
    println!("  Path: {}", output.display());
    Ok(())
}
