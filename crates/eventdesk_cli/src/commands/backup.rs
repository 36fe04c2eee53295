//! Backup commands.

use eventdesk_core::RecordStore;
use tracing::info;

/// Creates today's snapshot of both data files.
pub fn create(store: &RecordStore) -> Result<(), Box<dyn std::error::Error>> {
    info!(
        "Creating backup in {:?}",
        store.gateway().data_dir().backups_path()
    );

    let report = store.create_backup()?;

    if report.is_empty() {
        println!("No data files to back up yet");
        return Ok(());
    }

    println!("✓ Backup created successfully");
    println!("  Date: {}", report.date);
    for file in &report.files {
        println!("  File: {}", file.display());
    }
    Ok(())
}

/// Lists existing snapshot files.
pub fn list(store: &RecordStore) -> Result<(), Box<dyn std::error::Error>> {
    let backups = store.gateway().list_backups()?;

    if backups.is_empty() {
        println!("No backups found");
        return Ok(());
    }

    println!("Backups:");
    for path in &backups {
        println!("  {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventdesk_core::Config;
    use tempfile::tempdir;

    #[test]
    fn backup_then_list() {
        let dir = tempdir().unwrap();
        let store = RecordStore::open(Config::new().data_dir(dir.path()));

        create(&store).unwrap();
        create(&store).unwrap();

        let backups = store.gateway().list_backups().unwrap();
        assert_eq!(backups.len(), 2);
        list(&store).unwrap();
    }
}
