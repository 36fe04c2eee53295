//! Login command implementation.

use eventdesk_core::{AuthGate, RecordStore};

/// Checks a username/password pair.
pub fn run(
    store: &RecordStore,
    username: &str,
    password: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let user = AuthGate::new(store)
        .login(username, password)
        .map_err(|_| "Invalid username or password")?;

    println!("✓ Logged in as {}", user.username);
    Ok(())
}
