//! Integration tests for login.

use eventdesk_core::{AuthGate, Config, CoreError};
use eventdesk_testkit::prelude::*;

#[test]
fn default_accounts_log_in() {
    let test_store = TestStore::memory();
    let gate = AuthGate::new(&test_store);

    assert_eq!(gate.login("admin", "admin123").unwrap().username, "admin");
    assert_eq!(gate.login("groupfive", "BIT1201").unwrap().username, "groupfive");
}

#[test]
fn credentials_are_case_sensitive_and_exact() {
    let test_store = TestStore::memory();
    let gate = AuthGate::new(&test_store);

    for (user, pass) in [
        ("ADMIN", "admin123"),
        ("admin", "Admin123"),
        (" admin", "admin123"),
        ("admin", "admin123 "),
        ("coordinator", "coord123"),
    ] {
        assert!(
            matches!(gate.login(user, pass), Err(CoreError::InvalidCredentials)),
            "{user:?}/{pass:?} should be rejected"
        );
    }
}

#[test]
fn stored_accounts_replace_defaults() {
    let test_store =
        TestStore::memory_with(Config::default(), "", "dean|s3cret\nclerk|pa ss\n");

    assert!(test_store.authenticate("dean", "s3cret"));
    assert!(test_store.authenticate("clerk", "pa ss"));
    assert!(!test_store.authenticate("admin", "admin123"));
}

#[test]
fn accounts_survive_restart() {
    let test_store = TestStore::file();
    let reopened = test_store.reopen();
    assert!(reopened.authenticate("groupfive", "BIT1201"));
}
