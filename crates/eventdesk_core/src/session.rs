//! Login gate for front ends.

use crate::error::{CoreError, CoreResult};
use crate::store::RecordStore;
use serde::Serialize;
use tracing::{info, warn};

/// Proof that a login succeeded.
///
/// There is no token or expiry; holding this value is the whole session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticatedUser {
    /// The account that logged in.
    pub username: String,
}

/// Checks credentials against a [`RecordStore`].
///
/// # Example
///
/// ```rust
/// use eventdesk_core::{AuthGate, Config, RecordStore};
///
/// let store = RecordStore::in_memory(Config::default());
/// let gate = AuthGate::new(&store);
///
/// assert!(gate.login("admin", "admin123").is_ok());
/// assert!(gate.login("admin", "wrong").is_err());
/// ```
#[derive(Clone, Copy)]
pub struct AuthGate<'a> {
    store: &'a RecordStore,
}

impl<'a> AuthGate<'a> {
    /// Creates a gate over `store`.
    #[must_use]
    pub const fn new(store: &'a RecordStore) -> Self {
        Self { store }
    }

    /// Returns true if the credentials match an account.
    #[must_use]
    pub fn authenticate(&self, username: &str, password: &str) -> bool {
        self.store.authenticate(username, password)
    }

    /// Logs in.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidCredentials`] if no account matches.
    pub fn login(&self, username: &str, password: &str) -> CoreResult<AuthenticatedUser> {
        if self.authenticate(username, password) {
            info!(username, "login succeeded");
            Ok(AuthenticatedUser {
                username: username.to_string(),
            })
        } else {
            warn!(username, "login rejected");
            Err(CoreError::InvalidCredentials)
        }
    }
}
