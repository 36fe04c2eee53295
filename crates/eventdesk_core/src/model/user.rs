//! User account record.

use eventdesk_codec::UserRecord;
use std::fmt;

/// A login account. Passwords are kept and compared in plaintext.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    username: String,
    password: String,
}

impl User {
    /// Creates an account.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Login name.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns true if both fields match exactly (case-sensitive).
    #[must_use]
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }

    /// Converts to the on-disk shape.
    #[must_use]
    pub fn to_record(&self) -> UserRecord {
        UserRecord::new(self.username.clone(), self.password.clone())
    }
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        Self::new(record.username, record.password)
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
