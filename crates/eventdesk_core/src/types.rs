//! Core type definitions for EventDesk.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Identifier of an event within one store.
///
/// Ids are handed out by the store from a counter that starts at 1 and only
/// moves forward. They are never reused within a process, even after the
/// event is removed, but they are not stable across restarts: the store
/// renumbers events as it loads them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EventId(pub u64);

impl EventId {
    /// The first id a store hands out.
    pub const FIRST: Self = Self(1);

    /// Creates an event id.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw id value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Returns the next id.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl FromStr for EventId {
    type Err = std::num::ParseIntError;

    /// Accepts `12` as well as `#12`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().trim_start_matches('#');
        digits.parse().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_count_up() {
        assert_eq!(EventId::FIRST.next(), EventId::new(2));
        assert!(EventId::new(2) > EventId::FIRST);
    }

    #[test]
    fn display_and_parse() {
        let id = EventId::new(42);
        assert_eq!(id.to_string(), "#42");
        assert_eq!("#42".parse::<EventId>().unwrap(), id);
        assert_eq!(" 42 ".parse::<EventId>().unwrap(), id);
        assert!("forty-two".parse::<EventId>().is_err());
    }
}
