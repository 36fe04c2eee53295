//! # EventDesk Testkit
//!
//! Test utilities for EventDesk.
//!
//! This crate provides:
//! - Test fixtures and store helpers
//! - Property-based test generators using proptest
//! - A model-based harness that checks a store against its expected contents
//!
//! ## Usage
//!
//! ```rust
//! use eventdesk_testkit::prelude::*;
//!
//! let mut test_store = TestStore::empty();
//! test_store.add_event(draft("Open Day", "01/03/2025", "Main Hall"));
//! assert!(test_store.events_text().contains("Open Day"));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;
pub mod integration;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
    pub use crate::integration::*;
}

pub use fixtures::*;
pub use generators::*;
pub use integration::*;
