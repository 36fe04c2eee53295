//! CLI command implementations.

pub mod backup;
pub mod events;
pub mod export;
pub mod login;
pub mod stats;
