//! Benchmarks for EventDesk.
//!
//! The benchmarks live under `benches/`; this library only holds shared
//! data generators.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod utils;
