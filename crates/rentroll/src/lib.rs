//! Occupancy and revenue resolution for rental units.
//!
//! The [`occupancy`] module holds the pure engine. Everything else is the
//! plumbing that feeds it: rent-roll import, configuration, telemetry and the
//! error type surfaced by the HTTP adapter.

pub mod config;
pub mod error;
pub mod import;
pub mod occupancy;
pub mod telemetry;
