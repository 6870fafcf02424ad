//! Per-tick flight telemetry derivation.
//!
//! Owns the flight computer that turns raw actor observations into the
//! instrument readout and decides when alert sounds fire.

pub mod alerts;
pub mod attitude;
pub mod computer;

pub use computer::FlightComputer;
