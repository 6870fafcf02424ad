//! Core types and definitions for the flightdeck instrument suite.
//!
//! This crate defines the vocabulary shared across the other crates:
//! observations, the flight state readout, configuration, events, and
//! constants. It has no dependency on any host engine or runtime framework.

pub mod config;
pub mod constants;
pub mod equipment;
pub mod events;
pub mod state;
pub mod types;
