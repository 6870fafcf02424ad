//! The flight instrument readout.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Instrument readout for one observed actor, recomputed in place each tick.
///
/// `None` means "not computable this tick" — no ground found within the
/// world, no flight equipment worn. The display layer decides how to show
/// N/A.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlightState {
    /// Raw actor velocity (world units per tick).
    pub velocity: DVec3,
    /// Speed (world units per second).
    pub speed: f64,
    /// Look pitch in degrees, nose-up positive.
    pub pitch: f64,
    /// Compass heading of the look direction, degrees in [0,360).
    pub heading: f64,
    /// Angle of the velocity vector above the horizontal plane (degrees).
    pub flight_pitch: f64,
    /// Compass bearing of the horizontal velocity component, degrees in [0,360).
    pub flight_heading: f64,
    /// Smoothed bank angle in degrees; sign encodes the turn direction.
    pub roll: f64,
    /// Vertical position of the actor's base.
    pub altitude: f64,
    /// Vertical coordinate of the first solid cell below the actor.
    pub ground_level: Option<i32>,
    /// Clearance above the detected ground, never negative.
    pub distance_from_ground: Option<f64>,
    /// Remaining wing durability in percent [0,100].
    pub wing_health: Option<f64>,
}
