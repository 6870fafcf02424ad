//! Instrument constants and tuning defaults.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 20;

/// Conversion factor from per-tick displacement to a per-second rate.
pub const TICKS_PER_SECOND: f64 = TICK_RATE as f64;

// --- Flight path ---

/// Velocity magnitude (units/tick) below which the flight path is undefined
/// and the instruments fall back to the look direction.
pub const FLIGHT_PATH_MIN_SPEED: f64 = 0.01;

// --- Altitude ---

/// The altitude readout references the actor's base, one unit below its
/// position.
pub const ALTITUDE_DATUM_OFFSET: f64 = 1.0;

// --- Alerts ---

/// Minimum ticks between repeated altitude warnings while the breach
/// persists.
pub const WARNING_COOLDOWN_TICKS: u8 = 100;

/// Altitude below which the warning sounds.
pub const DEFAULT_ALTITUDE_WARNING_THRESHOLD: f64 = 0.0;

// --- Roll ---

/// Default force coefficient scaling speed and heading mismatch into bank
/// angle.
pub const DEFAULT_ROLL_TURNING_FORCE: f64 = 15.0;

/// Default exponential smoothing factor for the bank indicator.
pub const DEFAULT_ROLL_SMOOTHING: f64 = 0.9;
