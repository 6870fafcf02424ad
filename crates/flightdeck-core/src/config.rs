//! Instrument configuration with JSON persistence.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_ALTITUDE_WARNING_THRESHOLD, DEFAULT_ROLL_SMOOTHING, DEFAULT_ROLL_TURNING_FORCE,
    WARNING_COOLDOWN_TICKS,
};

/// Tuning knobs for the flight computer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HudConfig {
    /// Whether the bank-angle indicator is computed at all.
    pub calculate_roll: bool,
    /// Force coefficient scaling speed and heading mismatch into bank angle.
    pub roll_turning_force: f64,
    /// Exponential smoothing factor for roll, in [0,1). 0 = no smoothing.
    pub roll_smoothing: f64,
    /// Altitude below which the warning sounds.
    pub altitude_warning_threshold: f64,
    /// Minimum ticks between repeated altitude warnings.
    pub warning_cooldown_ticks: u8,
}

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            calculate_roll: true,
            roll_turning_force: DEFAULT_ROLL_TURNING_FORCE,
            roll_smoothing: DEFAULT_ROLL_SMOOTHING,
            altitude_warning_threshold: DEFAULT_ALTITUDE_WARNING_THRESHOLD,
            warning_cooldown_ticks: WARNING_COOLDOWN_TICKS,
        }
    }
}

impl HudConfig {
    /// Clamp loaded values into their valid ranges.
    ///
    /// The smoothing filter diverges at 1.0 and the cooldown counter can
    /// never re-arm at 0, so both are pulled back in bounds.
    pub fn sanitized(mut self) -> Self {
        if !self.roll_smoothing.is_finite() {
            self.roll_smoothing = DEFAULT_ROLL_SMOOTHING;
        }
        self.roll_smoothing = self.roll_smoothing.clamp(0.0, 0.999);
        self.warning_cooldown_ticks = self.warning_cooldown_ticks.max(1);
        self
    }
}

pub fn load_from_file(path: &Path) -> Result<HudConfig, String> {
    let json =
        fs::read_to_string(path).map_err(|e| format!("Failed to read config file: {e}"))?;
    let config: HudConfig =
        serde_json::from_str(&json).map_err(|e| format!("Failed to parse config: {e}"))?;
    Ok(config.sanitized())
}

pub fn save_to_file(path: &Path, config: &HudConfig) -> Result<(), String> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| format!("Failed to create config directory: {e}"))?;
    }
    let json = serde_json::to_string_pretty(config)
        .map_err(|e| format!("Failed to serialize config: {e}"))?;
    fs::write(path, json).map_err(|e| format!("Failed to write config file: {e}"))?;
    Ok(())
}
