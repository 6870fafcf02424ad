//! Events emitted by the flight computer for the host's audio layer.

use serde::{Deserialize, Serialize};

use crate::types::GridPos;

/// Sound mixer category the host routes an event through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundCategory {
    #[default]
    Master,
    Ambient,
    Players,
}

/// Audio events for the host sound system.
///
/// The computer decides *when* an event fires; the host decides how it is
/// rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// Altitude dropped below the warning threshold.
    AltitudeWarning {
        /// Cell to play the sound at.
        position: GridPos,
        category: SoundCategory,
        volume: f32,
        pitch: f32,
    },
}
