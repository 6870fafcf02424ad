//! Fundamental geometric and observation types.
//!
//! World space is y-up: x and z span the horizontal plane, y is the vertical
//! axis. Yaw and pitch use the raw host convention: yaw 0 faces +z and
//! increases clockwise, pitch is positive looking down.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::equipment::ChestItem;

/// Integer cell coordinate in the world grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl GridPos {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The cell containing a world-space point.
    pub fn containing(point: DVec3) -> Self {
        Self {
            x: point.x.floor() as i32,
            y: point.y.floor() as i32,
            z: point.z.floor() as i32,
        }
    }

    /// The cell one step down.
    pub fn down(self) -> Self {
        Self {
            y: self.y - 1,
            ..self
        }
    }
}

/// Actor pose with previous-tick memory for sub-tick interpolation.
///
/// Hosts render between simulation ticks; angle reads take a fraction in
/// [0,1) and lerp from the previous tick's value to the current one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ActorPose {
    /// World-space position.
    pub position: DVec3,
    /// Yaw in degrees (0 faces +z, clockwise positive).
    pub yaw: f64,
    /// Look pitch in degrees (positive looks down).
    pub pitch: f64,
    /// Yaw at the previous tick.
    pub prev_yaw: f64,
    /// Pitch at the previous tick.
    pub prev_pitch: f64,
}

impl ActorPose {
    /// Pose with no previous-tick history (previous angles = current).
    pub fn settled(position: DVec3, yaw: f64, pitch: f64) -> Self {
        Self {
            position,
            yaw,
            pitch,
            prev_yaw: yaw,
            prev_pitch: pitch,
        }
    }

    /// Yaw interpolated by `partial` in [0,1).
    pub fn yaw_at(&self, partial: f64) -> f64 {
        lerp(self.prev_yaw, self.yaw, partial)
    }

    /// Pitch interpolated by `partial` in [0,1).
    pub fn pitch_at(&self, partial: f64) -> f64 {
        lerp(self.prev_pitch, self.pitch, partial)
    }

    /// Unit look direction at the interpolated pose.
    pub fn look_vector(&self, partial: f64) -> DVec3 {
        let yaw = self.yaw_at(partial).to_radians();
        let pitch = self.pitch_at(partial).to_radians();
        let cos_pitch = pitch.cos();
        DVec3::new(-yaw.sin() * cos_pitch, -pitch.sin(), yaw.cos() * cos_pitch)
    }

    /// The grid cell the actor occupies.
    pub fn grid_pos(&self) -> GridPos {
        GridPos::containing(self.position)
    }
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// One tick's raw inputs for the flight computer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub pose: ActorPose,
    /// Actor velocity as per-tick displacement.
    pub velocity: DVec3,
    /// Velocity of the vehicle the actor is mounted on, if any.
    pub vehicle_velocity: Option<DVec3>,
    /// Item occupying the chest equipment slot, if any.
    pub chest_item: Option<ChestItem>,
}
