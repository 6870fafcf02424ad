//! Attitude and heading math.
//!
//! Pure functions over velocity and facing vectors. No state — the roll
//! smoothing memory lives in the flight computer.

use glam::DVec3;

use flightdeck_core::constants::FLIGHT_PATH_MIN_SPEED;

/// Map a raw yaw (0 = +z, clockwise positive) onto a compass heading in
/// [0,360). Holds for any real yaw, negative included.
pub fn to_heading(yaw_degrees: f64) -> f64 {
    (yaw_degrees + 180.0).rem_euclid(360.0)
}

/// Angle of the velocity vector above the horizontal plane, in degrees.
///
/// Below the minimum speed the flight path is undefined and the look pitch
/// is reported instead of a noisy angle from a near-zero vector.
pub fn flight_pitch(velocity: DVec3, fallback_pitch: f64) -> f64 {
    if velocity.length() < FLIGHT_PATH_MIN_SPEED {
        return fallback_pitch;
    }
    let n = velocity.normalize();
    90.0 - n.y.acos().to_degrees()
}

/// Compass bearing of the horizontal velocity component, in degrees.
///
/// Same near-zero guard as `flight_pitch`, falling back to the look heading.
pub fn flight_heading(velocity: DVec3, fallback_heading: f64) -> f64 {
    if velocity.length() < FLIGHT_PATH_MIN_SPEED {
        return fallback_heading;
    }
    to_heading((-velocity.x).atan2(velocity.z).to_degrees())
}

/// Instantaneous bank angle in degrees, signed by turn direction.
///
/// Derived from the angular mismatch between the horizontal facing and the
/// horizontal velocity: larger speed or larger mismatch banks harder, scaled
/// by the turning-force coefficient. Zero when either vector has no
/// horizontal component.
pub fn bank_angle(facing: DVec3, velocity: DVec3, turning_force: f64) -> f64 {
    let horizontal_facing2 = facing.x * facing.x + facing.z * facing.z;
    let horizontal_speed2 = velocity.x * velocity.x + velocity.z * velocity.z;

    if horizontal_facing2 <= 0.0 || horizontal_speed2 <= 0.0 {
        return 0.0;
    }

    let dot = (velocity.x * facing.x + velocity.z * facing.z)
        / (horizontal_facing2 * horizontal_speed2).sqrt();
    // Guard against floating-point overshoot before acos
    let dot = dot.clamp(-1.0, 1.0);

    let cross = velocity.x * facing.z - velocity.z * facing.x;
    let direction = if cross > 0.0 {
        1.0
    } else if cross < 0.0 {
        -1.0
    } else {
        0.0
    };

    (horizontal_speed2.sqrt() * dot.acos() * turning_force)
        .atan()
        .to_degrees()
        * direction
}

/// Exponential smoothing blend between this tick's bank angle and the last.
/// `smoothing` 0 passes the instantaneous angle through unchanged.
pub fn smooth_roll(instantaneous: f64, previous: f64, smoothing: f64) -> f64 {
    (1.0 - smoothing) * instantaneous + smoothing * previous
}
