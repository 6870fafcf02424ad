//! The flight computer — per-tick telemetry derivation for one actor.
//!
//! Construct one computer per observed actor when tracking begins; `update`
//! mutates the readout in place once per simulation tick and returns the
//! alert events the host should render. Single-threaded: hosts that render
//! from another thread snapshot the state rather than share it.

use flightdeck_core::config::HudConfig;
use flightdeck_core::constants::{ALTITUDE_DATUM_OFFSET, TICKS_PER_SECOND};
use flightdeck_core::events::{AudioEvent, SoundCategory};
use flightdeck_core::state::FlightState;
use flightdeck_core::types::Observation;
use flightdeck_terrain::{ground_level, TerrainSampler};

use crate::alerts::CooldownTimer;
use crate::attitude;

/// Per-actor telemetry state and alert memory.
pub struct FlightComputer {
    config: HudConfig,
    state: FlightState,
    previous_roll: f64,
    altitude_warning: CooldownTimer,
    audio_events: Vec<AudioEvent>,
}

impl FlightComputer {
    pub fn new(config: HudConfig) -> Self {
        let config = config.sanitized();
        Self {
            altitude_warning: CooldownTimer::new(config.warning_cooldown_ticks),
            config,
            state: FlightState::default(),
            previous_roll: 0.0,
            audio_events: Vec::new(),
        }
    }

    /// Current instrument readout.
    pub fn state(&self) -> &FlightState {
        &self.state
    }

    /// Active configuration.
    pub fn config(&self) -> &HudConfig {
        &self.config
    }

    /// Derive one tick of telemetry from a raw observation.
    ///
    /// `partial` is the sub-tick interpolation fraction in [0,1) for pose
    /// reads. Returns the alert events fired this tick, usually none.
    pub fn update<T: TerrainSampler>(
        &mut self,
        obs: &Observation,
        terrain: &T,
        partial: f64,
    ) -> Vec<AudioEvent> {
        self.state.velocity = obs.velocity;
        self.state.pitch = compute_pitch(obs, partial);
        self.state.speed = compute_speed(obs);
        self.state.roll = self.compute_roll(obs, partial);
        self.state.heading = attitude::to_heading(obs.pose.yaw_at(partial));
        self.state.altitude = compute_altitude(obs);
        self.state.ground_level = ground_level(terrain, obs.pose.grid_pos());
        self.state.distance_from_ground = self
            .state
            .ground_level
            .map(|ground| (self.state.altitude - ground as f64).max(0.0));
        self.state.flight_pitch = attitude::flight_pitch(obs.velocity, self.state.pitch);
        self.state.flight_heading = attitude::flight_heading(obs.velocity, self.state.heading);
        self.state.wing_health = obs.chest_item.and_then(|item| item.health_percent());

        self.altitude_warning.tick();
        if self.state.altitude < self.config.altitude_warning_threshold
            && self.altitude_warning.try_fire()
        {
            self.audio_events.push(AudioEvent::AltitudeWarning {
                position: obs.pose.grid_pos(),
                category: SoundCategory::Master,
                volume: 1.0,
                pitch: 1.0,
            });
        }

        std::mem::take(&mut self.audio_events)
    }

    /// Smoothed bank angle. Disabled roll leaves the filter memory untouched.
    fn compute_roll(&mut self, obs: &Observation, partial: f64) -> f64 {
        if !self.config.calculate_roll {
            return 0.0;
        }

        let facing = obs.pose.look_vector(partial);
        let instantaneous =
            attitude::bank_angle(facing, obs.velocity, self.config.roll_turning_force);
        let roll =
            attitude::smooth_roll(instantaneous, self.previous_roll, self.config.roll_smoothing);
        self.previous_roll = roll;
        roll
    }
}

/// Speed over ground in units/second; a mounted actor reads its vehicle.
fn compute_speed(obs: &Observation) -> f64 {
    let velocity = obs.vehicle_velocity.unwrap_or(obs.velocity);
    velocity.length() * TICKS_PER_SECOND
}

/// Look pitch flipped to nose-up positive.
fn compute_pitch(obs: &Observation, partial: f64) -> f64 {
    -obs.pose.pitch_at(partial)
}

fn compute_altitude(obs: &Observation) -> f64 {
    obs.pose.position.y - ALTITUDE_DATUM_OFFSET
}
