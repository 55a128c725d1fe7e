use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::GliderState;

/// Read-only flight readout for HUD and debug consumers, refreshed every tick.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GliderTelemetry {
    /// Airspeed [m/s]
    pub speed: f64,
    /// Airspeed [km/h]
    pub speed_kmh: f64,
    /// Height above the zero datum [m]
    pub altitude: f64,
    pub angle_of_attack_deg: f64,
    /// Lift acceleration [m/s²]
    pub lift: f64,
    pub velocity: [f64; 3],
    pub pitch_deg: f64,
    pub roll_deg: f64,
    pub heading_deg: f64,
    pub crashed: bool,
}

impl GliderTelemetry {
    pub fn from_state(state: &GliderState) -> Self {
        let speed = state.speed();
        Self {
            speed,
            speed_kmh: speed * 3.6,
            altitude: state.altitude(),
            angle_of_attack_deg: state.angle_of_attack.to_degrees(),
            lift: state.lift,
            velocity: [state.velocity.x, state.velocity.y, state.velocity.z],
            pitch_deg: state.pitch.to_degrees(),
            roll_deg: state.roll.to_degrees(),
            heading_deg: state.yaw.to_degrees().rem_euclid(360.0),
            crashed: state.is_crashed(),
        }
    }
}
