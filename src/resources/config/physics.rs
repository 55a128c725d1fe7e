use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Simulation clock settings.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// When set, every tick advances by this many seconds instead of the frame delta.
    pub fixed_timestep: Option<f64>,
}

impl PhysicsConfig {
    pub fn fixed(timestep: f64) -> Self {
        Self {
            fixed_timestep: Some(timestep),
        }
    }

    /// Seconds to integrate this tick.
    pub fn tick_delta(&self, frame_delta: f64) -> f64 {
        self.fixed_timestep.unwrap_or(frame_delta)
    }
}
