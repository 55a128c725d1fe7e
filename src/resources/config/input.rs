use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Keyboard ramp and pointer drag tuning.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Axis change per tick while a key is held.
    pub key_step: f64,
    /// Multiplicative decay per tick with no key held on an axis.
    pub decay: f64,
    /// Drag distance giving full deflection [px]
    pub pointer_window: f64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            key_step: 0.05,
            decay: 0.9,
            pointer_window: 100.0,
        }
    }
}
