use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Edge-of-world steering.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundaryConfig {
    /// Margin inside the footprint edge where corrective steering starts [m]
    pub buffer: f64,
    /// Fraction of the heading error removed per tick at full strength.
    pub steering_gain: f64,
}

impl Default for BoundaryConfig {
    fn default() -> Self {
        Self {
            buffer: 100.0,
            steering_gain: 0.02,
        }
    }
}
