use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Normalised stick position for one tick.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GliderControls {
    /// Nose-up positive, nominally in `[-1, 1]`.
    pub pitch: f64,
    /// Right-bank positive, nominally in `[-1, 1]`.
    pub roll: f64,
}

impl GliderControls {
    pub fn new(pitch: f64, roll: f64) -> Self {
        Self { pitch, roll }
    }

    /// Axes clamped to `[-1, 1]`, with NaN read as centred.
    pub fn sanitized(&self) -> (f64, f64) {
        (sanitize_axis(self.pitch), sanitize_axis(self.roll))
    }
}

fn sanitize_axis(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-1.0, 1.0)
    }
}
