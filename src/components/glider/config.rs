use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Tuning for the arcade flight model.
///
/// None of these are physical constants; they are empirically chosen so the glider
/// feels right. Angles are radians, rates are per second.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GliderConfig {
    pub name: String,
    /// Spawn and reset position [m]
    pub initial_position: Vector3<f64>,
    /// Spawn and reset velocity [m/s]
    pub initial_velocity: Vector3<f64>,

    /// Gravitational acceleration [m/s²]
    pub gravity: f64,
    /// Longest step integrated in one tick [s]
    pub max_timestep: f64,

    // Attitude response
    pub pitch_rate: f64,
    pub roll_rate: f64,
    /// Yaw rate at full bank and reference speed.
    pub yaw_gain: f64,
    /// Speed at which `yaw_gain` applies unscaled [m/s]
    pub reference_speed: f64,
    /// Roll input magnitude below which the wings self-level.
    pub roll_deadzone: f64,
    /// Exponential self-levelling rate [1/s]
    pub roll_level_rate: f64,

    // Speed envelope
    /// Stall speed; no lift at or below it [m/s]
    pub min_speed: f64,
    pub max_speed: f64,

    // Lift
    pub lift_coefficient: f64,
    /// Speed at which lift reaches `lift_coefficient * g` [m/s]
    pub reference_lift_speed: f64,
    /// Upper bound on the `speed / reference_lift_speed` factor.
    pub max_lift_factor: f64,

    // Drag
    pub base_drag: f64,
    /// Pitch above which extra nose-up drag applies.
    pub nose_up_threshold: f64,
    pub nose_up_drag: f64,
    pub angle_of_attack_drag: f64,
    /// Drag is skipped at or below this speed [m/s]
    pub drag_min_speed: f64,

    // Dive boost
    /// Pitch below which diving converts height into forward speed.
    pub dive_threshold: f64,
    pub dive_boost: f64,
}

impl Default for GliderConfig {
    fn default() -> Self {
        Self {
            name: "Glider".to_string(),
            initial_position: Vector3::new(0.0, 1000.0, 0.0),
            initial_velocity: Vector3::new(0.0, 0.0, -20.0),
            gravity: 9.81,
            max_timestep: 0.1,
            pitch_rate: 1.0,
            roll_rate: 1.5,
            yaw_gain: 0.8,
            reference_speed: 20.0,
            roll_deadzone: 0.1,
            roll_level_rate: 0.5,
            min_speed: 8.0,
            max_speed: 70.0,
            lift_coefficient: 0.6,
            reference_lift_speed: 25.0,
            max_lift_factor: 1.5,
            base_drag: 0.002,
            nose_up_threshold: 0.1,
            nose_up_drag: 0.05,
            angle_of_attack_drag: 0.02,
            drag_min_speed: 0.1,
            dive_threshold: -0.1,
            dive_boost: 3.0,
        }
    }
}

impl GliderConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.min_speed < 0.0 || self.min_speed >= self.max_speed {
            return Err(format!(
                "min_speed ({}) must be non-negative and below max_speed ({})",
                self.min_speed, self.max_speed
            ));
        }
        if self.reference_speed <= 0.0 || self.reference_lift_speed <= 0.0 {
            return Err("reference speeds must be positive".to_string());
        }
        if self.max_timestep <= 0.0 {
            return Err(format!("max_timestep ({}) must be positive", self.max_timestep));
        }
        if self.roll_level_rate < 0.0 {
            return Err("roll_level_rate must not be negative".to_string());
        }
        Ok(())
    }
}
