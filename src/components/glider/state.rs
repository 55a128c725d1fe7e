use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, PI, TAU};

use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use super::GliderConfig;

/// Pitch magnitude limit [rad]
pub const MAX_PITCH: f64 = FRAC_PI_3;
/// Roll magnitude limit [rad]
pub const MAX_ROLL: f64 = FRAC_PI_2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FlightMode {
    #[default]
    Flying,
    /// Terminal until an explicit reset.
    Crashed,
}

/// Kinematic and attitude state of a glider.
///
/// World frame is Y-up with the glider initially facing -Z. `yaw` is a heading,
/// positive turning the nose toward +X; `roll` is positive with the right wing down;
/// `pitch` is positive nose-up.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GliderState {
    /// Position in world space, Y is altitude [m]
    pub position: Vector3<f64>,
    /// Linear velocity in world space [m/s]
    pub velocity: Vector3<f64>,
    pub pitch: f64,
    pub roll: f64,
    pub yaw: f64,
    /// Rotation from body to world frame, derived from the Euler angles.
    pub attitude: UnitQuaternion<f64>,
    pub mode: FlightMode,
    /// Angle between the nose and the flight path on the last tick [rad]
    pub angle_of_attack: f64,
    /// Lift acceleration applied on the last tick [m/s²]
    pub lift: f64,
}

impl Default for GliderState {
    fn default() -> Self {
        Self::from_config(&GliderConfig::default())
    }
}

impl GliderState {
    pub fn new(position: Vector3<f64>, velocity: Vector3<f64>) -> Self {
        Self {
            position,
            velocity,
            pitch: 0.0,
            roll: 0.0,
            yaw: 0.0,
            attitude: UnitQuaternion::identity(),
            mode: FlightMode::Flying,
            angle_of_attack: 0.0,
            lift: 0.0,
        }
    }

    pub fn from_config(config: &GliderConfig) -> Self {
        Self::new(config.initial_position, config.initial_velocity)
    }

    /// Restores the spawn state and clears a crash.
    pub fn reset(&mut self, config: &GliderConfig) {
        *self = Self::from_config(config);
    }

    pub fn is_crashed(&self) -> bool {
        self.mode == FlightMode::Crashed
    }

    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }

    pub fn altitude(&self) -> f64 {
        self.position.y
    }

    /// Nose direction in world space.
    pub fn forward(&self) -> Vector3<f64> {
        self.attitude * -Vector3::z()
    }

    /// Canopy direction in world space.
    pub fn up(&self) -> Vector3<f64> {
        self.attitude * Vector3::y()
    }

    pub fn update_attitude(&mut self) {
        self.attitude = attitude_from_euler(self.yaw, self.pitch, self.roll);
    }

    /// Stops the glider where it is.
    pub fn crash(&mut self) {
        self.velocity = Vector3::zeros();
        self.mode = FlightMode::Crashed;
    }

    /// Steers the heading a step toward `direction_to_center`.
    ///
    /// The heading error is wrapped into `(-π, π]` and scaled by `strength` (clamped to
    /// `[0, 1]`) and `gain`. Returns the yaw change applied; crashed gliders and
    /// degenerate directions are left untouched.
    pub fn apply_boundary_force(
        &mut self,
        direction_to_center: &Vector3<f64>,
        strength: f64,
        gain: f64,
    ) -> f64 {
        if self.is_crashed() || (direction_to_center.x == 0.0 && direction_to_center.z == 0.0) {
            return 0.0;
        }

        let target = direction_to_center.x.atan2(-direction_to_center.z);
        let error = normalize_angle(target - self.yaw);
        let correction = error * strength.clamp(0.0, 1.0) * gain;

        self.yaw += correction;
        self.update_attitude();
        correction
    }
}

/// Yaw outermost, then pitch, then roll.
pub fn attitude_from_euler(yaw: f64, pitch: f64, roll: f64) -> UnitQuaternion<f64> {
    UnitQuaternion::from_axis_angle(&Vector3::y_axis(), -yaw)
        * UnitQuaternion::from_axis_angle(&Vector3::x_axis(), pitch)
        * UnitQuaternion::from_axis_angle(&Vector3::z_axis(), -roll)
}

/// Wraps an angle into `(-π, π]`.
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped > PI {
        wrapped - TAU
    } else {
        wrapped
    }
}
