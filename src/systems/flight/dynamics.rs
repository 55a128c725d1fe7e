use bevy::prelude::*;
use nalgebra::Vector3;

use crate::{
    components::{
        glider::{MAX_PITCH, MAX_ROLL},
        CrashEvent, GliderConfig, GliderControls, GliderState,
    },
    resources::{HeightField, PhysicsConfig, TerrainSurface},
};

/// Result of advancing one glider by one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome {
    /// Still airborne.
    Flying,
    /// Touched down this tick.
    Impact { ground_height: f64 },
    /// Already crashed; nothing was integrated.
    Grounded,
}

/// System advancing every glider by one tick.
///
/// Uses the fixed timestep from [`PhysicsConfig`] when set, otherwise the frame delta.
/// Ground height comes from the loaded [`TerrainSurface`]; without one the ground is
/// the zero plane.
pub fn glider_dynamics_system(
    mut query: Query<(Entity, &mut GliderState, &GliderControls, &GliderConfig)>,
    terrain: Option<Res<TerrainSurface>>,
    physics: Res<PhysicsConfig>,
    time: Res<Time>,
    mut crashes: EventWriter<CrashEvent>,
) {
    let dt = physics.tick_delta(time.delta_secs_f64());
    let terrain = terrain.as_deref().map(|surface| surface as &dyn HeightField);

    for (entity, mut state, controls, config) in query.iter_mut() {
        if let StepOutcome::Impact { ground_height } =
            step_glider(&mut state, controls, config, terrain, dt)
        {
            warn!(
                "{} crashed at ({:.1}, {:.1}, {:.1}), ground {:.1} m",
                config.name, state.position.x, state.position.y, state.position.z, ground_height
            );
            crashes.send(CrashEvent {
                entity,
                position: state.position,
                ground_height,
            });
        }
    }
}

/// Advances a glider by `dt` seconds of flight.
///
/// Order matters: attitude first, then gravity, lift, drag and dive boost as velocity
/// increments, the speed cap, position, and finally the ground check.
pub fn step_glider(
    state: &mut GliderState,
    controls: &GliderControls,
    config: &GliderConfig,
    terrain: Option<&dyn HeightField>,
    dt: f64,
) -> StepOutcome {
    if state.is_crashed() {
        return StepOutcome::Grounded;
    }

    // Frame hitches collapse to one capped step.
    let dt = dt.clamp(0.0, config.max_timestep);
    let (pitch_input, roll_input) = controls.sanitized();
    let speed = state.speed();

    update_attitude(state, pitch_input, roll_input, speed, config, dt);
    apply_forces(state, speed, config, dt);

    state.position += state.velocity * dt;

    let ground_height = terrain
        .map(|field| field.height_at(state.position.x, state.position.z))
        .unwrap_or(0.0);
    if state.position.y < ground_height {
        state.crash();
        return StepOutcome::Impact { ground_height };
    }

    StepOutcome::Flying
}

/// Integrates the stick into pitch and roll, and bank into a coordinated turn.
fn update_attitude(
    state: &mut GliderState,
    pitch_input: f64,
    roll_input: f64,
    speed: f64,
    config: &GliderConfig,
    dt: f64,
) {
    state.pitch = (state.pitch + pitch_input * config.pitch_rate * dt).clamp(-MAX_PITCH, MAX_PITCH);
    state.roll = (state.roll + roll_input * config.roll_rate * dt).clamp(-MAX_ROLL, MAX_ROLL);

    let yaw_rate = state.roll.sin() * config.yaw_gain * speed / config.reference_speed;
    state.yaw += yaw_rate * dt;

    if roll_input.abs() < config.roll_deadzone {
        state.roll *= (-config.roll_level_rate * dt).exp();
    }

    state.update_attitude();
}

/// Applies gravity, lift, drag and dive boost, then caps speed.
///
/// `speed` is the airspeed at the start of the tick and gates lift.
fn apply_forces(state: &mut GliderState, speed: f64, config: &GliderConfig, dt: f64) {
    let forward = state.forward();
    let up = state.up();

    state.velocity.y -= config.gravity * dt;

    // A zero velocity has no direction, which reads as a right angle to the nose.
    let flight_path = state
        .velocity
        .try_normalize(f64::EPSILON)
        .unwrap_or_else(Vector3::zeros);
    state.angle_of_attack = forward.dot(&flight_path).clamp(-1.0, 1.0).acos();

    state.lift = if speed > config.min_speed {
        let speed_factor = (speed / config.reference_lift_speed).min(config.max_lift_factor);
        config.lift_coefficient * speed_factor * state.pitch.cos() * config.gravity
    } else {
        0.0
    };
    state.velocity += up * state.lift * dt;

    let current_speed = state.speed();
    if current_speed > config.drag_min_speed {
        let nose_up = if state.pitch > config.nose_up_threshold {
            state.pitch * config.nose_up_drag
        } else {
            0.0
        };
        let coefficient =
            config.base_drag + nose_up + state.angle_of_attack * config.angle_of_attack_drag;
        let drag = current_speed * current_speed * coefficient * dt;
        state.velocity -= state.velocity / current_speed * drag;
    }

    if state.pitch < config.dive_threshold
        && state.velocity.y < 0.0
        && state.speed() < config.max_speed
    {
        state.velocity += forward * (state.pitch.abs() * config.dive_boost * dt);
    }

    let final_speed = state.speed();
    if final_speed > config.max_speed {
        state.velocity *= config.max_speed / final_speed;
    }
}
