use approx::assert_relative_eq;
use glider::components::{GliderState, MAX_PITCH, MAX_ROLL};
use nalgebra::Vector3;

/// Assert that a glider's state is finite and within its attitude limits
#[track_caller]
pub fn assert_glider_state_valid(state: &GliderState) {
    assert!(
        state.position.iter().all(|x| x.is_finite()),
        "Position is not finite: {:?}",
        state.position
    );
    assert!(
        state.velocity.iter().all(|x| x.is_finite()),
        "Velocity is not finite: {:?}",
        state.velocity
    );
    assert!(
        state.pitch.abs() <= MAX_PITCH + 1e-12,
        "Pitch {} exceeds limit",
        state.pitch
    );
    assert!(
        state.roll.abs() <= MAX_ROLL + 1e-12,
        "Roll {} exceeds limit",
        state.roll
    );
    assert!(state.yaw.is_finite(), "Yaw is not finite");
    assert_relative_eq!(state.attitude.norm(), 1.0, epsilon = 1e-9);
}

/// Assert that two positions are equal within tolerance
#[track_caller]
pub fn assert_position_eq(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    assert_relative_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_relative_eq!(actual.y, expected.y, epsilon = epsilon);
    assert_relative_eq!(actual.z, expected.z, epsilon = epsilon);
}
