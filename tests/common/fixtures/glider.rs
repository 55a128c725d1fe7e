use glider::{components::GliderConfig, resources::PhysicsConfig};
use nalgebra::Vector3;

pub const TEST_TIMESTEP: f64 = 1.0 / 60.0;

pub fn create_test_physics_config() -> PhysicsConfig {
    PhysicsConfig::fixed(TEST_TIMESTEP)
}

/// Default glider spawned at a chosen point, heading north at 20 m/s.
pub fn create_test_glider_config(position: Vector3<f64>) -> GliderConfig {
    GliderConfig {
        name: "test_glider".to_string(),
        initial_position: position,
        ..Default::default()
    }
}
