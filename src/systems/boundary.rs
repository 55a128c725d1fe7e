use bevy::prelude::*;
use nalgebra::Vector3;

use crate::{
    components::GliderState,
    resources::{BoundaryConfig, HeightField, TerrainBounds, TerrainSurface},
};

/// Turns gliders back toward the middle of the map as they near its edge.
pub fn boundary_system(
    mut query: Query<&mut GliderState>,
    terrain: Option<Res<TerrainSurface>>,
    config: Res<BoundaryConfig>,
) {
    let Some(terrain) = terrain else {
        return;
    };
    let bounds = terrain.bounds();

    for mut state in query.iter_mut() {
        if let Some(correction) = check_and_correct(&mut state, &bounds, &config) {
            debug!(
                "Boundary correction {:.4} rad at ({:.0}, {:.0})",
                correction, state.position.x, state.position.z
            );
        }
    }
}

/// How far past `bound - buffer` the glider is on each horizontal axis [m].
///
/// Values are negative while inside the buffered interior.
pub fn buffer_penetration(
    position: &Vector3<f64>,
    bounds: &TerrainBounds,
    buffer: f64,
) -> (f64, f64) {
    let x = (position.x - (bounds.max_x - buffer)).max((bounds.min_x + buffer) - position.x);
    let z = (position.z - (bounds.max_z - buffer)).max((bounds.min_z + buffer) - position.z);
    (x, z)
}

/// Nudges the heading toward the map centre when inside the edge buffer.
///
/// Strength grows linearly with the deepest penetration, reaching 1 at the edge.
/// Returns the yaw correction applied, or `None` when the glider is well inside.
pub fn check_and_correct(
    state: &mut GliderState,
    bounds: &TerrainBounds,
    config: &BoundaryConfig,
) -> Option<f64> {
    let (penetration_x, penetration_z) = buffer_penetration(&state.position, bounds, config.buffer);
    if penetration_x <= 0.0 && penetration_z <= 0.0 {
        return None;
    }

    let (center_x, center_z) = bounds.center();
    let direction = Vector3::new(center_x - state.position.x, 0.0, center_z - state.position.z)
        .try_normalize(f64::EPSILON)?;
    let strength = (penetration_x.max(penetration_z) / config.buffer).clamp(0.0, 1.0);

    Some(state.apply_boundary_force(&direction, strength, config.steering_gain))
}
