use bevy::prelude::*;
use nalgebra::Vector3;

/// Sent once when a glider touches the ground.
#[derive(Event, Debug, Clone)]
pub struct CrashEvent {
    pub entity: Entity,
    /// Where the glider came to rest [m]
    pub position: Vector3<f64>,
    /// Terrain height beneath it [m]
    pub ground_height: f64,
}

/// Asks for a glider to be put back at its spawn state.
#[derive(Event, Debug, Clone, Copy)]
pub struct ResetRequest {
    /// `None` resets every glider.
    pub entity: Option<Entity>,
}
