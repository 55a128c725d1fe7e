mod glider;
mod input;
pub mod scene;
mod staging;
pub mod terrain;

pub use glider::GliderPlugin;
pub use input::PilotInputPlugin;
pub use scene::{ChaseCamera, ScenePlugin};
pub use staging::{AppState, GliderSet, StagingPlugin};
pub use terrain::{load_terrain, LoadedTerrain, TerrainPlugin, TerrainSource};
