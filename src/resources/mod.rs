pub mod config;
pub mod errors;
pub mod input;
pub mod terrain;

pub use config::{BoundaryConfig, InputConfig, PhysicsConfig, SimulationConfig};
pub use errors::{ConfigError, TerrainError};
pub use input::{DragSpan, InputAxes, PointerDrag};
pub use terrain::{
    ElevationField, HeightField, TerrainBounds, TerrainColorMap, TerrainConfig, TerrainMeshData,
    TerrainSurface, MAX_TERRAIN_SEGMENTS,
};
