pub mod config;
pub mod elevation;
pub mod height_field;
pub mod surface;

pub use config::{TerrainConfig, MAX_TERRAIN_SEGMENTS};
pub use elevation::ElevationField;
pub use height_field::{HeightField, TerrainBounds};
pub use surface::{TerrainColorMap, TerrainMeshData, TerrainSurface};
