use std::path::PathBuf;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Largest grid resolution whose vertex indices still fit in `u32`.
pub const MAX_TERRAIN_SEGMENTS: u32 = 65_534;

/// Terrain asset locations and world-space mapping.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Grayscale elevation raster.
    pub heightmap_path: PathBuf,
    /// Optional colour texture draped over the mesh, same resolution as the heightmap.
    pub color_map_path: Option<PathBuf>,
    /// Footprint along X [m]
    pub width: f64,
    /// Footprint along Z [m]
    pub depth: f64,
    /// Altitude mapped from pixel value 255 [m]
    pub max_height: f64,
    /// Altitude mapped from pixel value 0 [m]
    pub min_height: f64,
    /// Mesh grid resolution (cells per side).
    pub segments: u32,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            heightmap_path: PathBuf::from("assets/heightmap.png"),
            color_map_path: Some(PathBuf::from("assets/colormap.png")),
            width: 3000.0,
            depth: 3000.0,
            max_height: 8849.0,
            min_height: 0.0,
            segments: 256,
        }
    }
}
