use serde::{Deserialize, Serialize};

/// Axis-aligned playable footprint in world metres (X east, Z south).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TerrainBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_z: f64,
    pub max_z: f64,
}

impl TerrainBounds {
    /// Footprint of `width x depth` metres centred on the origin.
    pub fn centered(width: f64, depth: f64) -> Self {
        Self {
            min_x: -width / 2.0,
            max_x: width / 2.0,
            min_z: -depth / 2.0,
            max_z: depth / 2.0,
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn depth(&self) -> f64 {
        self.max_z - self.min_z
    }

    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_x + self.max_x) / 2.0,
            (self.min_z + self.max_z) / 2.0,
        )
    }

    /// Inclusive containment test; the edges themselves are inside.
    pub fn contains(&self, x: f64, z: f64) -> bool {
        x >= self.min_x && x <= self.max_x && z >= self.min_z && z <= self.max_z
    }
}

/// Ground height lookup shared by the flight model and the boundary controller.
///
/// Implementations must be pure: the same `(x, z)` always yields the same height.
/// The raster-backed [`TerrainSurface`](super::TerrainSurface) is the only provider
/// today; a streamed provider would slot in behind the same trait.
pub trait HeightField: Send + Sync {
    /// Ground altitude in metres at world coordinates `(x, z)`.
    fn height_at(&self, x: f64, z: f64) -> f64;

    /// Rectangular footprint this field covers.
    fn bounds(&self) -> TerrainBounds;
}
