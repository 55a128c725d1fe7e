use std::path::Path;

use bevy::{
    prelude::*,
    render::{
        mesh::{Indices, PrimitiveTopology},
        render_asset::RenderAssetUsages,
    },
};
use nalgebra::Vector3;

use super::{
    config::MAX_TERRAIN_SEGMENTS, elevation::read_image, ElevationField, HeightField,
    TerrainBounds, TerrainConfig,
};
use crate::resources::errors::TerrainError;

/// Elevation field placed on a world footprint centred at the origin.
///
/// Field column 0 sits at `x = -width / 2` and row 0 at `z = -depth / 2`.
#[derive(Resource, Debug, Clone)]
pub struct TerrainSurface {
    field: ElevationField,
    width: f64,
    depth: f64,
    segments: u32,
}

impl TerrainSurface {
    pub fn new(field: ElevationField, width: f64, depth: f64, segments: u32) -> Self {
        Self {
            field,
            width,
            depth,
            segments,
        }
    }

    pub fn from_config(field: ElevationField, config: &TerrainConfig) -> Self {
        Self::new(field, config.width, config.depth, config.segments)
    }

    pub fn field(&self) -> &ElevationField {
        &self.field
    }

    pub fn segments(&self) -> u32 {
        self.segments
    }

    /// World `(x, z)` to normalised field coordinates.
    pub fn world_to_field(&self, x: f64, z: f64) -> (f64, f64) {
        (
            (x + self.width / 2.0) / self.width,
            (z + self.depth / 2.0) / self.depth,
        )
    }

    /// Displaced grid mesh at this surface's resolution.
    pub fn build_mesh(&self) -> TerrainMeshData {
        TerrainMeshData::build(&self.field, self.width, self.depth, self.segments)
    }
}

impl HeightField for TerrainSurface {
    /// Returns 0 anywhere strictly outside the footprint.
    fn height_at(&self, x: f64, z: f64) -> f64 {
        if !self.bounds().contains(x, z) {
            return 0.0;
        }
        let (u, v) = self.world_to_field(x, z);
        self.field.height_at(u, v)
    }

    fn bounds(&self) -> TerrainBounds {
        TerrainBounds::centered(self.width, self.depth)
    }
}

/// CPU-side geometry for the terrain, ready to hand to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainMeshData {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    pub indices: Vec<u32>,
}

impl TerrainMeshData {
    /// Builds a `(segments + 1)^2` vertex grid over the footprint, each vertex lifted to
    /// the field height beneath it, with smooth vertex normals.
    pub fn build(field: &ElevationField, width: f64, depth: f64, segments: u32) -> Self {
        let segments = segments.clamp(1, MAX_TERRAIN_SEGMENTS);
        let row = segments as usize + 1;
        let mut positions = Vec::with_capacity(row * row);
        let mut uvs = Vec::with_capacity(row * row);

        for i in 0..row {
            let z = -depth / 2.0 + depth * i as f64 / segments as f64;
            for j in 0..row {
                let x = -width / 2.0 + width * j as f64 / segments as f64;
                let u = (x + width / 2.0) / width;
                let v = (z + depth / 2.0) / depth;
                let y = field.height_at(u, v);

                positions.push([x as f32, y as f32, z as f32]);
                uvs.push([u as f32, v as f32]);
            }
        }

        let mut indices = Vec::with_capacity(segments as usize * segments as usize * 6);
        for i in 0..segments {
            for j in 0..segments {
                let a = i * (segments + 1) + j;
                let b = a + 1;
                let c = a + segments + 1;
                let d = c + 1;
                // Counter-clockwise seen from +Y.
                indices.extend_from_slice(&[a, c, b, b, c, d]);
            }
        }

        let normals = vertex_normals(&positions, &indices);

        Self {
            positions,
            normals,
            uvs,
            indices,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn into_mesh(self) -> Mesh {
        Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
            .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, self.positions)
            .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, self.normals)
            .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, self.uvs)
            .with_inserted_indices(Indices::U32(self.indices))
    }
}

/// Area-weighted average of adjacent face normals.
fn vertex_normals(positions: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
    let mut accum = vec![Vector3::<f64>::zeros(); positions.len()];
    let to_vec = |p: [f32; 3]| Vector3::new(p[0] as f64, p[1] as f64, p[2] as f64);

    for tri in indices.chunks_exact(3) {
        let (ia, ib, ic) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        let (a, b, c) = (to_vec(positions[ia]), to_vec(positions[ib]), to_vec(positions[ic]));
        let face = (b - a).cross(&(c - a));
        accum[ia] += face;
        accum[ib] += face;
        accum[ic] += face;
    }

    accum
        .into_iter()
        .map(|n| {
            let n = n.try_normalize(f64::EPSILON).unwrap_or_else(Vector3::y);
            [n.x as f32, n.y as f32, n.z as f32]
        })
        .collect()
}

/// Decoded colour texture for the terrain, kept as raw RGBA8.
#[derive(Resource, Debug, Clone)]
pub struct TerrainColorMap {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl TerrainColorMap {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TerrainError> {
        Ok(Self::from_image(&read_image(path.as_ref())?))
    }

    pub fn from_image(image: &image::DynamicImage) -> Self {
        let rgba = image.to_rgba8();
        Self {
            width: rgba.width(),
            height: rgba.height(),
            rgba: rgba.into_raw(),
        }
    }
}
