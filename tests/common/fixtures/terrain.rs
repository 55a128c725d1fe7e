use glider::resources::{ElevationField, TerrainConfig, TerrainSurface};
use image::{GrayImage, Luma, Rgb, RgbImage};
use std::path::Path;

pub const TEST_TERRAIN_SIZE: f64 = 3000.0;

pub fn create_flat_surface(height: f64) -> TerrainSurface {
    let field = ElevationField::flat(16, 16, height).expect("flat field");
    TerrainSurface::new(field, TEST_TERRAIN_SIZE, TEST_TERRAIN_SIZE, 16)
}

/// Surface rising linearly from 0 m on the west edge to `peak` on the east edge.
pub fn create_ramp_surface(peak: f64) -> TerrainSurface {
    let samples = (0..4)
        .flat_map(|_| (0..4).map(move |x| peak * x as f64 / 3.0))
        .collect();
    let field = ElevationField::from_samples(4, 4, samples).expect("ramp field");
    TerrainSurface::new(field, TEST_TERRAIN_SIZE, TEST_TERRAIN_SIZE, 8)
}

/// Writes a uniform grayscale heightmap and a matching colour map into `dir`.
pub fn write_test_rasters(dir: &Path, gray: u8) -> TerrainConfig {
    let heightmap_path = dir.join("heightmap.png");
    let color_map_path = dir.join("colormap.png");

    GrayImage::from_pixel(8, 8, Luma([gray]))
        .save(&heightmap_path)
        .expect("write heightmap");
    RgbImage::from_pixel(8, 8, Rgb([40, 120, 60]))
        .save(&color_map_path)
        .expect("write colour map");

    TerrainConfig {
        heightmap_path,
        color_map_path: Some(color_map_path),
        width: TEST_TERRAIN_SIZE,
        depth: TEST_TERRAIN_SIZE,
        max_height: 255.0,
        min_height: 0.0,
        segments: 8,
    }
}
