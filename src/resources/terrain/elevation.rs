use std::path::Path;

use bevy::prelude::*;
use image::DynamicImage;

use crate::resources::errors::TerrainError;

/// Discrete grid of ground altitudes decoded from a grayscale raster.
///
/// Samples are stored row-major, `y * width + x`, with row 0 at the top of the
/// source image. The field is immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct ElevationField {
    width: usize,
    height: usize,
    samples: Vec<f64>,
}

impl ElevationField {
    /// Builds a field from pre-computed heights in metres.
    pub fn from_samples(
        width: usize,
        height: usize,
        samples: Vec<f64>,
    ) -> Result<Self, TerrainError> {
        if width == 0 || height == 0 {
            return Err(TerrainError::EmptyImage { width, height });
        }
        let expected = width * height;
        if samples.len() != expected {
            return Err(TerrainError::SampleCount {
                expected,
                actual: samples.len(),
            });
        }

        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// A field where every sample has the same height.
    pub fn flat(width: usize, height: usize, value: f64) -> Result<Self, TerrainError> {
        Self::from_samples(width, height, vec![value; width * height])
    }

    /// Maps the red channel of `image` onto `[min_height, max_height]`.
    ///
    /// Heightmaps are expected to be grayscale, so the channel choice only matters
    /// for coloured input.
    pub fn from_image(
        image: &DynamicImage,
        min_height: f64,
        max_height: f64,
    ) -> Result<Self, TerrainError> {
        if min_height > max_height {
            return Err(TerrainError::InvalidRange {
                min: min_height,
                max: max_height,
            });
        }

        let rgb = image.to_rgb8();
        let (width, height) = (rgb.width() as usize, rgb.height() as usize);
        let range = max_height - min_height;
        let samples = rgb
            .pixels()
            .map(|pixel| min_height + (pixel[0] as f64 / 255.0) * range)
            .collect();

        Self::from_samples(width, height, samples)
    }

    /// Reads and decodes a heightmap from disk.
    pub fn load(
        path: impl AsRef<Path>,
        min_height: f64,
        max_height: f64,
    ) -> Result<Self, TerrainError> {
        let path = path.as_ref();
        info!("Loading heightmap from {}", path.display());
        let image = read_image(path)?;
        let field = Self::from_image(&image, min_height, max_height)?;
        info!(
            "Heightmap loaded: {}x{} samples, heights {:.1}..{:.1} m",
            field.width,
            field.height,
            field.min_sample(),
            field.max_sample()
        );
        Ok(field)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw sample at integer grid coordinates, clamped to the last row/column.
    pub fn sample(&self, x: usize, y: usize) -> f64 {
        let x = x.min(self.width - 1);
        let y = y.min(self.height - 1);
        self.samples[y * self.width + x]
    }

    pub fn min_sample(&self) -> f64 {
        self.samples.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn max_sample(&self) -> f64 {
        self.samples.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Bilinearly interpolated height at normalised field coordinates.
    ///
    /// `u` runs along image columns and `v` along image rows; both are clamped to
    /// `[0, 1]`. The `+1` neighbour is clamped at the last row/column, never wrapped.
    pub fn height_at(&self, u: f64, v: f64) -> f64 {
        let u = clamp_unit(u);
        let v = clamp_unit(v);

        let px = u * (self.width - 1) as f64;
        let py = v * (self.height - 1) as f64;

        let x0 = px.floor() as usize;
        let y0 = py.floor() as usize;
        let x1 = (x0 + 1).min(self.width - 1);
        let y1 = (y0 + 1).min(self.height - 1);

        let fx = px - x0 as f64;
        let fy = py - y0 as f64;

        let h00 = self.sample(x0, y0);
        let h10 = self.sample(x1, y0);
        let h01 = self.sample(x0, y1);
        let h11 = self.sample(x1, y1);

        let h0 = lerp(h00, h10, fx);
        let h1 = lerp(h01, h11, fx);
        lerp(h0, h1, fy)
    }
}

/// Reads the file first so a missing or unreadable asset surfaces as an IO error.
pub(crate) fn read_image(path: &Path) -> Result<DynamicImage, TerrainError> {
    let bytes = std::fs::read(path)?;
    Ok(image::load_from_memory(&bytes)?)
}

/// `a * (1 - t) + b * t`, written so equal endpoints come back bit-exact.
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
