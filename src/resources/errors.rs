use thiserror::Error;

/// Failures while turning a raster asset into an elevation field.
#[derive(Error, Debug)]
pub enum TerrainError {
    #[error("Failed to decode image: {0}")]
    Image(#[from] image::ImageError),
    #[error("Failed to read terrain asset: {0}")]
    Io(#[from] std::io::Error),
    #[error("Elevation grid is empty ({width}x{height})")]
    EmptyImage { width: usize, height: usize },
    #[error("Expected {expected} height samples, got {actual}")]
    SampleCount { expected: usize, actual: usize },
    #[error("Invalid height range: min {min} is above max {max}")]
    InvalidRange { min: f64, max: f64 },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid simulation configuration: {0}")]
    ValidationError(String),
}
