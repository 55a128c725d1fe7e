use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{BoundaryConfig, InputConfig, PhysicsConfig};
use crate::{
    components::GliderConfig,
    resources::{
        errors::ConfigError,
        terrain::{TerrainConfig, MAX_TERRAIN_SEGMENTS},
    },
};

/// Everything needed to start a session, loadable from YAML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub terrain: TerrainConfig,
    pub glider: GliderConfig,
    pub boundary: BoundaryConfig,
    pub input: InputConfig,
    pub physics: PhysicsConfig,
}

impl SimulationConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = std::fs::File::open(path)?;
        let config: Self = serde_yaml::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let terrain = &self.terrain;
        if terrain.width <= 0.0 || terrain.depth <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "terrain footprint must be positive, got {}x{}",
                terrain.width, terrain.depth
            )));
        }
        if terrain.segments == 0 || terrain.segments > MAX_TERRAIN_SEGMENTS {
            return Err(ConfigError::ValidationError(format!(
                "terrain segments must be in 1..={MAX_TERRAIN_SEGMENTS}, got {}",
                terrain.segments
            )));
        }
        if terrain.max_height < terrain.min_height {
            return Err(ConfigError::ValidationError(format!(
                "terrain max_height ({}) is below min_height ({})",
                terrain.max_height, terrain.min_height
            )));
        }
        if self.boundary.buffer <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "boundary buffer must be positive, got {}",
                self.boundary.buffer
            )));
        }
        if let Some(dt) = self.physics.fixed_timestep {
            if dt <= 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "fixed_timestep must be positive, got {dt}"
                )));
            }
        }
        self.glider
            .validate()
            .map_err(ConfigError::ValidationError)
    }
}
