use bevy::{
    prelude::*,
    tasks::{block_on, AsyncComputeTaskPool, Task},
};
use futures_lite::future;

use crate::{
    plugins::{AppState, StagingPlugin},
    resources::{
        ElevationField, HeightField, TerrainColorMap, TerrainConfig, TerrainError,
        TerrainSurface,
    },
};

/// Where the terrain comes from.
#[derive(Clone)]
pub enum TerrainSource {
    /// Decode the rasters named in the config on a background thread.
    Assets(TerrainConfig),
    /// Use an already built surface.
    Surface(TerrainSurface),
}

/// Everything produced by a terrain load.
pub struct LoadedTerrain {
    pub surface: TerrainSurface,
    pub color_map: Option<TerrainColorMap>,
}

#[derive(Resource)]
struct TerrainLoadTask(Task<Result<LoadedTerrain, TerrainError>>);

/// Loads the terrain and gates the simulation on it.
///
/// The session stays in [`AppState::LoadingTerrain`] until the surface resource is
/// available. A failed load is fatal and exits the app with an error.
pub struct TerrainPlugin {
    source: TerrainSource,
}

impl TerrainPlugin {
    pub fn new(source: TerrainSource) -> Self {
        Self { source }
    }

    pub fn with_config(config: TerrainConfig) -> Self {
        Self::new(TerrainSource::Assets(config))
    }

    pub fn with_surface(surface: TerrainSurface) -> Self {
        Self::new(TerrainSource::Surface(surface))
    }
}

impl Plugin for TerrainPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<StagingPlugin>() {
            app.add_plugins(StagingPlugin);
        }

        match &self.source {
            TerrainSource::Assets(config) => {
                app.insert_resource(config.clone())
                    .add_systems(Startup, start_terrain_load)
                    .add_systems(
                        Update,
                        poll_terrain_load.run_if(in_state(AppState::LoadingTerrain)),
                    );
            }
            TerrainSource::Surface(surface) => {
                app.insert_resource(surface.clone())
                    .add_systems(Startup, |mut next: ResMut<NextState<AppState>>| {
                        next.set(AppState::Flying)
                    });
            }
        }
    }
}

/// Decodes the heightmap and optional colour map described by `config`.
pub fn load_terrain(config: &TerrainConfig) -> Result<LoadedTerrain, TerrainError> {
    let field = ElevationField::load(&config.heightmap_path, config.min_height, config.max_height)?;

    let color_map = match &config.color_map_path {
        Some(path) => {
            let map = TerrainColorMap::load(path)?;
            if (map.width as usize, map.height as usize) != (field.width(), field.height()) {
                warn!(
                    "Colour map {}x{} does not match heightmap {}x{}",
                    map.width,
                    map.height,
                    field.width(),
                    field.height()
                );
            }
            Some(map)
        }
        None => None,
    };

    Ok(LoadedTerrain {
        surface: TerrainSurface::from_config(field, config),
        color_map,
    })
}

fn start_terrain_load(mut commands: Commands, config: Res<TerrainConfig>) {
    let config = config.clone();
    let task = AsyncComputeTaskPool::get().spawn(async move { load_terrain(&config) });
    commands.insert_resource(TerrainLoadTask(task));
}

fn poll_terrain_load(
    mut commands: Commands,
    task: Option<ResMut<TerrainLoadTask>>,
    mut next_state: ResMut<NextState<AppState>>,
    mut exit: EventWriter<AppExit>,
) {
    let Some(mut task) = task else {
        return;
    };
    let Some(result) = block_on(future::poll_once(&mut task.0)) else {
        return;
    };
    commands.remove_resource::<TerrainLoadTask>();

    match result {
        Ok(loaded) => {
            let bounds = loaded.surface.bounds();
            info!(
                "Terrain ready: {}x{} samples over {:.0}x{:.0} m",
                loaded.surface.field().width(),
                loaded.surface.field().height(),
                bounds.width(),
                bounds.depth(),
            );
            commands.insert_resource(loaded.surface);
            if let Some(color_map) = loaded.color_map {
                commands.insert_resource(color_map);
            }
            next_state.set(AppState::Flying);
        }
        Err(err) => {
            error!("Terrain failed to load: {err}");
            exit.send(AppExit::error());
        }
    }
}
