use bevy::prelude::*;

/// Session lifecycle. Nothing flies until the terrain is ready.
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum AppState {
    #[default]
    LoadingTerrain,
    Flying,
}

/// Per-tick ordering of the simulation, run strictly in sequence.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum GliderSet {
    Input,
    Dynamics,
    Boundary,
    Telemetry,
}

pub struct StagingPlugin;

impl Plugin for StagingPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>().configure_sets(
            Update,
            (
                GliderSet::Input,
                GliderSet::Dynamics,
                GliderSet::Boundary,
                GliderSet::Telemetry,
            )
                .chain()
                .run_if(in_state(AppState::Flying)),
        );
    }
}
