use bevy::prelude::*;

use crate::{
    components::{
        CrashEvent, GliderConfig, GliderControls, GliderState, GliderTelemetry, PlayerController,
        ResetRequest,
    },
    plugins::{GliderSet, StagingPlugin},
    resources::{BoundaryConfig, PhysicsConfig, SimulationConfig},
    systems::{boundary_system, glider_dynamics_system, glider_reset_system, telemetry_system},
};

/// Spawns the player's glider and runs its per-tick simulation.
pub struct GliderPlugin {
    config: GliderConfig,
    boundary: BoundaryConfig,
    physics: PhysicsConfig,
}

impl GliderPlugin {
    pub fn new(config: GliderConfig) -> Self {
        Self {
            config,
            boundary: BoundaryConfig::default(),
            physics: PhysicsConfig::default(),
        }
    }

    pub fn from_simulation(config: &SimulationConfig) -> Self {
        Self {
            config: config.glider.clone(),
            boundary: config.boundary.clone(),
            physics: config.physics.clone(),
        }
    }

    pub fn with_boundary(mut self, boundary: BoundaryConfig) -> Self {
        self.boundary = boundary;
        self
    }

    pub fn with_physics(mut self, physics: PhysicsConfig) -> Self {
        self.physics = physics;
        self
    }

    fn spawn_glider(mut commands: Commands, config: GliderConfig) {
        let state = GliderState::from_config(&config);
        info!(
            "Spawning {} at ({:.0}, {:.0}, {:.0})",
            config.name, state.position.x, state.position.y, state.position.z
        );
        commands.spawn((
            GliderTelemetry::from_state(&state),
            state,
            GliderControls::default(),
            PlayerController::default(),
            Name::new(config.name.clone()),
            config,
        ));
    }
}

impl Default for GliderPlugin {
    fn default() -> Self {
        Self::new(GliderConfig::default())
    }
}

impl Plugin for GliderPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<StagingPlugin>() {
            app.add_plugins(StagingPlugin);
        }

        let config = self.config.clone();

        app.insert_resource(self.boundary.clone())
            .insert_resource(self.physics.clone())
            .add_event::<CrashEvent>()
            .add_event::<ResetRequest>()
            .add_systems(Startup, move |commands: Commands| {
                Self::spawn_glider(commands, config.clone())
            })
            .add_systems(
                Update,
                (
                    (glider_reset_system, glider_dynamics_system)
                        .chain()
                        .in_set(GliderSet::Dynamics),
                    boundary_system.in_set(GliderSet::Boundary),
                    telemetry_system.in_set(GliderSet::Telemetry),
                ),
            );
    }
}
