use bevy::{prelude::*, state::app::StatesPlugin};
use glider::{
    components::{CrashEvent, GliderConfig, ResetRequest},
    plugins::{AppState, GliderPlugin, TerrainPlugin},
    resources::{BoundaryConfig, PhysicsConfig, TerrainConfig, TerrainSurface},
};

use super::create_test_physics_config;

/// Collects crash events so tests can inspect them after the fact.
#[derive(Resource, Default)]
pub struct CrashLog(pub Vec<CrashEvent>);

fn record_crashes(mut events: EventReader<CrashEvent>, mut log: ResMut<CrashLog>) {
    log.0.extend(events.read().cloned());
}

enum TestTerrain {
    Surface(TerrainSurface),
    Assets(TerrainConfig),
}

// Builder for creating a test application with customizable configuration
pub struct TestAppBuilder {
    glider_config: GliderConfig,
    physics_config: PhysicsConfig,
    boundary_config: BoundaryConfig,
    terrain: Option<TestTerrain>,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            glider_config: GliderConfig::default(),
            physics_config: create_test_physics_config(),
            boundary_config: BoundaryConfig::default(),
            terrain: None,
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_glider(mut self, config: GliderConfig) -> Self {
        self.glider_config = config;
        self
    }

    pub fn with_boundary(mut self, config: BoundaryConfig) -> Self {
        self.boundary_config = config;
        self
    }

    pub fn with_surface(mut self, surface: TerrainSurface) -> Self {
        self.terrain = Some(TestTerrain::Surface(surface));
        self
    }

    pub fn with_terrain_assets(mut self, config: TerrainConfig) -> Self {
        self.terrain = Some(TestTerrain::Assets(config));
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();

        app.add_plugins((MinimalPlugins, StatesPlugin));

        match self.terrain {
            Some(TestTerrain::Surface(surface)) => {
                app.add_plugins(TerrainPlugin::with_surface(surface));
            }
            Some(TestTerrain::Assets(config)) => {
                app.add_plugins(TerrainPlugin::with_config(config));
            }
            None => {
                app.insert_state(AppState::Flying);
            }
        }

        app.add_plugins(
            GliderPlugin::new(self.glider_config)
                .with_boundary(self.boundary_config)
                .with_physics(self.physics_config),
        )
        .init_resource::<CrashLog>()
        .add_systems(Last, record_crashes);

        // Run an initial update to initialize everything
        app.update();

        TestApp { app }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
}

impl TestApp {
    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.app.update();
        }
    }

    pub fn run_frame(&mut self) {
        self.app.update();
    }

    /// Steps until `done` holds or `max_steps` frames have run; returns frames used.
    pub fn run_until(
        &mut self,
        max_steps: usize,
        mut done: impl FnMut(&mut Self) -> bool,
    ) -> Option<usize> {
        for step in 1..=max_steps {
            self.app.update();
            if done(self) {
                return Some(step);
            }
        }
        None
    }

    pub fn app_state(&self) -> AppState {
        *self.app.world().resource::<State<AppState>>().get()
    }

    pub fn crashes(&self) -> &[CrashEvent] {
        &self.app.world().resource::<CrashLog>().0
    }

    pub fn request_reset(&mut self) {
        self.app.world_mut().send_event(ResetRequest { entity: None });
    }

    pub fn get_resource<T: Resource>(&self) -> Option<&T> {
        self.app.world().get_resource::<T>()
    }

    pub fn query_single<T: Component>(&mut self) -> Option<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.get_single(world).ok()
    }

    pub fn query_single_mut<T: Component>(&mut self) -> Option<Mut<T>> {
        let world = self.app.world_mut();
        let mut query = world.query::<&mut T>();
        query.get_single_mut(world).ok()
    }
}
