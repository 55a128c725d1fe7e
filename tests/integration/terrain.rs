use std::{thread, time::Duration};

use approx::assert_relative_eq;
use bevy::prelude::*;
use glider::{
    components::GliderState,
    plugins::AppState,
    resources::{HeightField, TerrainColorMap, TerrainConfig, TerrainSurface},
};
use nalgebra::Vector3;

use crate::common::{create_flat_surface, write_test_rasters, TestApp, TestAppBuilder};

const LOAD_POLL: Duration = Duration::from_millis(5);

fn wait_for(app: &mut TestApp, mut done: impl FnMut(&mut TestApp) -> bool) -> bool {
    app.run_until(2_000, |app| {
        thread::sleep(LOAD_POLL);
        done(app)
    })
    .is_some()
}

#[test]
fn test_flat_surface_heights() {
    let app = TestAppBuilder::new()
        .with_surface(create_flat_surface(100.0))
        .build();
    let surface = app.get_resource::<TerrainSurface>().expect("surface");

    for (x, z) in [(0.0, 0.0), (-1499.0, 1499.0), (733.3, -12.5), (1500.0, -1500.0)] {
        assert_eq!(surface.height_at(x, z), 100.0);
    }
    assert_eq!(surface.height_at(1500.5, 0.0), 0.0);
    assert_eq!(surface.height_at(0.0, -4000.0), 0.0);
}

#[test]
fn test_prebuilt_surface_starts_flying() {
    let app = TestAppBuilder::new()
        .with_surface(create_flat_surface(0.0))
        .build();
    assert_eq!(app.app_state(), AppState::Flying);
}

#[test]
fn test_assets_gate_simulation_until_loaded() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = write_test_rasters(dir.path(), 128);
    let spawn = Vector3::new(0.0, 1000.0, 0.0);

    let mut app = TestAppBuilder::new().with_terrain_assets(config).build();
    if app.app_state() == AppState::LoadingTerrain {
        let state = app.query_single::<GliderState>().expect("glider state");
        assert_eq!(state.position, spawn);
    }

    assert!(wait_for(&mut app, |app| app.app_state() == AppState::Flying));

    let surface = app.get_resource::<TerrainSurface>().expect("surface");
    assert_relative_eq!(surface.height_at(0.0, 0.0), 128.0, epsilon = 1e-9);
    assert_eq!(surface.field().width(), 8);

    let color_map = app.get_resource::<TerrainColorMap>().expect("colour map");
    assert_eq!((color_map.width, color_map.height), (8, 8));
    assert_eq!(&color_map.rgba[..4], &[40, 120, 60, 255]);

    app.run_steps(10);
    let state = app.query_single::<GliderState>().expect("glider state");
    assert!(state.position.y < spawn.y);
}

#[test]
fn test_missing_heightmap_is_fatal() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = TerrainConfig {
        heightmap_path: dir.path().join("missing.png"),
        color_map_path: None,
        ..Default::default()
    };

    let mut app = TestAppBuilder::new().with_terrain_assets(config).build();
    assert!(wait_for(&mut app, |app| app.app.should_exit().is_some()));

    assert!(matches!(app.app.should_exit(), Some(AppExit::Error(_))));
    assert_eq!(app.app_state(), AppState::LoadingTerrain);
    assert!(app.get_resource::<TerrainSurface>().is_none());

    let state = app.query_single::<GliderState>().expect("glider state");
    assert_eq!(state.position, Vector3::new(0.0, 1000.0, 0.0));
}
