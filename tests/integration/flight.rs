use approx::assert_relative_eq;
use glider::{
    components::{GliderControls, GliderState, GliderTelemetry},
    resources::HeightField,
};
use nalgebra::Vector3;
use pretty_assertions::assert_eq;

use crate::common::{
    assert_glider_state_valid, assert_position_eq, create_flat_surface, create_ramp_surface,
    create_test_glider_config, TestApp, TestAppBuilder,
};

fn glider_state(app: &mut TestApp) -> GliderState {
    *app.query_single::<GliderState>().expect("glider state")
}

fn is_crashed(app: &mut TestApp) -> bool {
    glider_state(app).is_crashed()
}

#[test]
fn test_unpiloted_glide_descends_then_crashes() {
    let mut app = TestAppBuilder::new()
        .with_surface(create_flat_surface(0.0))
        .build();

    let mut altitude = glider_state(&mut app).altitude();

    for _ in 0..1000 {
        app.run_frame();
        let state = glider_state(&mut app);
        assert_glider_state_valid(&state);
        assert!(!state.is_crashed());
        assert!(
            state.altitude() < altitude,
            "altitude rose from {} to {}",
            altitude,
            state.altitude()
        );
        altitude = state.altitude();
    }

    let steps = app.run_until(60_000, is_crashed);
    assert!(steps.is_some(), "glider never reached the ground");

    let state = glider_state(&mut app);
    assert!(state.altitude() < 0.0);
    assert_eq!(state.velocity, Vector3::zeros());

    let crashes = app.crashes().to_vec();
    assert_eq!(crashes.len(), 1);
    assert_eq!(crashes[0].ground_height, 0.0);
    assert_eq!(crashes[0].position, state.position);
}

#[test]
fn test_crash_is_terminal() {
    let mut app = TestAppBuilder::new()
        .with_glider(create_test_glider_config(Vector3::new(0.0, 5.0, 0.0)))
        .with_surface(create_flat_surface(0.0))
        .build();

    assert!(app.run_until(600, is_crashed).is_some());
    let crashed = glider_state(&mut app);

    app.query_single_mut::<GliderControls>()
        .expect("controls")
        .pitch = 1.0;
    app.run_steps(120);

    let later = glider_state(&mut app);
    assert_eq!(later.position, crashed.position);
    assert_eq!(later.velocity, Vector3::zeros());
    assert_eq!(later.pitch, crashed.pitch);
    assert_eq!(app.crashes().len(), 1);
    assert!(app.query_single::<GliderTelemetry>().expect("telemetry").crashed);
}

#[test]
fn test_reset_after_crash() {
    let config = create_test_glider_config(Vector3::new(0.0, 5.0, 0.0));
    let mut app = TestAppBuilder::new()
        .with_glider(config.clone())
        .with_surface(create_flat_surface(0.0))
        .build();
    assert!(app.run_until(600, is_crashed).is_some());

    app.request_reset();
    app.run_frame();

    // The reset lands before the frame's dynamics step, so one tick has been flown.
    let state = glider_state(&mut app);
    assert!(!state.is_crashed());
    assert_position_eq(&state.position, &Vector3::new(0.0, 5.0, -20.0 / 60.0), 0.05);
    assert_eq!((state.pitch, state.roll, state.yaw), (0.0, 0.0, 0.0));
    assert!(!app.query_single::<GliderTelemetry>().expect("telemetry").crashed);
}

#[test]
fn test_zero_plane_without_terrain() {
    let mut app = TestAppBuilder::new()
        .with_glider(create_test_glider_config(Vector3::new(0.0, 30.0, 0.0)))
        .build();

    assert!(app.run_until(2_000, is_crashed).is_some());
    let crashes = app.crashes().to_vec();
    assert_eq!(crashes.len(), 1);
    assert_eq!(crashes[0].ground_height, 0.0);
    assert!(crashes[0].position.y < 0.0);
}

#[test]
fn test_crash_against_rising_ground() {
    let surface = create_ramp_surface(600.0);
    let mut app = TestAppBuilder::new()
        .with_glider(create_test_glider_config(Vector3::new(1200.0, 560.0, 0.0)))
        .with_surface(surface.clone())
        .build();

    assert!(app.run_until(2_000, is_crashed).is_some());

    let crash = app.crashes()[0].clone();
    assert_eq!(
        crash.ground_height,
        surface.height_at(crash.position.x, crash.position.z)
    );
    assert!(crash.ground_height > 500.0);
    assert!(crash.position.y < crash.ground_height);
}

#[test]
fn test_controls_drive_attitude() {
    let mut app = TestAppBuilder::new()
        .with_surface(create_flat_surface(0.0))
        .build();
    let before = glider_state(&mut app);

    app.query_single_mut::<GliderControls>()
        .expect("controls")
        .pitch = 1.0;
    app.run_steps(30);

    let state = glider_state(&mut app);
    assert_relative_eq!(state.pitch - before.pitch, 0.5, epsilon = 1e-9);
    assert_glider_state_valid(&state);
}

#[test]
fn test_telemetry_follows_state() {
    let mut app = TestAppBuilder::new()
        .with_surface(create_flat_surface(0.0))
        .build();
    app.run_steps(60);

    let state = glider_state(&mut app);
    let telemetry = *app.query_single::<GliderTelemetry>().expect("telemetry");
    assert_eq!(telemetry, GliderTelemetry::from_state(&state));
    assert_relative_eq!(telemetry.speed_kmh, state.speed() * 3.6);
    assert_relative_eq!(telemetry.altitude, state.position.y);
}
