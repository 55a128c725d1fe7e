use bevy::{log::LogPlugin, prelude::*, state::app::StatesPlugin};
use clap::Parser;
use std::{error::Error, path::PathBuf};

use glider::{
    components::GliderTelemetry,
    plugins::{GliderPlugin, PilotInputPlugin, ScenePlugin, TerrainPlugin},
    resources::{PhysicsConfig, SimulationConfig},
};

const HEADLESS_TIMESTEP: f64 = 1.0 / 60.0;
const TELEMETRY_INTERVAL: u64 = 60;

/// Arcade glider over heightmap terrain.
#[derive(Parser, Debug, PartialEq)]
#[command(name = "glider", about = "Arcade glider over heightmap terrain")]
struct CliArgs {
    /// YAML simulation config; defaults apply when omitted.
    config_path: Option<PathBuf>,

    /// Run without a window, printing JSON telemetry.
    #[arg(long)]
    headless: bool,

    /// Stop a headless run after this many ticks.
    #[arg(long = "ticks")]
    max_ticks: Option<u64>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = CliArgs::parse();

    let config = match &args.config_path {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };

    if args.headless {
        run_headless(&config, args.max_ticks)
    } else {
        run_windowed(&config)
    }
}

fn run_windowed(config: &SimulationConfig) -> Result<(), Box<dyn Error>> {
    let exit = App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Glider".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins((
            TerrainPlugin::with_config(config.terrain.clone()),
            GliderPlugin::from_simulation(config),
            PilotInputPlugin::new(config.input.clone()),
            ScenePlugin,
        ))
        .run();

    exit_result(exit)
}

/// Runs the simulation without a window, printing JSON telemetry lines.
fn run_headless(config: &SimulationConfig, max_ticks: Option<u64>) -> Result<(), Box<dyn Error>> {
    let physics = match config.physics.fixed_timestep {
        Some(_) => config.physics.clone(),
        None => PhysicsConfig::fixed(HEADLESS_TIMESTEP),
    };

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin, LogPlugin::default()))
        .add_plugins((
            TerrainPlugin::with_config(config.terrain.clone()),
            GliderPlugin::from_simulation(config).with_physics(physics),
        ));
    app.finish();
    app.cleanup();

    let mut tick: u64 = 0;
    loop {
        app.update();
        if let Some(exit) = app.should_exit() {
            return exit_result(exit);
        }
        tick += 1;

        let world = app.world_mut();
        let telemetry = world
            .query::<&GliderTelemetry>()
            .iter(world)
            .next()
            .copied();

        if let Some(telemetry) = telemetry {
            if tick % TELEMETRY_INTERVAL == 0 || telemetry.crashed {
                println!("{}", serde_json::to_string(&telemetry)?);
            }
            if telemetry.crashed {
                info!("Glider crashed after {tick} ticks");
                return Ok(());
            }
        }

        if max_ticks.is_some_and(|limit| tick >= limit) {
            info!("Stopped after {tick} ticks");
            return Ok(());
        }
    }
}

fn exit_result(exit: AppExit) -> Result<(), Box<dyn Error>> {
    match exit {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => Err(format!("simulation exited with code {code}").into()),
    }
}
