mod config;

use std::path::PathBuf;
use std::time::Duration;

use bevy::prelude::*;
use bevy::window::WindowResolution;
use bevy::winit::{UpdateMode, WinitSettings};
use bevy_marching_terrain::{MarchingTerrainPlugin, NoisePreviewPlugin};
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "terrain_outline", about = "Marching squares outline of a noise terrain")]
struct Args {
  /// Path to the TOML config file
  #[arg(long, default_value = "assets/config/terrain.config.toml")]
  config: PathBuf,
  /// What to draw
  #[arg(long, value_enum, default_value_t = Mode::Contour)]
  mode: Mode,
  /// Overrides the noise seed from the config file
  #[arg(long, allow_negative_numbers = true)]
  seed: Option<i32>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
  /// Terrain outline
  Contour,
  /// Scrolling grayscale view of the raw noise
  NoisePreview,
}

fn main() -> AppExit {
  let args = Args::parse();

  let (mut config, missing_config) = match config::load(&args.config) {
    Ok(config) => (config, false),
    Err(e) if e.is_not_found() => (config::AppConfig::default(), true),
    Err(e) => {
      eprintln!("error: {e}");
      return AppExit::error();
    }
  };
  if let Some(seed) = args.seed {
    config.noise.seed = seed;
  }

  let mut app = App::new();

  app.add_plugins(DefaultPlugins.set(WindowPlugin {
    primary_window: Some(Window {
      resolution: WindowResolution::new(config.window.width, config.window.height),
      title: config.window.title.clone(),
      ..default()
    }),
    ..default()
  }));

  // LogPlugin is live from here on
  if missing_config {
    warn!(
      "Config file {} not found, using defaults",
      args.config.display()
    );
  }

  let pacing = UpdateMode::reactive(Duration::from_millis(config.frame.pacing_ms));
  app
    .insert_resource(WinitSettings {
      focused_mode: pacing,
      unfocused_mode: pacing,
    })
    .add_systems(Startup, spawn_camera);

  match args.mode {
    Mode::Contour => {
      app.add_plugins(MarchingTerrainPlugin::new(config.terrain, config.noise));
    }
    Mode::NoisePreview => {
      app.add_plugins(NoisePreviewPlugin {
        config: config.noise_preview,
        noise: config.noise,
      });
    }
  }

  app.run()
}

fn spawn_camera(mut commands: Commands) {
  commands.spawn(Camera2d);
}

#[cfg(test)]
mod tests {
  use clap::CommandFactory;

  use super::*;

  #[test]
  fn cli_is_well_formed() {
    Args::command().debug_assert();
  }

  #[test]
  fn mode_and_seed_parse() {
    let args = Args::parse_from(["terrain_outline", "--mode", "noise-preview", "--seed=-4"]);
    assert_eq!(args.mode, Mode::NoisePreview);
    assert_eq!(args.seed, Some(-4));
    assert_eq!(args.config, PathBuf::from("assets/config/terrain.config.toml"));
  }
}
