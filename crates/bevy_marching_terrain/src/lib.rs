//! Marching Terrain - noise terrain outlines for Bevy.
//!
//! Samples a 2D noise field on a square lattice, thresholds it into
//! solid/empty points and traces the boundary with marching squares. The
//! outline is drawn with gizmos every frame, optionally with segment
//! endpoints interpolated to the estimated surface crossing.

use bevy::prelude::*;

pub mod config;
pub mod marching;
pub mod noise_preview;
pub mod primitives;
pub mod render;
pub mod seeding;
pub mod settings;
pub mod systems;

pub use config::{DegeneratePolicy, NoiseConfig, NoisePreviewConfig, TerrainConfig};
pub use marching::{
  ContourEmitter, ContourError, EdgeConfiguration, MarchStats, MarchingTables, SampleGrid,
  classify, march_grid, march_terrain, resolve_configuration,
};
pub use noise_preview::{NoisePreview, NoisePreviewPlugin, fill_noise_preview, map_range};
pub use primitives::{RgbaSurface, Surface};
pub use render::{LineRecorder, LineRenderer, Rgba, rgb};
pub use seeding::{NoiseFn, NoiseSource, SimplexNoise, TerrainNoise};
pub use settings::{TerrainSettings, TerrainSettingsPlugin};

/// Draws the outline of a noise-generated terrain.
///
/// Uses [`SimplexNoise`] built from `noise` unless a [`TerrainNoise`]
/// resource is inserted before the plugin.
#[derive(Default)]
pub struct MarchingTerrainPlugin {
  pub config: TerrainConfig,
  pub noise: NoiseConfig,
}

impl MarchingTerrainPlugin {
  pub fn new(config: TerrainConfig, noise: NoiseConfig) -> Self {
    Self { config, noise }
  }
}

impl Plugin for MarchingTerrainPlugin {
  fn build(&self, app: &mut App) {
    if !app.world().contains_resource::<TerrainNoise>() {
      app.insert_resource(TerrainNoise::new(SimplexNoise::from_config(&self.noise)));
    }

    app
      .insert_resource(ClearColor(render::to_color(self.config.clear_color)))
      .insert_resource(self.config.clone())
      .init_resource::<MarchStats>()
      .add_plugins(TerrainSettingsPlugin)
      .add_systems(Update, systems::draw_terrain_outline);

    if self.config.region_size < 2 {
      warn!(
        "Region size {} has no cells, nothing will be drawn",
        self.config.region_size
      );
    }
    info!(
      "Marching terrain: {}x{} lattice, surface level {}",
      self.config.region_size, self.config.region_size, self.config.surface_level
    );
  }
}
