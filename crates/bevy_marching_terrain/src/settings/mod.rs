//! User-facing terrain settings.
//!
//! The settings window toggles [`TerrainSettings`] at runtime; changes are
//! written back to disk after a short debounce.

pub mod persistence;
mod ui;

use bevy::prelude::*;
use bevy_egui::{EguiPlugin, EguiPrimaryContextPass};
pub use persistence::{SettingsError, SettingsPersistence, read_settings, write_settings};
use serde::{Deserialize, Serialize};
pub use ui::{edit_settings, settings_checkboxes, settings_window};

/// Runtime toggles read by the marching pass once per frame.
#[derive(Resource, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainSettings {
  /// Move segment endpoints to the interpolated surface crossing.
  pub interpolate: bool,
}

/// Adds the settings resource, its persistence and the settings window.
pub struct TerrainSettingsPlugin;

impl Plugin for TerrainSettingsPlugin {
  fn build(&self, app: &mut App) {
    if !app.is_plugin_added::<EguiPlugin>() {
      app.add_plugins(EguiPlugin::default());
    }
    app
      .init_resource::<TerrainSettings>()
      .init_resource::<SettingsPersistence>()
      .add_systems(Startup, persistence::load_settings)
      .add_systems(Update, persistence::save_settings)
      .add_systems(EguiPrimaryContextPass, settings_window);
  }
}
