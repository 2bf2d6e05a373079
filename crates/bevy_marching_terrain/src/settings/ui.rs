//! Settings window.

use std::ops::DerefMut;

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::TerrainSettings;
use super::persistence::SettingsPersistence;
use crate::marching::MarchStats;

/// Renders the settings checkboxes into the given egui UI.
/// Returns true if any setting changed.
pub fn settings_checkboxes(ui: &mut egui::Ui, settings: &mut TerrainSettings) -> bool {
  ui.checkbox(&mut settings.interpolate, "Linear Interpolation")
    .changed()
}

/// Runs `edit` on a copy of the settings and writes the copy back only when
/// `edit` reports a change. Returns that report.
///
/// Holding `settings` mutably does not mark the resource changed; only the
/// write-back does.
pub fn edit_settings<S>(settings: &mut S, edit: impl FnOnce(&mut TerrainSettings) -> bool) -> bool
where
  S: DerefMut<Target = TerrainSettings>,
{
  let mut edited = TerrainSettings::clone(settings);
  if !edit(&mut edited) {
    return false;
  }
  **settings = edited;
  true
}

/// Draws the "Settings" window.
pub fn settings_window(
  mut contexts: EguiContexts,
  mut settings: ResMut<TerrainSettings>,
  mut persistence: ResMut<SettingsPersistence>,
  stats: Option<Res<MarchStats>>,
) {
  let Ok(ctx) = contexts.ctx_mut() else {
    return;
  };

  egui::Window::new("Settings")
    .resizable(false)
    .show(ctx, |ui| {
      if edit_settings(&mut settings, |edited| settings_checkboxes(ui, edited)) {
        persistence.mark_changed();
      }

      if let Some(stats) = stats {
        ui.separator();
        let skipped = stats.unresolved_cells + stats.degenerate_segments;
        ui.label(format!(
          "{} cells, {} segments, {skipped} skipped",
          stats.cells, stats.segments
        ));
      }
    });
}
