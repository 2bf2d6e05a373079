//! Per-frame terrain systems.

use bevy::prelude::*;

use crate::config::TerrainConfig;
use crate::marching::{MarchStats, march_terrain};
use crate::render::GizmoLineRenderer;
use crate::seeding::TerrainNoise;
use crate::settings::TerrainSettings;

/// Re-samples the noise field and draws its outline with gizmos.
///
/// Gizmos are immediate mode, so the outline is rebuilt from scratch every
/// frame using the current interpolation setting.
pub fn draw_terrain_outline(
  mut gizmos: Gizmos,
  noise: Res<TerrainNoise>,
  config: Res<TerrainConfig>,
  settings: Res<TerrainSettings>,
  mut stats: ResMut<MarchStats>,
) {
  let mut renderer = GizmoLineRenderer::new(&mut gizmos, config.world_origin());
  let frame = march_terrain(&*noise.0, &config, settings.interpolate, &mut renderer);

  if frame.unresolved_cells > 0 && frame.unresolved_cells != stats.unresolved_cells {
    warn!("{} cells could not be resolved", frame.unresolved_cells);
  }
  *stats = frame;
}
