//! Marching squares contouring of a noise field.
//!
//! A frame runs in two steps:
//! 1. [`classify`] samples the N×N lattice and thresholds it.
//! 2. [`march_grid`] visits every interior cell (x outer, y inner), resolves
//!    its [`EdgeConfiguration`] and hands it to the [`ContourEmitter`].
//!
//! [`march_terrain`] does both with the standard tables. Nothing here holds
//! state between frames; the noise source, interpolation flag and renderer
//! are all passed in.

mod emit;
mod grid;
mod resolve;
pub mod tables;

use bevy::prelude::Resource;
pub use emit::{ContourEmitter, EmitOutcome, edge_fraction, lerp_local};
pub use grid::{SampleGrid, classify};
pub use resolve::{ContourError, EdgeConfiguration, resolve_configuration};
pub use tables::{LinePoint, MarchingTables};

use crate::config::TerrainConfig;
use crate::render::LineRenderer;
use crate::seeding::NoiseSource;

/// Counters for one marching pass.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MarchStats {
  /// Interior cells visited.
  pub cells: usize,
  /// Line segments handed to the renderer.
  pub segments: usize,
  /// Cells skipped because their corners matched no configuration.
  pub unresolved_cells: usize,
  /// Segments dropped for a non-finite endpoint.
  pub degenerate_segments: usize,
}

/// Marches every interior cell of `grid`, drawing into `renderer`.
///
/// Cells are resolved against the emitter's own tables. A cell that fails to
/// resolve is logged and skipped; the rest of the grid is still drawn.
pub fn march_grid<R>(
  grid: &SampleGrid,
  emitter: &ContourEmitter<'_>,
  renderer: &mut R,
) -> MarchStats
where
  R: LineRenderer + ?Sized,
{
  let edge_patterns = &emitter.tables().edge_patterns;
  let mut stats = MarchStats::default();

  for cell in grid.cells() {
    stats.cells += 1;

    let config = match resolve_configuration(edge_patterns, cell, grid.corners(cell)) {
      Ok(config) => config,
      Err(e) => {
        log::warn!("{e}");
        stats.unresolved_cells += 1;
        continue;
      }
    };

    let outcome = emitter.emit(config, cell, grid.corner_values(cell), renderer);
    stats.segments += outcome.drawn;
    stats.degenerate_segments += outcome.skipped;
  }

  stats
}

/// Classifies and contours one frame with the standard tables.
pub fn march_terrain<N, R>(
  noise: &N,
  config: &TerrainConfig,
  interpolate: bool,
  renderer: &mut R,
) -> MarchStats
where
  N: NoiseSource + ?Sized,
  R: LineRenderer + ?Sized,
{
  let grid = classify(noise, config.region_size, config.surface_level);
  let emitter = ContourEmitter::new(&MarchingTables::STANDARD, config, interpolate);
  march_grid(&grid, &emitter, renderer)
}
