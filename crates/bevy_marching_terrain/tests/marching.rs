//! Integration tests for the marching pass.

use bevy::math::Vec2;
use bevy_marching_terrain::marching::{ContourEmitter, MarchStats, MarchingTables, march_grid};
use bevy_marching_terrain::{
  LineRecorder, NoiseFn, SimplexNoise, TerrainConfig, classify, march_terrain,
};

fn config(region_size: u32) -> TerrainConfig {
  TerrainConfig {
    region_size,
    ..Default::default()
  }
}

fn approx(a: Vec2, b: Vec2) -> bool {
  (a - b).abs().max_element() < 1e-4
}

/// Noise that is solid exactly on the lattice points listed.
fn solid_at(points: &'static [(u32, u32)]) -> NoiseFn<impl Fn(f32, f32) -> f32 + Send + Sync> {
  NoiseFn(move |x: f32, y: f32| -> f32 {
    let hit = points
      .iter()
      .any(|&(px, py)| px as f32 == x && py as f32 == y);
    if hit { 1.0 } else { -1.0 }
  })
}

#[test]
fn every_corner_pattern_draws_expected_segment_count() {
  for bits in 0u8..16 {
    // Single cell: corner k at (k % 2, k / 2).
    let noise = NoiseFn(move |x: f32, y: f32| -> f32 {
      let k = x as u8 + 2 * y as u8;
      if bits & (1 << k) != 0 { 1.0 } else { -1.0 }
    });
    let mut recorder = LineRecorder::new();
    let stats = march_terrain(&noise, &config(2), false, &mut recorder);

    let expected = match bits {
      0 | 15 => 0,
      6 | 9 => 2,
      _ => 1,
    };
    assert_eq!(stats.cells, 1);
    assert_eq!(stats.unresolved_cells, 0, "pattern {bits} did not resolve");
    assert_eq!(recorder.len(), expected, "pattern {bits}");
  }
}

#[test]
fn visits_every_interior_cell() {
  let noise = NoiseFn(|x: f32, y: f32| -> f32 { ((x * 0.7).sin() * (y * 1.3).cos()).clamp(-1.0, 1.0) });
  let mut recorder = LineRecorder::new();
  let stats = march_terrain(&noise, &config(6), false, &mut recorder);
  assert_eq!(stats.cells, 25);
  assert_eq!(stats.segments, recorder.len());
}

#[test]
fn tiny_regions_have_no_cells() {
  let noise = NoiseFn(|x: f32, _y: f32| -> f32 { if x < 1.0 { 1.0 } else { -1.0 } });
  for size in [0, 1] {
    let mut recorder = LineRecorder::new();
    let stats = march_terrain(&noise, &config(size), true, &mut recorder);
    assert_eq!(stats, MarchStats::default());
    assert!(recorder.is_empty());
  }
}

#[test]
fn classification_is_repeatable() {
  let noise = SimplexNoise::new(1337, 12.0);
  let a = classify(&noise, 20, 0.0);
  let b = classify(&noise, 20, 0.0);
  assert_eq!(a, b);
}

#[test]
fn simplex_frames_are_identical() {
  let noise = SimplexNoise::new(42, 12.0);
  let mut first = LineRecorder::new();
  let mut second = LineRecorder::new();
  march_terrain(&noise, &config(30), true, &mut first);
  march_terrain(&noise, &config(30), true, &mut second);
  assert!(!first.is_empty());
  assert_eq!(first.lines, second.lines);
}

#[test]
fn top_row_solid_draws_one_horizontal_segment() {
  let noise = solid_at(&[(0, 0), (1, 0)]);
  let mut recorder = LineRecorder::new();
  march_terrain(&noise, &config(2), false, &mut recorder);

  assert_eq!(recorder.len(), 1);
  let line = recorder.lines[0];
  assert_eq!(line.start, Vec2::new(1.0, 5.0));
  assert_eq!(line.end, Vec2::new(10.0, 5.0));
  assert_eq!(line.color, TerrainConfig::default().contour_color);
}

#[test]
fn without_interpolation_only_the_sign_pattern_matters() {
  let field = |x: f32, y: f32| -> f32 { (x * 0.9).sin() * (y * 0.6).cos() };
  let weak = NoiseFn(move |x: f32, y: f32| -> f32 { field(x, y) * 0.1 });
  let strong = NoiseFn(move |x: f32, y: f32| -> f32 { field(x, y) });

  let mut a = LineRecorder::new();
  let mut b = LineRecorder::new();
  march_terrain(&weak, &config(12), false, &mut a);
  march_terrain(&strong, &config(12), false, &mut b);
  assert!(!a.is_empty());
  assert_eq!(a.lines, b.lines);
}

#[test]
fn interpolated_segments_sit_on_the_crossing() {
  // Crossing at x = 0.3 between lattice columns 0 and 1.
  let noise = NoiseFn(|x: f32, _y: f32| -> f32 { x - 0.3 });
  let mut recorder = LineRecorder::new();
  march_terrain(&noise, &config(3), true, &mut recorder);

  assert_eq!(recorder.len(), 2);
  let x = 1.0 + 9.0 * 0.3;
  for (row, line) in recorder.lines.iter().enumerate() {
    let top = row as f32 * 10.0;
    assert!(approx(line.start, Vec2::new(x, top + 1.0)), "{line:?}");
    assert!(approx(line.end, Vec2::new(x, top + 10.0)), "{line:?}");
  }
}

#[test]
fn interpolated_horizontal_segments_sit_on_the_crossing() {
  // Crossing at y = 0.3 between lattice rows 0 and 1.
  let noise = NoiseFn(|_x: f32, y: f32| -> f32 { y - 0.3 });
  let mut recorder = LineRecorder::new();
  march_terrain(&noise, &config(3), true, &mut recorder);

  assert_eq!(recorder.len(), 2);
  let y = 1.0 + 9.0 * 0.3;
  for (column, line) in recorder.lines.iter().enumerate() {
    let left = column as f32 * 10.0;
    assert!(approx(line.start, Vec2::new(left + 1.0, y)), "{line:?}");
    assert!(approx(line.end, Vec2::new(left + 10.0, y)), "{line:?}");
  }
}

#[test]
fn emitter_tables_drive_resolution() {
  // A table set whose pattern row 3 is gone cannot resolve a solid top row,
  // even though the standard tables can.
  let noise = solid_at(&[(0, 0), (1, 0)]);
  let config = config(2);
  let grid = classify(&noise, config.region_size, config.surface_level);

  let mut broken = MarchingTables::STANDARD;
  broken.edge_patterns[3] = broken.edge_patterns[0];
  let emitter = ContourEmitter::new(&broken, &config, false);
  assert!(std::ptr::eq(emitter.tables(), &broken));

  let mut recorder = LineRecorder::new();
  let stats = march_grid(&grid, &emitter, &mut recorder);
  assert_eq!(stats.unresolved_cells, 1);
  assert!(recorder.is_empty());
}

#[test]
fn corrupted_table_skips_only_the_unresolvable_cells() {
  // Solid left column plus one point on the right: cells (0, 0) and (0, 1)
  // are configuration 5, cell (1, 0) is configuration 2.
  let noise = solid_at(&[(0, 0), (0, 1), (0, 2), (2, 0)]);
  let config = config(3);
  let grid = classify(&noise, config.region_size, config.surface_level);

  let standard = MarchingTables::STANDARD;
  let mut corrupted = MarchingTables::STANDARD;
  corrupted.edge_patterns[5] = corrupted.edge_patterns[0];

  let mut recorder = LineRecorder::new();
  let emitter = ContourEmitter::new(&standard, &config, false);
  let stats = march_grid(&grid, &emitter, &mut recorder);
  assert_eq!(stats.unresolved_cells, 0);
  assert_eq!(stats.segments, 3);

  recorder.clear();
  let emitter = ContourEmitter::new(&corrupted, &config, false);
  let stats = march_grid(&grid, &emitter, &mut recorder);
  assert_eq!(stats.cells, 4);
  assert_eq!(stats.unresolved_cells, 2);
  assert_eq!(stats.segments, 1);

  // Configuration 2 at cell (1, 0): top midpoint to right midpoint.
  let line = recorder.lines[0];
  assert_eq!(line.start, Vec2::new(15.0, 1.0));
  assert_eq!(line.end, Vec2::new(20.0, 5.0));
}
