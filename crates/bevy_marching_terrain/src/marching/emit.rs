//! Contour segment emission for a single cell.

use bevy::math::{UVec2, Vec2};

use super::resolve::EdgeConfiguration;
use super::tables::{LOCAL_MAX, LOCAL_MIN, LinePoint, MarchingTables};
use crate::config::{DegeneratePolicy, TerrainConfig};
use crate::render::{LineRenderer, Rgba};

/// Fraction along an edge where the field crosses `surface_level`, assuming
/// linear variation from `start` to `end`.
///
/// With [`DegeneratePolicy::Clamp`] the result is always in [0, 1]; the
/// other policies return the raw quotient, which is infinite or NaN when
/// `start == end`.
pub fn edge_fraction(surface_level: f32, start: f32, end: f32, policy: DegeneratePolicy) -> f32 {
  let t = (surface_level - start) / (end - start);
  match policy {
    DegeneratePolicy::Clamp if t.is_finite() => t.clamp(0.0, 1.0),
    DegeneratePolicy::Clamp => 0.5,
    DegeneratePolicy::Skip | DegeneratePolicy::Unclamped => t,
  }
}

/// Maps an edge fraction onto the local coordinate range of a cell side.
#[inline]
pub fn lerp_local(t: f32) -> f32 {
  LOCAL_MIN + (LOCAL_MAX - LOCAL_MIN) * t
}

/// Segments produced by one [`ContourEmitter::emit`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EmitOutcome {
  pub drawn: usize,
  /// Segments dropped for a non-finite endpoint ([`DegeneratePolicy::Skip`]).
  pub skipped: usize,
}

/// Turns resolved cells into line segments in pixel space.
///
/// Holds everything that is fixed for a frame; per-cell input is passed to
/// [`emit`](Self::emit).
#[derive(Clone, Copy, Debug)]
pub struct ContourEmitter<'a> {
  tables: &'a MarchingTables,
  surface_level: f32,
  pixel_size: f32,
  color: Rgba,
  interpolate: bool,
  degenerate: DegeneratePolicy,
}

impl<'a> ContourEmitter<'a> {
  pub fn new(tables: &'a MarchingTables, config: &TerrainConfig, interpolate: bool) -> Self {
    Self {
      tables,
      surface_level: config.surface_level,
      pixel_size: config.pixel_size,
      color: config.contour_color,
      interpolate,
      degenerate: config.degenerate_edges,
    }
  }

  /// Tables this emitter walks; configurations must be resolved against
  /// the same set.
  pub fn tables(&self) -> &'a MarchingTables {
    self.tables
  }

  /// Line points for a cell with the given corner values.
  ///
  /// Without interpolation these are the table's base points. With it, each
  /// side's varying coordinate is moved to the estimated crossing; the fixed
  /// coordinate is kept.
  pub fn line_points(&self, corner_values: [f32; 4]) -> [Vec2; 4] {
    let mut points = self.tables.line_points;
    if !self.interpolate {
      return points;
    }

    for side in LinePoint::ALL {
      let (a, b) = side.corners();
      let t = edge_fraction(
        self.surface_level,
        corner_values[a],
        corner_values[b],
        self.degenerate,
      );
      let coord = lerp_local(t);
      let point = &mut points[side.index()];
      match side {
        LinePoint::Top | LinePoint::Bottom => point.x = coord,
        LinePoint::Left | LinePoint::Right => point.y = coord,
      }
    }
    points
  }

  /// Draws the segments of `config` for the cell at `cell`.
  pub fn emit<R>(
    &self,
    config: EdgeConfiguration,
    cell: UVec2,
    corner_values: [f32; 4],
    renderer: &mut R,
  ) -> EmitOutcome
  where
    R: LineRenderer + ?Sized,
  {
    let mut outcome = EmitOutcome::default();
    let mut segments = self.tables.segments(config.index()).peekable();
    if segments.peek().is_none() {
      return outcome;
    }

    let points = self.line_points(corner_values);
    let offset = cell.as_vec2() * self.pixel_size;

    for (a, b) in segments {
      let start = offset + points[a.index()];
      let end = offset + points[b.index()];

      if self.degenerate == DegeneratePolicy::Skip && !(start.is_finite() && end.is_finite()) {
        log::trace!(
          "dropping degenerate segment {:?}->{:?} in cell ({}, {})",
          a,
          b,
          cell.x,
          cell.y
        );
        outcome.skipped += 1;
        continue;
      }

      renderer.draw_line(start, end, self.color);
      outcome.drawn += 1;
    }

    outcome
  }
}
