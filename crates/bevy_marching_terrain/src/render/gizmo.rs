//! Gizmo-backed line renderer.

use bevy::prelude::*;

use super::{LineRenderer, Rgba};

/// Converts a palette color into a Bevy color.
#[inline]
pub fn to_color(color: Rgba) -> Color {
  Color::srgba_u8(color.red, color.green, color.blue, color.alpha)
}

/// Draws contour lines as immediate-mode 2D gizmos.
///
/// Pixel space is Y-down with the origin at the map's top-left corner, while
/// Bevy world space is Y-up. `origin` is the world position of the pixel
/// space origin.
pub struct GizmoLineRenderer<'a, 'w, 's> {
  gizmos: &'a mut Gizmos<'w, 's>,
  origin: Vec2,
}

impl<'a, 'w, 's> GizmoLineRenderer<'a, 'w, 's> {
  pub fn new(gizmos: &'a mut Gizmos<'w, 's>, origin: Vec2) -> Self {
    Self { gizmos, origin }
  }

  /// Maps a pixel-space point to world space.
  #[inline]
  pub fn to_world(&self, point: Vec2) -> Vec2 {
    pixel_to_world(self.origin, point)
  }
}

impl LineRenderer for GizmoLineRenderer<'_, '_, '_> {
  fn draw_line(&mut self, start: Vec2, end: Vec2, color: Rgba) {
    let start = self.to_world(start);
    let end = self.to_world(end);
    self.gizmos.line_2d(start, end, to_color(color));
  }
}

#[inline]
fn pixel_to_world(origin: Vec2, point: Vec2) -> Vec2 {
  Vec2::new(origin.x + point.x, origin.y - point.y)
}
