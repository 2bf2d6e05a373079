//! Line rendering seam between the marching pass and the engine.
//!
//! The marching pass only knows [`LineRenderer`]. In the app the lines go to
//! Bevy gizmos through [`GizmoLineRenderer`]; tests and benchmarks collect
//! them with [`LineRecorder`].

mod gizmo;
mod texture;

use bevy::math::Vec2;
pub use gizmo::{GizmoLineRenderer, to_color};
pub use texture::{surface_image, upload_surface};

/// RGBA color with 8 bits per channel, using sRGB color space.
///
/// Re-exported from the `palette` crate for color handling.
pub type Rgba = palette::Srgba<u8>;

/// Creates an opaque RGB color (alpha = 255).
#[inline]
pub const fn rgb(r: u8, g: u8, b: u8) -> Rgba {
  Rgba::new(r, g, b, 255)
}

/// Sink for contour line segments.
///
/// Coordinates are in pixel space: X+ right, Y+ down, origin at the top-left
/// lattice point of the sampled region.
pub trait LineRenderer {
  /// Draws a straight line from `start` to `end`.
  fn draw_line(&mut self, start: Vec2, end: Vec2, color: Rgba);
}

/// A single recorded draw call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawnLine {
  pub start: Vec2,
  pub end: Vec2,
  pub color: Rgba,
}

/// Renderer that keeps every line it is asked to draw, in call order.
#[derive(Clone, Debug, Default)]
pub struct LineRecorder {
  pub lines: Vec<DrawnLine>,
}

impl LineRecorder {
  pub fn new() -> Self {
    Self::default()
  }

  /// Number of lines drawn so far.
  pub fn len(&self) -> usize {
    self.lines.len()
  }

  pub fn is_empty(&self) -> bool {
    self.lines.is_empty()
  }

  /// Forgets all recorded lines.
  pub fn clear(&mut self) {
    self.lines.clear();
  }
}

impl LineRenderer for LineRecorder {
  fn draw_line(&mut self, start: Vec2, end: Vec2, color: Rgba) {
    self.lines.push(DrawnLine { start, end, color });
  }
}

impl<R: LineRenderer + ?Sized> LineRenderer for &mut R {
  fn draw_line(&mut self, start: Vec2, end: Vec2, color: Rgba) {
    (**self).draw_line(start, end, color);
  }
}
