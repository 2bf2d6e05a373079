//! Sample grid classification.

use bevy::math::UVec2;

use crate::primitives::Surface;
use crate::seeding::NoiseSource;

/// Noise samples of an N×N lattice and their solid/empty classification.
///
/// Built once per frame by [`classify`] and read-only afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleGrid {
  values: Surface<f32>,
  solid: Surface<bool>,
  surface_level: f32,
}

/// Samples `noise` at every lattice point `(x, y)` with `0 <= x, y < size`
/// and marks a point solid when its value is at or above `surface_level`.
pub fn classify<N>(noise: &N, size: u32, surface_level: f32) -> SampleGrid
where
  N: NoiseSource + ?Sized,
{
  let values = Surface::from_fn(size, size, |x, y| noise.sample(x as f32, y as f32));
  let solid = Surface::from_fn(size, size, |x, y| values[(x, y)] >= surface_level);
  SampleGrid {
    values,
    solid,
    surface_level,
  }
}

impl SampleGrid {
  /// Lattice points per side (N).
  #[inline]
  pub fn size(&self) -> u32 {
    self.solid.width()
  }

  /// Cells per side (N - 1, or 0 for an empty grid).
  #[inline]
  pub fn cells_per_side(&self) -> u32 {
    self.size().saturating_sub(1)
  }

  /// Total number of interior cells.
  pub fn cell_count(&self) -> usize {
    let side = self.cells_per_side() as usize;
    side * side
  }

  pub fn surface_level(&self) -> f32 {
    self.surface_level
  }

  /// Whether lattice point (x, y) is solid. `None` if out of bounds.
  #[inline]
  pub fn is_solid(&self, x: u32, y: u32) -> Option<bool> {
    self.solid.get(x, y).copied()
  }

  /// Raw noise value at lattice point (x, y). `None` if out of bounds.
  #[inline]
  pub fn value(&self, x: u32, y: u32) -> Option<f32> {
    self.values.get(x, y).copied()
  }

  /// Corner classification of the cell at `cell`, in corner order
  /// (x,y), (x+1,y), (x,y+1), (x+1,y+1).
  ///
  /// Panics if the cell is not interior.
  #[inline]
  pub fn corners(&self, cell: UVec2) -> [bool; 4] {
    let UVec2 { x, y } = cell;
    [
      self.solid[(x, y)],
      self.solid[(x + 1, y)],
      self.solid[(x, y + 1)],
      self.solid[(x + 1, y + 1)],
    ]
  }

  /// Corner noise values of the cell at `cell`, same order as
  /// [`corners`](Self::corners).
  #[inline]
  pub fn corner_values(&self, cell: UVec2) -> [f32; 4] {
    let UVec2 { x, y } = cell;
    [
      self.values[(x, y)],
      self.values[(x + 1, y)],
      self.values[(x, y + 1)],
      self.values[(x + 1, y + 1)],
    ]
  }

  /// Interior cells in marching order: x outer, y inner.
  pub fn cells(&self) -> impl Iterator<Item = UVec2> + '_ {
    let side = self.cells_per_side();
    (0..side).flat_map(move |x| (0..side).map(move |y| UVec2::new(x, y)))
  }
}
