//! Edge configuration lookup.

use std::fmt;

use bevy::math::UVec2;

/// Index of a cell's corner pattern in the edge-pattern table, in [0, 16).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeConfiguration(u8);

impl EdgeConfiguration {
  /// Wraps a table index. Returns `None` if it is not below 16.
  pub fn new(index: u8) -> Option<Self> {
    (index < 16).then_some(Self(index))
  }

  #[inline]
  pub fn index(self) -> usize {
    self.0 as usize
  }
}

/// Errors raised while contouring a single cell.
#[derive(Clone, Debug, PartialEq)]
pub enum ContourError {
  /// No edge-pattern row matches the cell's corners.
  UnresolvableConfiguration { cell: UVec2, corners: [bool; 4] },
}

impl fmt::Display for ContourError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::UnresolvableConfiguration { cell, corners } => write!(
        f,
        "no edge configuration matches corners {:?} of cell ({}, {})",
        corners, cell.x, cell.y
      ),
    }
  }
}

impl std::error::Error for ContourError {}

/// Finds the row of `edge_patterns` equal to `corners`.
///
/// Rows are scanned in order and the first exact match wins; with a
/// well-formed table at most one row can match.
pub fn resolve_configuration(
  edge_patterns: &[[bool; 4]; 16],
  cell: UVec2,
  corners: [bool; 4],
) -> Result<EdgeConfiguration, ContourError> {
  edge_patterns
    .iter()
    .position(|row| *row == corners)
    .map(|i| EdgeConfiguration(i as u8))
    .ok_or(ContourError::UnresolvableConfiguration { cell, corners })
}
