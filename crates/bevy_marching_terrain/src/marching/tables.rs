//! Lookup tables for marching squares.
//!
//! Corner order for a cell at lattice position (x, y), pixel space Y-down:
//!
//! ```text
//!   c0 (x, y) ------ top ------ c1 (x+1, y)
//!      |                           |
//!     left                       right
//!      |                           |
//!   c2 (x, y+1) --- bottom ---- c3 (x+1, y+1)
//! ```
//!
//! Configuration `i` has corner `k` solid iff bit `k` of `i` is set:
//! `c0 | (c1 << 1) | (c2 << 2) | (c3 << 3)`.

use bevy::math::Vec2;

/// Sentinel in [`CONTOUR_TABLE`] marking "no segment".
pub const NO_SEGMENT: i8 = -1;

/// Local coordinate of the cell's near sides (top/left).
pub const LOCAL_MIN: f32 = 1.0;
/// Local coordinate of the cell's far sides (bottom/right).
pub const LOCAL_MAX: f32 = 10.0;
/// Local coordinate of a side's midpoint.
pub const LOCAL_MID: f32 = 5.0;

/// Corner pattern of each edge configuration.
pub const EDGE_PATTERN_TABLE: [[bool; 4]; 16] = [
  [false, false, false, false],
  [true, false, false, false],
  [false, true, false, false],
  [true, true, false, false],
  [false, false, true, false],
  [true, false, true, false],
  [false, true, true, false],
  [true, true, true, false],
  [false, false, false, true],
  [true, false, false, true],
  [false, true, false, true],
  [true, true, false, true],
  [false, false, true, true],
  [true, false, true, true],
  [false, true, true, true],
  [true, true, true, true],
];

/// Contour segments of each edge configuration, as pairs of line point
/// indices (see [`LinePoint`]). A [`NO_SEGMENT`] in the second slot of a
/// pair ends the row.
pub const CONTOUR_TABLE: [[i8; 4]; 16] = [
  // 0: all empty
  [-1, -1, -1, -1],
  // 1: c0 solid
  [0, 2, -1, -1],
  // 2: c1 solid
  [0, 3, -1, -1],
  // 3: top row solid - horizontal
  [2, 3, -1, -1],
  // 4: c2 solid
  [2, 1, -1, -1],
  // 5: left column solid - vertical
  [0, 1, -1, -1],
  // 6: c1 + c2 saddle - cut around each solid corner
  [0, 3, 2, 1],
  // 7: only c3 empty
  [1, 3, -1, -1],
  // 8: c3 solid
  [1, 3, -1, -1],
  // 9: c0 + c3 saddle - cut around each solid corner
  [0, 2, 1, 3],
  // 10: right column solid - vertical
  [0, 1, -1, -1],
  // 11: only c2 empty
  [2, 1, -1, -1],
  // 12: bottom row solid - horizontal
  [2, 3, -1, -1],
  // 13: only c1 empty
  [0, 3, -1, -1],
  // 14: only c0 empty
  [0, 2, -1, -1],
  // 15: all solid
  [-1, -1, -1, -1],
];

/// Side midpoints of a cell in local coordinates, indexed by [`LinePoint`].
pub const BASE_LINE_POINTS: [Vec2; 4] = [
  Vec2::new(LOCAL_MID, LOCAL_MIN),
  Vec2::new(LOCAL_MID, LOCAL_MAX),
  Vec2::new(LOCAL_MIN, LOCAL_MID),
  Vec2::new(LOCAL_MAX, LOCAL_MID),
];

/// One of the four cell sides a contour segment can end on.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LinePoint {
  Top = 0,
  Bottom = 1,
  Left = 2,
  Right = 3,
}

impl LinePoint {
  pub const ALL: [LinePoint; 4] = [Self::Top, Self::Bottom, Self::Left, Self::Right];

  /// Decodes a contour table entry. Returns `None` for [`NO_SEGMENT`] and
  /// any other out-of-range value.
  pub fn from_index(index: i8) -> Option<Self> {
    match index {
      0 => Some(Self::Top),
      1 => Some(Self::Bottom),
      2 => Some(Self::Left),
      3 => Some(Self::Right),
      _ => None,
    }
  }

  #[inline]
  pub fn index(self) -> usize {
    self as usize
  }

  /// The two corners bounding this side, in interpolation order
  /// (start, end).
  #[inline]
  pub fn corners(self) -> (usize, usize) {
    match self {
      Self::Top => (0, 1),
      Self::Bottom => (2, 3),
      Self::Left => (0, 2),
      Self::Right => (1, 3),
    }
  }
}

/// The full table set used by one marching pass.
///
/// [`MarchingTables::STANDARD`] is the only set the app uses; passing a
/// different set lets callers exercise unusual tables.
#[derive(Clone, Debug, PartialEq)]
pub struct MarchingTables {
  pub edge_patterns: [[bool; 4]; 16],
  pub contours: [[i8; 4]; 16],
  pub line_points: [Vec2; 4],
}

impl MarchingTables {
  pub const STANDARD: Self = Self {
    edge_patterns: EDGE_PATTERN_TABLE,
    contours: CONTOUR_TABLE,
    line_points: BASE_LINE_POINTS,
  };

  /// Segments of a contour table row, in table order.
  ///
  /// Pairs are read as (0,1) then (2,3); a pair whose second index is
  /// [`NO_SEGMENT`] stops the walk. A pair referencing an unknown point is
  /// dropped.
  pub fn segments(&self, config: usize) -> impl Iterator<Item = (LinePoint, LinePoint)> + '_ {
    self.contours[config]
      .chunks_exact(2)
      .take_while(|pair| pair[1] != NO_SEGMENT)
      .filter_map(|pair| Some((LinePoint::from_index(pair[0])?, LinePoint::from_index(pair[1])?)))
  }
}

impl Default for MarchingTables {
  fn default() -> Self {
    Self::STANDARD
  }
}
