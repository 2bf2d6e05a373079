//! Startup configuration for the terrain outline.
//!
//! All structs deserialize from TOML with every field optional; anything
//! missing falls back to [`Default`].

use bevy::prelude::*;
use serde::{Deserialize, Deserializer, de};

use crate::render::{Rgba, rgb};

/// How the emitter treats an edge whose interpolation fraction is not a
/// usable number (equal corner values give a zero denominator).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegeneratePolicy {
  /// Non-finite fractions fall back to the edge midpoint; finite fractions
  /// are clamped to [0, 1].
  #[default]
  Clamp,
  /// Fractions are left as computed; segments with a non-finite endpoint are
  /// not drawn.
  Skip,
  /// Fractions and coordinates are passed through untouched, even when
  /// infinite or NaN.
  Unclamped,
}

/// Parameters of the marching pass.
#[derive(Resource, Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
  /// Lattice points per side of the sampled region (N).
  pub region_size: u32,
  /// Noise threshold; samples at or above it are solid.
  pub surface_level: f32,
  /// Pixels per cell when translating cell-local points to pixel space.
  pub pixel_size: f32,
  #[serde(deserialize_with = "deserialize_hex_color")]
  pub contour_color: Rgba,
  #[serde(deserialize_with = "deserialize_hex_color")]
  pub clear_color: Rgba,
  pub degenerate_edges: DegeneratePolicy,
}

impl Default for TerrainConfig {
  fn default() -> Self {
    Self {
      region_size: 50,
      surface_level: 0.0,
      pixel_size: 10.0,
      contour_color: rgb(0, 255, 0),
      clear_color: rgb(0, 0, 100),
      degenerate_edges: DegeneratePolicy::Clamp,
    }
  }
}

impl TerrainConfig {
  /// Cells per side of the sampled region (N - 1, or 0 when N < 2).
  pub fn cells_per_side(&self) -> u32 {
    self.region_size.saturating_sub(1)
  }

  /// Side length in pixels of the area covered by cells.
  pub fn pixel_extent(&self) -> f32 {
    self.cells_per_side() as f32 * self.pixel_size
  }

  /// World position of the pixel-space origin when the map is centred on
  /// the world origin.
  pub fn world_origin(&self) -> Vec2 {
    let half = self.pixel_extent() / 2.0;
    Vec2::new(-half, half)
  }
}

/// Noise generator parameters.
#[derive(Resource, Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct NoiseConfig {
  pub seed: i32,
  /// Feature size in lattice units.
  pub feature_scale: f32,
}

impl Default for NoiseConfig {
  fn default() -> Self {
    Self {
      seed: 1337,
      feature_scale: 12.0,
    }
  }
}

/// Scrolling noise preview parameters.
#[derive(Resource, Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct NoisePreviewConfig {
  pub columns: u32,
  pub rows: u32,
  /// Screen pixels per noise sample.
  pub pixel_size: f32,
  pub scroll_interval_ms: u64,
}

impl Default for NoisePreviewConfig {
  fn default() -> Self {
    Self {
      columns: 100,
      rows: 100,
      pixel_size: 5.0,
      scroll_interval_ms: 100,
    }
  }
}

/// Parses `"#RRGGBB"` or `"#RRGGBBAA"` (the `#` is optional).
pub fn parse_hex_color(s: &str) -> Option<Rgba> {
  let s = s.trim_start_matches('#');
  if !s.is_ascii() || (s.len() != 6 && s.len() != 8) {
    return None;
  }
  let channel = |i: usize| u8::from_str_radix(&s[i..i + 2], 16).ok();
  let alpha = if s.len() == 8 { channel(6)? } else { 255 };
  Some(Rgba::new(channel(0)?, channel(2)?, channel(4)?, alpha))
}

fn deserialize_hex_color<'de, D>(deserializer: D) -> Result<Rgba, D::Error>
where
  D: Deserializer<'de>,
{
  let s: String = Deserialize::deserialize(deserializer)?;
  parse_hex_color(&s)
    .ok_or_else(|| de::Error::custom(format!("invalid hex color {s:?}, expected #RRGGBB[AA]")))
}
