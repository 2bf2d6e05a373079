//! Application configuration file.

use std::path::{Path, PathBuf};
use std::{fmt, io};

use bevy_marching_terrain::{NoiseConfig, NoisePreviewConfig, TerrainConfig};
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
  pub window: WindowConfig,
  pub frame: FrameConfig,
  pub terrain: TerrainConfig,
  pub noise: NoiseConfig,
  pub noise_preview: NoisePreviewConfig,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
  pub width: u32,
  pub height: u32,
  pub title: String,
}

impl Default for WindowConfig {
  fn default() -> Self {
    Self {
      width: 500,
      height: 500,
      title: "Terrain Outline".to_string(),
    }
  }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FrameConfig {
  /// Wait between redraws when there is no input.
  pub pacing_ms: u64,
}

impl Default for FrameConfig {
  fn default() -> Self {
    Self { pacing_ms: 10 }
  }
}

#[derive(Debug)]
pub enum ConfigError {
  Io { path: PathBuf, source: io::Error },
  Parse { path: PathBuf, source: toml::de::Error },
}

impl ConfigError {
  /// True when the file simply does not exist.
  pub fn is_not_found(&self) -> bool {
    matches!(self, Self::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
  }
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Io { path, source } => write!(f, "failed to read {}: {source}", path.display()),
      Self::Parse { path, source } => write!(f, "failed to parse {}: {source}", path.display()),
    }
  }
}

impl std::error::Error for ConfigError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::Io { source, .. } => Some(source),
      Self::Parse { source, .. } => Some(source),
    }
  }
}

pub fn parse(contents: &str) -> Result<AppConfig, toml::de::Error> {
  toml::from_str(contents)
}

pub fn load(path: &Path) -> Result<AppConfig, ConfigError> {
  let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
    path: path.to_path_buf(),
    source,
  })?;
  parse(&contents).map_err(|source| ConfigError::Parse {
    path: path.to_path_buf(),
    source,
  })
}

#[cfg(test)]
mod tests {
  use bevy_marching_terrain::{DegeneratePolicy, rgb};

  use super::*;

  #[test]
  fn shipped_config_parses() {
    let config = parse(include_str!("../assets/config/terrain.config.toml")).unwrap();
    assert_eq!(config.terrain.region_size, 50);
    assert_eq!(config.terrain.contour_color, rgb(0, 255, 0));
    assert_eq!(config.terrain.clear_color, rgb(0, 0, 100));
    assert_eq!(config.frame.pacing_ms, 10);
    assert_eq!(config.window.width, 500);
  }

  #[test]
  fn missing_sections_use_defaults() {
    let config = parse("[noise]\nseed = 9\n").unwrap();
    assert_eq!(config.noise.seed, 9);
    assert_eq!(config.terrain, TerrainConfig::default());
    assert_eq!(config.terrain.degenerate_edges, DegeneratePolicy::Clamp);
    assert_eq!(config.window, WindowConfig::default());
  }

  #[test]
  fn missing_file_is_not_found() {
    let err = load(Path::new("does/not/exist.toml")).unwrap_err();
    assert!(err.is_not_found());
    assert!(err.to_string().contains("exist.toml"));
  }

  #[test]
  fn unknown_policy_is_a_parse_error() {
    assert!(parse("[terrain]\ndegenerate_edges = \"wrap\"\n").is_err());
  }
}
