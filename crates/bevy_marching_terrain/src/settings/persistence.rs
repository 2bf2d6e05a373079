//! Persistence for terrain settings.

use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{fmt, io};

use bevy::prelude::*;
// WASM compat: std::time::Instant panics on wasm32
use web_time::Instant;

use super::TerrainSettings;

const SETTINGS_FILE: &str = "settings.toml";
const DEBOUNCE_DURATION: Duration = Duration::from_millis(500);

/// Error reading or writing the settings file.
#[derive(Debug)]
pub enum SettingsError {
  Io(io::Error),
  Parse(toml::de::Error),
  Serialize(toml::ser::Error),
}

impl fmt::Display for SettingsError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Io(e) => write!(f, "I/O error: {e}"),
      Self::Parse(e) => write!(f, "parse error: {e}"),
      Self::Serialize(e) => write!(f, "serialize error: {e}"),
    }
  }
}

impl std::error::Error for SettingsError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::Io(e) => Some(e),
      Self::Parse(e) => Some(e),
      Self::Serialize(e) => Some(e),
    }
  }
}

impl From<io::Error> for SettingsError {
  fn from(err: io::Error) -> Self {
    Self::Io(err)
  }
}

/// Tracks when settings were last changed for debounced saving.
#[derive(Resource)]
pub struct SettingsPersistence {
  /// Last time settings were modified.
  last_change: Option<Instant>,
  /// Whether a save is pending.
  save_pending: bool,
  /// Path to settings file.
  settings_path: Option<PathBuf>,
}

impl Default for SettingsPersistence {
  fn default() -> Self {
    Self::at(default_settings_path())
  }
}

impl SettingsPersistence {
  /// Persistence backed by `path`; `None` keeps settings in memory only.
  pub fn at(path: Option<PathBuf>) -> Self {
    Self {
      last_change: None,
      save_pending: false,
      settings_path: path,
    }
  }

  /// Marks settings as changed, triggering a debounced save.
  pub fn mark_changed(&mut self) {
    self.last_change = Some(Instant::now());
    self.save_pending = true;
  }

  pub fn is_save_pending(&self) -> bool {
    self.save_pending
  }

  pub fn path(&self) -> Option<&Path> {
    self.settings_path.as_deref()
  }
}

/// Returns the default path to the settings file.
fn default_settings_path() -> Option<PathBuf> {
  #[cfg(feature = "native")]
  {
    let data_dir = dirs::data_dir()?;
    Some(data_dir.join("terrain_outline").join(SETTINGS_FILE))
  }
  #[cfg(not(feature = "native"))]
  {
    None
  }
}

/// Reads settings from a TOML file.
pub fn read_settings(path: &Path) -> Result<TerrainSettings, SettingsError> {
  let contents = std::fs::read_to_string(path)?;
  toml::from_str(&contents).map_err(SettingsError::Parse)
}

/// Writes settings to a TOML file, creating parent directories as needed.
pub fn write_settings(path: &Path, settings: &TerrainSettings) -> Result<(), SettingsError> {
  if let Some(parent) = path.parent() {
    std::fs::create_dir_all(parent)?;
  }
  let contents = toml::to_string_pretty(settings).map_err(SettingsError::Serialize)?;
  std::fs::write(path, contents)?;
  Ok(())
}

/// Loads settings from disk on startup.
pub fn load_settings(mut commands: Commands, persistence: Res<SettingsPersistence>) {
  let Some(path) = persistence.path() else {
    return;
  };
  if !path.exists() {
    return;
  }

  match read_settings(path) {
    Ok(settings) => {
      info!("Loaded terrain settings from {}", path.display());
      commands.insert_resource(settings);
    }
    Err(e) => {
      warn!("Failed to load terrain settings: {e}, using defaults");
    }
  }
}

/// Saves settings to disk when changed (debounced).
pub fn save_settings(
  settings: Res<TerrainSettings>,
  mut persistence: ResMut<SettingsPersistence>,
) {
  if !persistence.save_pending {
    return;
  }

  let Some(last_change) = persistence.last_change else {
    return;
  };

  // Debounce: wait for changes to settle
  if last_change.elapsed() < DEBOUNCE_DURATION {
    return;
  }

  persistence.save_pending = false;

  let Some(path) = &persistence.settings_path else {
    return;
  };

  match write_settings(path, &settings) {
    Ok(()) => debug!("Saved terrain settings to {}", path.display()),
    Err(e) => warn!("Failed to save terrain settings: {e}"),
  }
}
