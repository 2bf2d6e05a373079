//! Scrolling grayscale view of the raw noise field.
//!
//! Useful for eyeballing the field the outline is traced from: each sample
//! becomes one block of a texture, and the view shifts one sample to the
//! right on a fixed interval.

use std::time::Duration;

use bevy::prelude::*;

use crate::config::{NoiseConfig, NoisePreviewConfig};
use crate::primitives::RgbaSurface;
use crate::render::{rgb, surface_image, upload_surface};
use crate::seeding::{NoiseSource, SimplexNoise, TerrainNoise};

/// Linearly remaps `value` from `[in_min, in_max]` to `[out_min, out_max]`.
///
/// No clamping is applied.
pub fn map_range(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
  out_min + (value - in_min) * (out_max - out_min) / (in_max - in_min)
}

/// Gray level for a noise sample in [-1, 1].
pub fn gray_level(value: f32) -> u8 {
  map_range(value, -1.0, 1.0, 0.0, 255.0).floor().clamp(0.0, 255.0) as u8
}

/// Fills `surface` with noise samples shifted right by `x_offset` lattice
/// units.
pub fn fill_noise_preview<N>(noise: &N, x_offset: u32, surface: &mut RgbaSurface)
where
  N: NoiseSource + ?Sized,
{
  for y in 0..surface.height() {
    for x in 0..surface.width() {
      let gray = gray_level(noise.sample(x.wrapping_add(x_offset) as f32, y as f32));
      surface[(x, y)] = rgb(gray, gray, gray);
    }
  }
}

/// State of the scrolling preview.
#[derive(Resource)]
pub struct NoisePreview {
  pub surface: RgbaSurface,
  pub image: Handle<Image>,
  pub offset: u32,
  timer: Timer,
}

/// Shows the noise field instead of its outline.
pub struct NoisePreviewPlugin {
  pub config: NoisePreviewConfig,
  pub noise: NoiseConfig,
}

impl Plugin for NoisePreviewPlugin {
  fn build(&self, app: &mut App) {
    if !app.world().contains_resource::<TerrainNoise>() {
      app.insert_resource(TerrainNoise::new(SimplexNoise::from_config(&self.noise)));
    }
    app
      .insert_resource(self.config.clone())
      .add_systems(Startup, setup_noise_preview)
      .add_systems(Update, scroll_noise_preview);
  }
}

fn setup_noise_preview(
  mut commands: Commands,
  mut images: ResMut<Assets<Image>>,
  config: Res<NoisePreviewConfig>,
  noise: Res<TerrainNoise>,
) {
  let mut surface = RgbaSurface::new(config.columns, config.rows);
  fill_noise_preview(&*noise.0, 0, &mut surface);

  let image = images.add(surface_image(&surface));

  commands.spawn(Sprite {
    image: image.clone(),
    custom_size: Some(Vec2::new(
      config.columns as f32 * config.pixel_size,
      config.rows as f32 * config.pixel_size,
    )),
    ..default()
  });

  info!(
    "Noise preview: {}x{} samples, scrolling every {} ms",
    config.columns, config.rows, config.scroll_interval_ms
  );

  commands.insert_resource(NoisePreview {
    surface,
    image,
    offset: 0,
    timer: Timer::new(
      Duration::from_millis(config.scroll_interval_ms),
      TimerMode::Repeating,
    ),
  });
}

fn scroll_noise_preview(
  time: Res<Time>,
  noise: Res<TerrainNoise>,
  mut preview: ResMut<NoisePreview>,
  mut images: ResMut<Assets<Image>>,
) {
  if !preview.timer.tick(time.delta()).just_finished() {
    return;
  }

  let preview = &mut *preview;
  preview.offset = preview.offset.wrapping_add(1);
  fill_noise_preview(&*noise.0, preview.offset, &mut preview.surface);

  if let Some(image) = images.get_mut(&preview.image)
    && !upload_surface(&preview.surface, image)
  {
    warn!("Noise preview image no longer matches its surface");
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::seeding::NoiseFn;

  #[test]
  fn map_range_is_linear() {
    assert_eq!(map_range(-1.0, -1.0, 1.0, 0.0, 255.0), 0.0);
    assert_eq!(map_range(1.0, -1.0, 1.0, 0.0, 255.0), 255.0);
    assert_eq!(map_range(0.0, -1.0, 1.0, 0.0, 255.0), 127.5);
  }

  #[test]
  fn gray_level_floors_and_clamps() {
    assert_eq!(gray_level(0.0), 127);
    assert_eq!(gray_level(-1.0), 0);
    assert_eq!(gray_level(1.0), 255);
    assert_eq!(gray_level(3.0), 255);
    assert_eq!(gray_level(-3.0), 0);
  }

  #[test]
  fn offset_shifts_columns_left() {
    let ramp = NoiseFn(|x: f32, _y: f32| -> f32 { (x / 10.0 - 1.0).clamp(-1.0, 1.0) });
    let mut first = RgbaSurface::new(4, 2);
    let mut shifted = RgbaSurface::new(4, 2);
    fill_noise_preview(&ramp, 0, &mut first);
    fill_noise_preview(&ramp, 1, &mut shifted);

    for y in 0..2 {
      for x in 0..3 {
        assert_eq!(shifted[(x, y)], first[(x + 1, y)]);
      }
    }
  }

  #[test]
  fn preview_pixels_are_opaque_gray() {
    let flat = NoiseFn(|_: f32, _: f32| 0.5f32);
    let mut surface = RgbaSurface::new(3, 3);
    fill_noise_preview(&flat, 7, &mut surface);
    assert!(surface.as_slice().iter().all(|p| *p == rgb(191, 191, 191)));
  }
}
