//! Images backed by an RGBA surface.

use bevy::asset::RenderAssetUsages;
use bevy::image::ImageSampler;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

use crate::primitives::RgbaSurface;

/// Builds an sRGB image holding a copy of `surface`.
///
/// Sampling is nearest-neighbor so each surface pixel stays a crisp block
/// when the image is scaled up.
pub fn surface_image(surface: &RgbaSurface) -> Image {
  let size = Extent3d {
    width: surface.width(),
    height: surface.height(),
    depth_or_array_layers: 1,
  };

  let mut image = Image::new(
    size,
    TextureDimension::D2,
    surface.as_bytes().to_vec(),
    TextureFormat::Rgba8UnormSrgb,
    RenderAssetUsages::MAIN_WORLD | RenderAssetUsages::RENDER_WORLD,
  );
  image.sampler = ImageSampler::nearest();
  image
}

/// Copies `surface` into an existing image.
///
/// Returns `false` and leaves the image untouched if the byte sizes differ.
pub fn upload_surface(surface: &RgbaSurface, image: &mut Image) -> bool {
  let bytes = surface.as_bytes();
  match image.data.as_mut() {
    Some(data) if data.len() == bytes.len() => {
      data.copy_from_slice(bytes);
      true
    }
    _ => false,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::render::rgb;

  #[test]
  fn image_matches_surface() {
    let surface = RgbaSurface::filled(3, 2, rgb(10, 20, 30));
    let image = surface_image(&surface);
    assert_eq!(image.width(), 3);
    assert_eq!(image.height(), 2);
    assert_eq!(image.data.as_deref(), Some(surface.as_bytes()));
  }

  #[test]
  fn upload_replaces_pixels() {
    let mut image = surface_image(&RgbaSurface::filled(2, 2, rgb(0, 0, 0)));
    let surface = RgbaSurface::filled(2, 2, rgb(255, 0, 0));
    assert!(upload_surface(&surface, &mut image));
    assert_eq!(image.data.as_deref(), Some(surface.as_bytes()));
  }

  #[test]
  fn upload_rejects_size_mismatch() {
    let original = RgbaSurface::filled(2, 2, rgb(1, 2, 3));
    let mut image = surface_image(&original);
    assert!(!upload_surface(&RgbaSurface::new(3, 3), &mut image));
    assert_eq!(image.data.as_deref(), Some(original.as_bytes()));
  }
}
