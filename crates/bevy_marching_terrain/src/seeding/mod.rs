//! Noise sources feeding the grid classifier.
//!
//! The [`NoiseSource`] trait is the only thing the marching pass needs from
//! a noise generator: a pure function from a 2D coordinate to a value in
//! [-1, 1].

mod noise;

use bevy::prelude::Resource;
pub use noise::SimplexNoise;

/// Deterministic scalar field sampled by the marching pass.
///
/// Implementations must be pure: the same coordinate always yields the same
/// value. The `Send + Sync` bounds let a source live in a Bevy resource.
pub trait NoiseSource: Send + Sync {
  /// Samples the field at `(x, y)`. The result lies in [-1, 1].
  fn sample(&self, x: f32, y: f32) -> f32;
}

/// Adapts a plain function or closure into a [`NoiseSource`].
///
/// ```
/// use bevy_marching_terrain::seeding::{NoiseFn, NoiseSource};
///
/// let ramp = NoiseFn(|x: f32, _y: f32| (x / 10.0).clamp(-1.0, 1.0));
/// assert_eq!(ramp.sample(5.0, 0.0), 0.5);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct NoiseFn<F>(pub F);

impl<F> NoiseSource for NoiseFn<F>
where
  F: Fn(f32, f32) -> f32 + Send + Sync,
{
  #[inline]
  fn sample(&self, x: f32, y: f32) -> f32 {
    (self.0)(x, y)
  }
}

impl<N: NoiseSource + ?Sized> NoiseSource for Box<N> {
  #[inline]
  fn sample(&self, x: f32, y: f32) -> f32 {
    (**self).sample(x, y)
  }
}

/// The noise source used by the terrain systems.
#[derive(Resource)]
pub struct TerrainNoise(pub Box<dyn NoiseSource>);

impl TerrainNoise {
  pub fn new(source: impl NoiseSource + 'static) -> Self {
    Self(Box::new(source))
  }
}
