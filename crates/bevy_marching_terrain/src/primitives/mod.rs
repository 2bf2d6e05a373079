//! Storage primitives shared by the marching pass and the noise preview.

mod surface;

pub use surface::{RgbaSurface, Surface};
