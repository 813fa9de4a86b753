//! Raster primitives shared by the chartscan detectors.
//!
//! This crate is intentionally small and free of image-format concerns. It
//! works on borrowed row-major byte buffers and does *not* depend on any
//! concrete image-decoding crate.

mod color;
mod image;
mod logger;
mod mask;
mod morphology;

pub use color::{rgb_to_hsv, ColorRange, HsvBounds};
pub use image::RgbImageView;
pub use logger::init_with_level;
pub use mask::Mask;
pub use morphology::{close, dilate, erode, open, MorphologyParams};
