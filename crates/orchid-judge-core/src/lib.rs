//! Core pixel-buffer types and image primitives for the orchid judging
//! pipeline.
//!
//! This crate is intentionally small and purely numeric. It does *not*
//! depend on any concrete image decoder; callers hand it a borrowed RGBA
//! buffer (`RgbaView`) and get back owned luminance and edge-magnitude
//! planes that the metric crates consume.

mod bbox;
mod edge;
mod image;
mod logger;

pub use bbox::BoundingBox;
pub use edge::{sobel_edges, EdgeMap};
pub use image::{to_grayscale, GrayImage, ImageBufferError, RgbaView};
pub use logger::init_with_level;
