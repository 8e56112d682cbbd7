use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in pixel coordinates, always inside the image it
/// was derived from, with `width, height > 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl BoundingBox {
    /// One-past-the-last column covered by the box.
    #[inline]
    pub fn right(&self) -> usize {
        self.x + self.width
    }

    /// One-past-the-last row covered by the box.
    #[inline]
    pub fn bottom(&self) -> usize {
        self.y + self.height
    }

    #[inline]
    pub fn area(&self) -> usize {
        self.width * self.height
    }
}
