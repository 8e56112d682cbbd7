/// Errors raised when an RGBA buffer violates its structural invariants.
///
/// These are programmer errors at the integration boundary, not runtime
/// conditions; they surface immediately at construction.
#[derive(thiserror::Error, Debug)]
pub enum ImageBufferError {
    #[error("invalid image dimensions (width={width}, height={height})")]
    InvalidDimensions { width: usize, height: usize },
    #[error("invalid RGBA buffer length (expected {expected} bytes, got {got})")]
    InvalidLength { expected: usize, got: usize },
}

/// Borrowed view over a tightly packed, row-major RGBA pixel buffer.
///
/// The buffer is owned by the caller; the pipeline only reads it. Length is
/// validated once at construction (`width * height * 4` bytes), so every
/// downstream scan can index without re-checking.
#[derive(Clone, Copy, Debug)]
pub struct RgbaView<'a> {
    width: usize,
    height: usize,
    data: &'a [u8],
}

impl<'a> RgbaView<'a> {
    /// Wrap a raw RGBA byte slice, failing fast on structural mismatch.
    pub fn new(width: usize, height: usize, data: &'a [u8]) -> Result<Self, ImageBufferError> {
        if width == 0 || height == 0 {
            return Err(ImageBufferError::InvalidDimensions { width, height });
        }
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(4))
            .ok_or(ImageBufferError::InvalidDimensions { width, height })?;
        if data.len() != expected {
            return Err(ImageBufferError::InvalidLength {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn data(&self) -> &'a [u8] {
        self.data
    }
}

/// Owned single-channel luminance plane, one byte per pixel.
#[derive(Clone, Debug)]
pub struct GrayImage {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl GrayImage {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }
}

/// Convert an RGBA buffer to luminance with the fixed BT.601 transform
/// `L = 0.299 R + 0.587 G + 0.114 B`, rounded to the nearest integer.
///
/// Integer arithmetic keeps the result bit-reproducible across platforms;
/// alpha is ignored.
pub fn to_grayscale(src: &RgbaView<'_>) -> GrayImage {
    let mut data = Vec::with_capacity(src.width() * src.height());
    for px in src.data().chunks_exact(4) {
        let r = px[0] as u32;
        let g = px[1] as u32;
        let b = px[2] as u32;
        data.push(((299 * r + 587 * g + 114 * b + 500) / 1000) as u8);
    }
    GrayImage {
        width: src.width(),
        height: src.height(),
        data,
    }
}
