use crate::image::GrayImage;

/// Owned Sobel gradient-magnitude plane, same dimensions as its source.
///
/// Produced once per analysis call and discarded afterwards; all visual
/// metrics read from it.
#[derive(Clone, Debug)]
pub struct EdgeMap {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl EdgeMap {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }
}

/// Compute the 3x3 Sobel gradient magnitude of a luminance plane.
///
/// Kernels: `[-1,0,1; -2,0,2; -1,0,1]` (horizontal) and
/// `[-1,-2,-1; 0,0,0; 1,2,1]` (vertical). Only interior pixels are
/// evaluated; all four border rows/columns stay 0. The magnitude is
/// `min(255, round(sqrt(gx^2 + gy^2)))` and is bit-reproducible for
/// identical input buffers.
pub fn sobel_edges(src: &GrayImage) -> EdgeMap {
    let (w, h) = (src.width, src.height);
    let mut data = vec![0u8; w * h];

    if w >= 3 && h >= 3 {
        for y in 1..h - 1 {
            for x in 1..w - 1 {
                let tl = src.get(x - 1, y - 1) as i32;
                let tc = src.get(x, y - 1) as i32;
                let tr = src.get(x + 1, y - 1) as i32;
                let ml = src.get(x - 1, y) as i32;
                let mr = src.get(x + 1, y) as i32;
                let bl = src.get(x - 1, y + 1) as i32;
                let bc = src.get(x, y + 1) as i32;
                let br = src.get(x + 1, y + 1) as i32;

                let gx = -tl + tr - 2 * ml + 2 * mr - bl + br;
                let gy = -tl - 2 * tc - tr + bl + 2 * bc + br;

                let mag = ((gx * gx + gy * gy) as f64).sqrt().round().min(255.0);
                data[y * w + x] = mag as u8;
            }
        }
    }

    EdgeMap {
        width: w,
        height: h,
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(width: usize, height: usize, data: Vec<u8>) -> GrayImage {
        assert_eq!(data.len(), width * height);
        GrayImage {
            width,
            height,
            data,
        }
    }

    #[test]
    fn uniform_image_has_no_edges() {
        let src = gray(8, 8, vec![200; 64]);
        let edges = sobel_edges(&src);
        assert!(edges.data.iter().all(|&m| m == 0));
    }

    #[test]
    fn borders_stay_zero() {
        // Checkerboard produces strong interior gradients everywhere.
        let mut data = vec![0u8; 36];
        for y in 0..6 {
            for x in 0..6 {
                data[y * 6 + x] = if (x + y) % 2 == 0 { 255 } else { 0 };
            }
        }
        let edges = sobel_edges(&gray(6, 6, data));
        for x in 0..6 {
            assert_eq!(edges.get(x, 0), 0);
            assert_eq!(edges.get(x, 5), 0);
        }
        for y in 0..6 {
            assert_eq!(edges.get(0, y), 0);
            assert_eq!(edges.get(5, y), 0);
        }
    }

    #[test]
    fn vertical_step_saturates_at_255() {
        // Left half 0, right half 255: gx at the seam is 4 * 255 = 1020,
        // so the magnitude clamps to 255.
        let mut data = vec![0u8; 6 * 6];
        for y in 0..6 {
            for x in 3..6 {
                data[y * 6 + x] = 255;
            }
        }
        let edges = sobel_edges(&gray(6, 6, data));
        assert_eq!(edges.get(3, 2), 255);
        assert!(edges.data.iter().all(|&m| m <= 255));
    }

    #[test]
    fn gentle_gradient_magnitude_is_exact() {
        // Single bright pixel of 10 in a dark field. Its diagonal
        // neighbours see gx = gy = +/-10, so magnitude =
        // round(sqrt(200)) = round(14.142) = 14.
        let mut data = vec![0u8; 5 * 5];
        data[2 * 5 + 2] = 10;
        let edges = sobel_edges(&gray(5, 5, data));
        assert_eq!(edges.get(1, 1), 14);
        // Direct horizontal neighbour sees gx = 2*10, gy = 0 -> 20.
        assert_eq!(edges.get(1, 2), 20);
    }

    #[test]
    fn tiny_images_are_all_zero() {
        let edges = sobel_edges(&gray(2, 2, vec![255, 0, 0, 255]));
        assert!(edges.data.iter().all(|&m| m == 0));
    }
}
