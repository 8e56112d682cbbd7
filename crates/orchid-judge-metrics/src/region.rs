use orchid_judge_core::{BoundingBox, EdgeMap};

use crate::params::MetricsParams;

/// Outcome of the region-of-interest locator.
#[derive(Clone, Copy, Debug)]
pub struct RegionResult {
    /// Padded (or fallback) bounding box, clipped to image bounds.
    pub bounding_box: BoundingBox,
    /// Number of pixels above the edge threshold over the whole image.
    pub edge_pixels: usize,
    /// True when too few edges were found and the centered fallback square
    /// was substituted.
    pub used_fallback: bool,
}

/// Locate the bounding box of the dominant photographed subject.
///
/// Collects every pixel whose edge magnitude exceeds
/// `params.edge_threshold` and takes their tight bounding box, padded by
/// `params.pad_frac` of the shorter image dimension on all sides. When
/// fewer than `params.min_edge_pixels` qualify (blank or blown-out photo)
/// the locator never fails; it substitutes a centered square covering
/// `params.fallback_box_frac` of the shorter dimension.
pub fn locate_region(edges: &EdgeMap, params: &MetricsParams) -> RegionResult {
    let (w, h) = (edges.width, edges.height);

    let mut count = 0usize;
    let mut min_x = w;
    let mut min_y = h;
    let mut max_x = 0usize;
    let mut max_y = 0usize;

    for y in 0..h {
        for x in 0..w {
            if edges.get(x, y) > params.edge_threshold {
                count += 1;
                min_x = min_x.min(x);
                min_y = min_y.min(y);
                max_x = max_x.max(x);
                max_y = max_y.max(y);
            }
        }
    }

    if count < params.min_edge_pixels {
        let bounding_box = fallback_box(w, h, params.fallback_box_frac);
        log::debug!(
            "region: {} edge pixels < {}, using fallback box {:?}",
            count,
            params.min_edge_pixels,
            bounding_box
        );
        return RegionResult {
            bounding_box,
            edge_pixels: count,
            used_fallback: true,
        };
    }

    let pad = (w.min(h) as f64 * params.pad_frac).round() as usize;
    let x = min_x.saturating_sub(pad);
    let y = min_y.saturating_sub(pad);
    let right = (max_x + pad).min(w - 1);
    let bottom = (max_y + pad).min(h - 1);

    let bounding_box = BoundingBox {
        x,
        y,
        width: right - x + 1,
        height: bottom - y + 1,
    };
    log::debug!(
        "region: {} edge pixels, tight box padded to {:?}",
        count,
        bounding_box
    );

    RegionResult {
        bounding_box,
        edge_pixels: count,
        used_fallback: false,
    }
}

/// Centered square covering `frac` of the shorter image dimension.
fn fallback_box(width: usize, height: usize, frac: f64) -> BoundingBox {
    let side = ((width.min(height) as f64 * frac).round() as usize).max(1);
    let side = side.min(width).min(height);
    BoundingBox {
        x: (width - side) / 2,
        y: (height - side) / 2,
        width: side,
        height: side,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge_map(width: usize, height: usize) -> EdgeMap {
        EdgeMap {
            width,
            height,
            data: vec![0; width * height],
        }
    }

    #[test]
    fn uniform_image_falls_back_to_centered_square() {
        let edges = edge_map(100, 200);
        let res = locate_region(&edges, &MetricsParams::default());
        assert!(res.used_fallback);
        assert_eq!(res.edge_pixels, 0);
        // Side = 0.6 * min(100, 200) = 60, centered.
        assert_eq!(
            res.bounding_box,
            BoundingBox {
                x: 20,
                y: 70,
                width: 60,
                height: 60
            }
        );
    }

    #[test]
    fn sparse_edges_still_fall_back() {
        let mut edges = edge_map(100, 100);
        // 99 qualifying pixels: one short of the contract minimum.
        for i in 0..99 {
            edges.data[i * 17 % (100 * 100)] = 200;
        }
        let res = locate_region(&edges, &MetricsParams::default());
        assert!(res.used_fallback);
    }

    #[test]
    fn tight_box_is_padded_and_clipped() {
        let mut edges = edge_map(100, 100);
        // A 20x20 bright block at (40..60, 40..60): 400 pixels > 100.
        for y in 40..60 {
            for x in 40..60 {
                edges.data[y * 100 + x] = 200;
            }
        }
        let res = locate_region(&edges, &MetricsParams::default());
        assert!(!res.used_fallback);
        assert_eq!(res.edge_pixels, 400);
        // pad = round(0.10 * 100) = 10 on every side.
        assert_eq!(
            res.bounding_box,
            BoundingBox {
                x: 30,
                y: 30,
                width: 40,
                height: 40
            }
        );
    }

    #[test]
    fn padding_clips_at_image_bounds() {
        let mut edges = edge_map(50, 50);
        // Block flush against the top-left corner.
        for y in 0..20 {
            for x in 0..20 {
                edges.data[y * 50 + x] = 200;
            }
        }
        let res = locate_region(&edges, &MetricsParams::default());
        assert!(!res.used_fallback);
        // pad = 5; the box cannot extend past (0, 0).
        assert_eq!(
            res.bounding_box,
            BoundingBox {
                x: 0,
                y: 0,
                width: 25,
                height: 25
            }
        );
    }

    #[test]
    fn threshold_is_strictly_greater_than() {
        let mut edges = edge_map(100, 100);
        // Exactly at the threshold: must not qualify.
        for i in 0..edges.data.len() {
            edges.data[i] = 50;
        }
        let res = locate_region(&edges, &MetricsParams::default());
        assert!(res.used_fallback);
        assert_eq!(res.edge_pixels, 0);
    }
}
