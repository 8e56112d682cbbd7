use orchid_judge_core::{BoundingBox, EdgeMap};

use crate::params::MetricsParams;

/// Count connected strong-edge blobs inside the bounding box.
///
/// The edge map is binarized at `params.blob_threshold` and sampled every
/// `stride` pixels in both axes. A stack-based, 4-connected flood fill
/// (steps of one stride on the sample lattice) groups foreground samples;
/// a group counts as a blob when the image area it stands for exceeds
/// `params.min_blob_area_frac` of the bounding-box area. The fill is
/// iterative on purpose: recursion depth would scale with image size.
pub fn count_blobs(edges: &EdgeMap, bbox: &BoundingBox, params: &MetricsParams) -> usize {
    let stride = params.stride();

    // Sample-lattice dimensions (ceil division).
    let gw = bbox.width.div_ceil(stride);
    let gh = bbox.height.div_ceil(stride);
    if gw == 0 || gh == 0 {
        return 0;
    }

    let foreground = |gx: usize, gy: usize| -> bool {
        let x = bbox.x + gx * stride;
        let y = bbox.y + gy * stride;
        edges.get(x, y) > params.blob_threshold
    };

    // Each sample stands for stride^2 pixels of the box.
    let min_samples = (params.min_blob_area_frac * bbox.area() as f64
        / (stride * stride) as f64) as usize;

    let mut visited = vec![false; gw * gh];
    let mut stack: Vec<(usize, usize)> = Vec::new();
    let mut blobs = 0usize;

    for sy in 0..gh {
        for sx in 0..gw {
            if visited[sy * gw + sx] || !foreground(sx, sy) {
                continue;
            }

            let mut size = 0usize;
            visited[sy * gw + sx] = true;
            stack.push((sx, sy));

            while let Some((cx, cy)) = stack.pop() {
                size += 1;

                let mut visit = |nx: usize, ny: usize| {
                    if !visited[ny * gw + nx] && foreground(nx, ny) {
                        visited[ny * gw + nx] = true;
                        stack.push((nx, ny));
                    }
                };
                if cx > 0 {
                    visit(cx - 1, cy);
                }
                if cx + 1 < gw {
                    visit(cx + 1, cy);
                }
                if cy > 0 {
                    visit(cx, cy - 1);
                }
                if cy + 1 < gh {
                    visit(cx, cy + 1);
                }
            }

            if size > min_samples {
                blobs += 1;
            }
        }
    }

    log::debug!(
        "blobs: {} region(s) above {} samples in {}x{} lattice",
        blobs,
        min_samples,
        gw,
        gh
    );
    blobs
}

/// Map a raw blob count to an estimated flower count.
///
/// Fixed buckets tuned by inspection; this is an estimate the user can
/// always edit, not a precise count. The result is always at least 1.
pub fn estimate_flower_count(blobs: usize) -> u32 {
    let flowers = match blobs {
        0..=2 => 1,
        3..=6 => blobs.div_ceil(2),
        7..=12 => blobs.div_ceil(3),
        _ => blobs.div_ceil(4).min(20),
    };
    flowers.max(1) as u32
}
