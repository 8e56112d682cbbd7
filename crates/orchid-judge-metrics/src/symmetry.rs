use orchid_judge_core::{BoundingBox, EdgeMap};

use crate::params::MetricsParams;

/// Left-right mirror similarity of edge magnitudes inside the box.
///
/// Columns are paired about the box's horizontal center over the middle
/// `symmetry_span_frac` of its width (the outer margins are ignored as
/// background). The score is `1 - avg_abs_diff / 255`, clamped to `[0, 1]`.
/// A degenerate box with no comparable column pairs scores the neutral
/// `0.5` rather than failing.
pub fn symmetry_score(edges: &EdgeMap, bbox: &BoundingBox, params: &MetricsParams) -> f64 {
    let w = bbox.width;
    let margin_frac = (1.0 - params.symmetry_span_frac) / 2.0;
    let margin = (w as f64 * margin_frac) as usize;
    let half = w / 2;

    let mut total_diff = 0u64;
    let mut pairs = 0u64;

    for i in margin..half {
        let left = bbox.x + i;
        let right = bbox.x + w - 1 - i;
        for y in bbox.y..bbox.bottom() {
            let a = edges.get(left, y) as i64;
            let b = edges.get(right, y) as i64;
            total_diff += a.abs_diff(b);
            pairs += 1;
        }
    }

    if pairs == 0 {
        return 0.5;
    }

    let avg = total_diff as f64 / pairs as f64;
    (1.0 - avg / 255.0).clamp(0.0, 1.0)
}

/// `symmetry_score` reported as an integer percentage.
pub fn symmetry_pct(edges: &EdgeMap, bbox: &BoundingBox, params: &MetricsParams) -> u8 {
    (symmetry_score(edges, bbox, params) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn full_box(edges: &EdgeMap) -> BoundingBox {
        BoundingBox {
            x: 0,
            y: 0,
            width: edges.width,
            height: edges.height,
        }
    }

    #[test]
    fn mirrored_map_scores_100() {
        // Mirror-symmetric pattern: column x and column w-1-x are equal.
        let w = 40;
        let h = 20;
        let mut data = vec![0u8; w * h];
        for y in 0..h {
            for x in 0..w {
                let d = x.min(w - 1 - x);
                data[y * w + x] = (d * 12).min(255) as u8;
            }
        }
        let edges = EdgeMap {
            width: w,
            height: h,
            data,
        };
        let bbox = full_box(&edges);
        let params = MetricsParams::default();
        assert_relative_eq!(symmetry_score(&edges, &bbox, &params), 1.0);
        assert_eq!(symmetry_pct(&edges, &bbox, &params), 100);
    }

    #[test]
    fn maximal_divergence_scores_0() {
        // Left half 255, right half 0: every compared pair differs by 255.
        let w = 40;
        let h = 10;
        let mut data = vec![0u8; w * h];
        for y in 0..h {
            for x in 0..w / 2 {
                data[y * w + x] = 255;
            }
        }
        let edges = EdgeMap {
            width: w,
            height: h,
            data,
        };
        let bbox = full_box(&edges);
        let params = MetricsParams::default();
        assert_relative_eq!(symmetry_score(&edges, &bbox, &params), 0.0);
        assert_eq!(symmetry_pct(&edges, &bbox, &params), 0);
    }

    #[test]
    fn degenerate_box_is_neutral() {
        let edges = EdgeMap {
            width: 10,
            height: 10,
            data: vec![0; 100],
        };
        let bbox = BoundingBox {
            x: 4,
            y: 4,
            width: 1,
            height: 1,
        };
        let params = MetricsParams::default();
        assert_relative_eq!(symmetry_score(&edges, &bbox, &params), 0.5);
        assert_eq!(symmetry_pct(&edges, &bbox, &params), 50);
    }

    #[test]
    fn outer_margins_are_ignored() {
        // Asymmetry confined to the outer 10% of the box width must not
        // affect the score.
        let w = 40;
        let h = 10;
        let mut data = vec![0u8; w * h];
        for y in 0..h {
            data[y * w] = 255; // leftmost column only
        }
        let edges = EdgeMap {
            width: w,
            height: h,
            data,
        };
        let bbox = full_box(&edges);
        let params = MetricsParams::default();
        assert_relative_eq!(symmetry_score(&edges, &bbox, &params), 1.0);
    }
}
