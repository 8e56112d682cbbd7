use orchid_judge_core::{sobel_edges, to_grayscale, RgbaView};

use crate::blobs::{count_blobs, estimate_flower_count};
use crate::params::MetricsParams;
use crate::region::locate_region;
use crate::result::VisualMetrics;
use crate::symmetry::symmetry_pct;

/// Confidence assigned when the region locator had to fall back.
const FALLBACK_CONFIDENCE: f32 = 0.25;

/// Run the full visual-metrics pipeline on one RGBA image.
///
/// Grayscale -> Sobel edges -> region location -> symmetry -> blob count.
/// The call owns every intermediate plane and drops them on return; the
/// same buffer always produces the same metrics.
pub fn analyze(image: &RgbaView<'_>, params: &MetricsParams) -> VisualMetrics {
    let gray = to_grayscale(image);
    let edges = sobel_edges(&gray);
    drop(gray);

    let region = locate_region(&edges, params);
    let symmetry = symmetry_pct(&edges, &region.bounding_box, params);
    let blobs = count_blobs(&edges, &region.bounding_box, params);
    let flower_count = estimate_flower_count(blobs);

    let confidence = if region.used_fallback {
        FALLBACK_CONFIDENCE
    } else {
        (0.4 + region.edge_pixels as f32 / 20_000.0).clamp(0.4, 0.95)
    };

    log::info!(
        "metrics: {} flower(s) from {} blob(s), symmetry {}%, confidence {:.2}",
        flower_count,
        blobs,
        symmetry,
        confidence
    );

    VisualMetrics {
        flower_count,
        spike_count: 1,
        symmetry_pct: symmetry,
        confidence,
        bounding_box: Some(region.bounding_box),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orchid_judge_core::BoundingBox;

    #[test]
    fn uniform_image_yields_fallback_metrics() {
        let pixels = vec![180u8; 100 * 100 * 4];
        let view = RgbaView::new(100, 100, &pixels).unwrap();
        let metrics = analyze(&view, &MetricsParams::default());

        assert_eq!(metrics.flower_count, 1);
        assert_eq!(metrics.spike_count, 1);
        assert_eq!(metrics.symmetry_pct, 100); // zero edge map mirrors itself
        assert_eq!(metrics.confidence, FALLBACK_CONFIDENCE);
        assert_eq!(
            metrics.bounding_box,
            Some(BoundingBox {
                x: 20,
                y: 20,
                width: 60,
                height: 60
            })
        );
    }

    #[test]
    fn analysis_is_deterministic() {
        let mut pixels = vec![0u8; 120 * 120 * 4];
        // A bright block to give the pipeline real edges.
        for y in 30..90 {
            for x in 30..90 {
                let i = (y * 120 + x) * 4;
                pixels[i] = 255;
                pixels[i + 1] = 255;
                pixels[i + 2] = 255;
                pixels[i + 3] = 255;
            }
        }
        let view = RgbaView::new(120, 120, &pixels).unwrap();
        let params = MetricsParams::default();
        let a = analyze(&view, &params);
        let b = analyze(&view, &params);
        assert_eq!(a, b);
    }
}
