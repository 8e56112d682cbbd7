use serde::{Deserialize, Serialize};

/// Configuration for the visual-metrics pipeline.
///
/// The defaults are the behavioral contract: downstream scores were tuned
/// against these exact thresholds, so prefer overriding only for
/// experimentation, not in production judging.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MetricsParams {
    /// Edge magnitude above which a pixel participates in region location.
    pub edge_threshold: u8,
    /// Minimum number of qualifying edge pixels before the tight bounding
    /// box is trusted; below this the locator falls back to a centered
    /// square (blank or blown-out photo).
    pub min_edge_pixels: usize,
    /// Side of the fallback square as a fraction of the shorter image
    /// dimension.
    pub fallback_box_frac: f64,
    /// Padding added around the tight box on all sides, as a fraction of
    /// the shorter image dimension.
    pub pad_frac: f64,
    /// Fraction of the box width compared by the symmetry scorer (the
    /// outer margins are ignored).
    pub symmetry_span_frac: f64,
    /// Edge magnitude above which a pixel counts as blob foreground.
    pub blob_threshold: u8,
    /// Sampling stride (pixels) for the blob flood fill, both axes.
    ///
    /// Values below 3 are treated as 3: the stride is the worst-case
    /// latency bound on large images and cannot be tightened.
    pub blob_stride: usize,
    /// Minimum blob size as a fraction of the bounding-box area.
    pub min_blob_area_frac: f64,
}

impl Default for MetricsParams {
    fn default() -> Self {
        Self {
            edge_threshold: 50,
            min_edge_pixels: 100,
            fallback_box_frac: 0.6,
            pad_frac: 0.10,
            symmetry_span_frac: 0.8,
            blob_threshold: 80,
            blob_stride: 3,
            min_blob_area_frac: 0.01,
        }
    }
}

impl MetricsParams {
    /// Effective flood-fill stride after the lower clamp.
    #[inline]
    pub(crate) fn stride(&self) -> usize {
        self.blob_stride.max(3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_carry_the_contract_values() {
        let p = MetricsParams::default();
        assert_eq!(p.edge_threshold, 50);
        assert_eq!(p.min_edge_pixels, 100);
        assert_eq!(p.fallback_box_frac, 0.6);
        assert_eq!(p.pad_frac, 0.10);
        assert_eq!(p.symmetry_span_frac, 0.8);
        assert_eq!(p.blob_threshold, 80);
        assert_eq!(p.blob_stride, 3);
        assert_eq!(p.min_blob_area_frac, 0.01);
    }

    #[test]
    fn stride_never_drops_below_three() {
        let p = MetricsParams {
            blob_stride: 1,
            ..MetricsParams::default()
        };
        assert_eq!(p.stride(), 3);

        let p = MetricsParams {
            blob_stride: 5,
            ..MetricsParams::default()
        };
        assert_eq!(p.stride(), 5);
    }
}
