use orchid_judge_core::BoundingBox;
use serde::{Deserialize, Serialize};

/// Visual metrics extracted from one plant photo.
///
/// Created once per analyzed image and treated as immutable afterwards;
/// the surrounding application may copy-and-override individual fields
/// (every count here is presented to the judge as an editable estimate).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VisualMetrics {
    /// Estimated number of open flowers, always >= 1. A coarse heuristic,
    /// not a precise count.
    pub flower_count: u32,
    /// Number of flower spikes. The pipeline cannot see this; it starts at
    /// 1 and is user-editable.
    pub spike_count: u32,
    /// Left-right mirror symmetry, 0-100.
    pub symmetry_pct: u8,
    /// Heuristic confidence in the metrics, 0-1.
    pub confidence: f32,
    /// Region the metrics were computed over, when one was located.
    pub bounding_box: Option<BoundingBox>,
}
