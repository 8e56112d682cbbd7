use orchid_judge_metrics::VisualMetrics;
use orchid_judge_tag::TagIdentity;
use serde::{Deserialize, Serialize};

use crate::band::AwardBand;
use crate::weights::{weighted_total, ScoringRaw, ScoringWeights};

/// One fully judged entry: identity, visual metrics, scores, and verdict.
///
/// Created once per capture session. The computed fields are only ever
/// touched through [`JudgedEntry::rescore`], keeping `weighted_total` and
/// `band` consistent with `raw`/`weights` at all times.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JudgedEntry {
    pub tag: TagIdentity,
    pub metrics: VisualMetrics,
    pub raw: ScoringRaw,
    pub weights: ScoringWeights,
    pub weighted_total: f64,
    pub band: AwardBand,
}

impl JudgedEntry {
    /// Assemble an entry, computing the weighted total and band.
    pub fn new(
        tag: TagIdentity,
        metrics: VisualMetrics,
        raw: ScoringRaw,
        weights: ScoringWeights,
    ) -> Self {
        let total = weighted_total(&raw, &weights);
        Self {
            tag,
            metrics,
            raw,
            weights,
            weighted_total: total,
            band: AwardBand::for_total(total),
        }
    }

    /// Explicit re-scoring with new raw values and weights.
    ///
    /// Idempotent: rescoring twice with identical inputs leaves the entry
    /// bit-identical.
    pub fn rescore(&mut self, raw: ScoringRaw, weights: ScoringWeights) {
        self.raw = raw;
        self.weights = weights;
        self.weighted_total = weighted_total(&raw, &weights);
        self.band = AwardBand::for_total(self.weighted_total);
    }
}
