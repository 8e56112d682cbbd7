use serde::{Deserialize, Serialize};

/// Raw sub-scores over the six fixed judging categories.
///
/// Values are nominally 0-10 but are accepted as given: range validation
/// is the caller's responsibility, and the engine never clamps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringRaw {
    pub form: u8,
    pub color: u8,
    pub size: u8,
    pub floriferousness: u8,
    pub condition: u8,
    pub distinctiveness: u8,
}

impl ScoringRaw {
    /// Same raw value in every category.
    pub fn uniform(value: u8) -> Self {
        Self {
            form: value,
            color: value,
            size: value,
            floriferousness: value,
            condition: value,
            distinctiveness: value,
        }
    }
}

/// Positive weights over the six fixed judging categories.
///
/// The defaults are a configuration constant, not derived from the image.
/// They sum to 100 for legibility; the weighted mean is scale-invariant,
/// so only the ratios matter.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub form: f64,
    pub color: f64,
    pub size: f64,
    pub floriferousness: f64,
    pub condition: f64,
    pub distinctiveness: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            form: 30.0,
            color: 30.0,
            size: 10.0,
            floriferousness: 15.0,
            condition: 10.0,
            distinctiveness: 5.0,
        }
    }
}

impl ScoringWeights {
    /// Equal weight in every category.
    pub fn uniform(value: f64) -> Self {
        Self {
            form: value,
            color: value,
            size: value,
            floriferousness: value,
            condition: value,
            distinctiveness: value,
        }
    }
}

/// Weighted mean of the six raw sub-scores:
/// `sum(raw[c] * weight[c]) / sum(weight[c])`.
pub fn weighted_total(raw: &ScoringRaw, weights: &ScoringWeights) -> f64 {
    let pairs = [
        (raw.form, weights.form),
        (raw.color, weights.color),
        (raw.size, weights.size),
        (raw.floriferousness, weights.floriferousness),
        (raw.condition, weights.condition),
        (raw.distinctiveness, weights.distinctiveness),
    ];

    let mut weighted_sum = 0.0;
    let mut weight_sum = 0.0;
    for (r, w) in pairs {
        weighted_sum += r as f64 * w;
        weight_sum += w;
    }
    weighted_sum / weight_sum
}
