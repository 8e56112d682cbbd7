use serde::{Deserialize, Serialize};

/// Discrete, ordered award band for an educational practice judging.
///
/// These are teaching categories for show preparation, deliberately not
/// named after any real judging body's awards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AwardBand {
    /// Below the first cut point: keep practicing.
    NoAward,
    Commended,
    Distinction,
    HighDistinction,
}

/// Ascending cut points on the nominal 0-10 weighted total.
const CUT_COMMENDED: f64 = 5.0;
const CUT_DISTINCTION: f64 = 6.5;
const CUT_HIGH_DISTINCTION: f64 = 8.0;

impl AwardBand {
    /// Band for a weighted total. Deterministic: equal inputs always land
    /// in the same band.
    pub fn for_total(total: f64) -> Self {
        if total >= CUT_HIGH_DISTINCTION {
            AwardBand::HighDistinction
        } else if total >= CUT_DISTINCTION {
            AwardBand::Distinction
        } else if total >= CUT_COMMENDED {
            AwardBand::Commended
        } else {
            AwardBand::NoAward
        }
    }

    /// Human-readable label, flagged as practice to avoid confusion with
    /// real show awards.
    pub fn label(&self) -> &'static str {
        match self {
            AwardBand::NoAward => "No award (practice)",
            AwardBand::Commended => "Commended (practice)",
            AwardBand::Distinction => "Distinction (practice)",
            AwardBand::HighDistinction => "High distinction (practice)",
        }
    }
}

impl std::fmt::Display for AwardBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
