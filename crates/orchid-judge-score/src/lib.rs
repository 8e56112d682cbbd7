//! Deterministic weighted scoring for judged orchid entries.
//!
//! Six raw sub-scores (nominal 0-10) and six positive weights combine into
//! a weighted total and a discrete award band. Both are pure functions of
//! `(raw, weights)`: recomputing from the same inputs always yields
//! bit-identical output.
//!
//! ## Quickstart
//!
//! ```
//! use orchid_judge_score::{weighted_total, AwardBand, ScoringRaw, ScoringWeights};
//!
//! let raw = ScoringRaw::uniform(8);
//! let weights = ScoringWeights::default();
//! let total = weighted_total(&raw, &weights);
//! assert_eq!(AwardBand::for_total(total), AwardBand::HighDistinction);
//! ```
//!
//! The bands are educational practice categories, not real show awards.

mod band;
mod entry;
mod weights;

pub use band::AwardBand;
pub use entry::JudgedEntry;
pub use weights::{weighted_total, ScoringRaw, ScoringWeights};
