//! High-level facade crate for the `orchid-judge-*` workspace.
//!
//! An orchid-show judging aid: photograph a blooming plant and its
//! identification tag, extract a structured identity guess from the
//! recognized tag text, compute visual metrics (flower count, symmetry)
//! from the plant photo, and combine user-adjusted raw scores with fixed
//! weights into a banded practice verdict. Everything runs on-device; the
//! only external collaborators are an image decoder and a text
//! recognizer, both consumed as plain buffers/strings.
//!
//! This crate provides:
//! - stable, convenient re-exports of the underlying pipeline crates
//! - (feature-gated) end-to-end helpers that adapt `image::RgbaImage`
//!   buffers and run the full judging pipeline in one call.
//!
//! ## Quickstart
//!
//! ```
//! use orchid_judge::judge;
//! use orchid_judge::{MetricsParams, ScoringRaw, ScoringWeights};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let img = image::RgbaImage::new(64, 64);
//! let entry = judge::judge_image(
//!     &img,
//!     &MetricsParams::default(),
//!     "Cattleya labiata 'Alba'",
//!     0.9,
//!     ScoringRaw::uniform(7),
//!     ScoringWeights::default(),
//! );
//! println!("{}", entry.band);
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `orchid_judge::core`: pixel-buffer views, grayscale, Sobel edges.
//! - `orchid_judge::metrics`: region, symmetry, flower-count pipeline.
//! - `orchid_judge::tag`: tag-text structurer.
//! - `orchid_judge::score`: weighted totals, award bands, judged entries.
//! - `orchid_judge::judge` (feature `image`): end-to-end helpers from
//!   `image::RgbaImage` or raw RGBA byte slices.

pub use orchid_judge_core as core;
pub use orchid_judge_metrics as metrics;
pub use orchid_judge_score as score;
pub use orchid_judge_tag as tag;

pub use orchid_judge_core::{BoundingBox, ImageBufferError, RgbaView};
pub use orchid_judge_metrics::{analyze, MetricsParams, VisualMetrics};
pub use orchid_judge_score::{AwardBand, JudgedEntry, ScoringRaw, ScoringWeights};
pub use orchid_judge_tag::{parse_tag, TagIdentity};

#[cfg(feature = "image")]
pub mod judge;
