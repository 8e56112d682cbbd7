//! Visual metrics for a photographed show plant, built on top of
//! `orchid-judge-core`.
//!
//! ## Quickstart
//!
//! ```
//! use orchid_judge_core::RgbaView;
//! use orchid_judge_metrics::{analyze, MetricsParams};
//!
//! let pixels = vec![0u8; 64 * 64 * 4];
//! let view = RgbaView::new(64, 64, &pixels).unwrap();
//! let metrics = analyze(&view, &MetricsParams::default());
//! assert!(metrics.flower_count >= 1);
//! ```
//!
//! Pipeline stages, in order:
//! 1. Grayscale conversion and Sobel edge map (`orchid-judge-core`).
//! 2. Region-of-interest location from thresholded edge pixels, with a
//!    centered fallback square when the photo carries too few edges.
//! 3. Left-right mirror symmetry score inside the region.
//! 4. Strided, stack-based flood fill counting edge blobs, bucketed into a
//!    flower-count estimate.
//!
//! Every stage is a pure function of its inputs; each `analyze` call owns
//! its own scratch buffers and drops them on return.

mod analyzer;
mod blobs;
mod params;
mod region;
mod result;
mod symmetry;

pub use analyzer::analyze;
pub use blobs::{count_blobs, estimate_flower_count};
pub use params::MetricsParams;
pub use region::{locate_region, RegionResult};
pub use result::VisualMetrics;
pub use symmetry::{symmetry_pct, symmetry_score};
