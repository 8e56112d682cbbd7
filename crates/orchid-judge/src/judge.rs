//! End-to-end helpers: adapt `image` buffers and run the full pipeline.

use orchid_judge_core::{ImageBufferError, RgbaView};
use orchid_judge_metrics::{analyze, MetricsParams, VisualMetrics};
use orchid_judge_score::{JudgedEntry, ScoringRaw, ScoringWeights};
use orchid_judge_tag::parse_tag;

/// Errors produced by the high-level facade helpers.
#[derive(thiserror::Error, Debug)]
pub enum JudgeError {
    #[error(transparent)]
    Buffer(#[from] ImageBufferError),
}

/// Convert an `image::RgbaImage` into the lightweight core view type.
pub fn rgba_view(img: &::image::RgbaImage) -> RgbaView<'_> {
    // An RgbaImage is tightly packed by construction, so this cannot fail.
    RgbaView::new(img.width() as usize, img.height() as usize, img.as_raw())
        .expect("RgbaImage buffer is always width*height*4 bytes")
}

/// Run the visual-metrics pipeline on a decoded RGBA image.
pub fn analyze_image(img: &::image::RgbaImage, params: &MetricsParams) -> VisualMetrics {
    analyze(&rgba_view(img), params)
}

/// Run the visual-metrics pipeline on a raw RGBA byte slice.
pub fn analyze_rgba_u8(
    width: usize,
    height: usize,
    pixels: &[u8],
    params: &MetricsParams,
) -> Result<VisualMetrics, JudgeError> {
    let view = RgbaView::new(width, height, pixels)?;
    Ok(analyze(&view, params))
}

/// Judge one entry end-to-end: plant photo, recognized tag text with its
/// confidence (0-1, caller-normalized), and the judge's raw sub-scores.
pub fn judge_image(
    img: &::image::RgbaImage,
    params: &MetricsParams,
    tag_text: &str,
    tag_confidence: f32,
    raw: ScoringRaw,
    weights: ScoringWeights,
) -> JudgedEntry {
    let metrics = analyze_image(img, params);
    let tag = parse_tag(tag_text, tag_confidence);
    let entry = JudgedEntry::new(tag, metrics, raw, weights);
    log::info!(
        "judged entry: {} {} -> {:.2} ({})",
        entry.tag.genus,
        entry.tag.species_or_grex,
        entry.weighted_total,
        entry.band
    );
    entry
}

/// Raw-slice variant of [`judge_image`].
pub fn judge_rgba_u8(
    width: usize,
    height: usize,
    pixels: &[u8],
    params: &MetricsParams,
    tag_text: &str,
    tag_confidence: f32,
    raw: ScoringRaw,
    weights: ScoringWeights,
) -> Result<JudgedEntry, JudgeError> {
    let metrics = analyze_rgba_u8(width, height, pixels, params)?;
    let tag = parse_tag(tag_text, tag_confidence);
    Ok(JudgedEntry::new(tag, metrics, raw, weights))
}
