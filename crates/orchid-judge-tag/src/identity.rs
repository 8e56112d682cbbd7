use serde::{Deserialize, Serialize};

/// Structured identity guess extracted from a tag photo.
///
/// Every field defaults to an empty string when unparseable; none are ever
/// absent. `raw_text` keeps the recognizer output verbatim so a judge can
/// correct the guess by eye.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TagIdentity {
    pub genus: String,
    pub species_or_grex: String,
    pub clone_name: String,
    pub is_hybrid: bool,
    /// Recognizer confidence, 0-1, passed through from upstream.
    pub confidence: f32,
    pub raw_text: String,
}

impl TagIdentity {
    /// All-empty identity carrying only the raw text and confidence.
    pub fn empty(raw_text: impl Into<String>, confidence: f32) -> Self {
        Self {
            raw_text: raw_text.into(),
            confidence,
            ..Self::default()
        }
    }
}
