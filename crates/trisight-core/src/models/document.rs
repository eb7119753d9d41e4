use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A free-text clinical note submitted for scoring.
///
/// Documents are per-request: created from raw form input, scored once,
/// discarded. Scoring never mutates the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Document {
    text: String,
}

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Case-folded copy of the text. Matching is case-insensitive; no other
    /// normalization is applied.
    pub fn folded(&self) -> String {
        self.text.to_lowercase()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
