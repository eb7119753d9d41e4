use thiserror::Error;

/// Configuration failures, all surfaced eagerly when a [`ScoringConfig`]
/// is built. A config that constructs successfully can score any document
/// without error.
///
/// [`ScoringConfig`]: crate::scorer::ScoringConfig
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("scoring configuration has no categories")]
    EmptyConfiguration,

    #[error("duplicate category: {0}")]
    DuplicateCategory(String),

    #[error("category '{0}' has no triggers")]
    EmptyCategory(String),

    #[error("category '{0}' has an empty trigger phrase")]
    EmptyTrigger(String),

    #[error("invalid pattern in category '{category}': {source}")]
    InvalidPattern {
        category: String,
        #[source]
        source: regex::Error,
    },
}
