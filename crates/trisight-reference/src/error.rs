use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReferenceError {
    #[error("gene panel is empty")]
    EmptyPanel,

    #[error("gene panel mismatch: {genes} genes but {levels} expression levels")]
    PanelMismatch { genes: usize, levels: usize },

    #[error("unreadable expression level '{raw}' for gene {gene}")]
    UnreadableLevel { gene: String, raw: String },

    #[error("expression level {level} for gene {gene} is outside [0, 1]")]
    LevelOutOfRange { gene: String, level: f64 },
}
