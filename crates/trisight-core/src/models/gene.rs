use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One gene's expression level, a fraction in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GeneExpression {
    pub gene: String,
    pub level: f64,
}

/// A user-entered gene expression panel from the genetics form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GenePanel {
    pub entries: Vec<GeneExpression>,
}

impl GenePanel {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
