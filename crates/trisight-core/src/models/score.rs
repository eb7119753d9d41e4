use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::metric::{Metric, MetricSet, MetricValue};

/// One category's score in a scoring result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreEntry {
    pub category: String,
    pub label: String,
    pub value: u32,
}

/// Ordered category → score mapping produced by one scoring call.
///
/// Entry order is the configuration's category order, which is also the
/// display order downstream. Category names are unique within a vector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreVector {
    pub entries: Vec<ScoreEntry>,
}

impl ScoreVector {
    pub fn get(&self, category: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flatten into the hierarchical metric model so scored text can be
    /// displayed alongside the reference sets.
    pub fn into_metric_set(self) -> MetricSet {
        MetricSet {
            metrics: self
                .entries
                .into_iter()
                .map(|e| Metric {
                    id: e.category,
                    label: e.label,
                    value: MetricValue::Scalar(f64::from(e.value)),
                })
                .collect(),
        }
    }
}
