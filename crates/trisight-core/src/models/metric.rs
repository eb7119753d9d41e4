use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// A scalar measurement or a named group of nested metrics.
///
/// The dashboards mix flat maps with one- and two-level nesting (the motor
/// milestones nest twice); this one recursive shape serves all of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MetricValue {
    Scalar(f64),
    Group(Vec<Metric>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Metric {
    pub id: String,
    pub label: String,
    pub value: MetricValue,
}

impl Metric {
    pub fn scalar(id: &str, label: &str, value: f64) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            value: MetricValue::Scalar(value),
        }
    }

    pub fn group(id: &str, label: &str, metrics: Vec<Metric>) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            value: MetricValue::Group(metrics),
        }
    }

    /// The direct children of a group, or an empty slice for a scalar.
    pub fn children(&self) -> &[Metric] {
        match &self.value {
            MetricValue::Group(children) => children,
            MetricValue::Scalar(_) => &[],
        }
    }

    /// Mean over all scalar leaves under this metric. A scalar is its own
    /// mean; an empty group rolls up to zero.
    pub fn mean(&self) -> f64 {
        let mut sum = 0.0;
        let mut leaves = 0usize;
        self.fold_leaves(&mut sum, &mut leaves);
        if leaves == 0 {
            0.0
        } else {
            sum / leaves as f64
        }
    }

    fn fold_leaves(&self, sum: &mut f64, leaves: &mut usize) {
        match &self.value {
            MetricValue::Scalar(v) => {
                *sum += v;
                *leaves += 1;
            }
            MetricValue::Group(children) => {
                for child in children {
                    child.fold_leaves(sum, leaves);
                }
            }
        }
    }
}

/// Ordered, named collection of metrics: the display contract for one
/// dashboard section. Insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MetricSet {
    pub metrics: Vec<Metric>,
}

impl MetricSet {
    pub fn new(metrics: Vec<Metric>) -> Self {
        Self { metrics }
    }

    pub fn get(&self, id: &str) -> Option<&Metric> {
        self.metrics.iter().find(|m| m.id == id)
    }

    /// Like [`get`](Self::get), but a missing id is an error the caller can
    /// propagate.
    pub fn require(&self, id: &str) -> Result<&Metric, CoreError> {
        self.get(id)
            .ok_or_else(|| CoreError::MissingMetric(id.to_string()))
    }
}
