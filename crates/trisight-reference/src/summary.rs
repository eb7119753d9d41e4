use serde::{Deserialize, Serialize};
use ts_rs::TS;

use trisight_core::models::metric::{Metric, MetricSet, MetricValue};

/// Qualitative band for a group mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum StatusBand {
    Excellent,
    Good,
    Fair,
    NeedsAttention,
}

impl StatusBand {
    pub fn from_score(score: f64) -> Self {
        if score > 0.75 {
            StatusBand::Excellent
        } else if score > 0.6 {
            StatusBand::Good
        } else if score > 0.45 {
            StatusBand::Fair
        } else {
            StatusBand::NeedsAttention
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusBand::Excellent => "Excellent",
            StatusBand::Good => "Good",
            StatusBand::Fair => "Fair",
            StatusBand::NeedsAttention => "Needs attention",
        }
    }
}

/// One group's roll-up in a profile summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GroupSummary {
    pub id: String,
    pub label: String,
    pub mean: f64,
    pub band: StatusBand,
    /// Lowest-scoring aspect in the group, the suggested development focus.
    pub priority_aspect: Option<String>,
}

/// Ranked entry in the intervention plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InterventionPlanEntry {
    pub label: String,
    pub intensity: f64,
}

/// Derived roll-up of a hierarchical metric set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProfileSummary {
    pub groups: Vec<GroupSummary>,
    /// Intervention aspects sorted by intensity, highest first. Empty when
    /// the set carries no intervention or therapy group.
    pub intervention_plan: Vec<InterventionPlanEntry>,
}

/// Roll a metric set up into per-group means, bands, and priorities.
pub fn summarize(set: &MetricSet) -> ProfileSummary {
    let groups = set.metrics.iter().map(group_summary).collect();
    let intervention_plan = set
        .metrics
        .iter()
        .find(|m| m.id == "intervention" || m.id == "therapy_intensity")
        .map(intervention_plan)
        .unwrap_or_default();
    ProfileSummary {
        groups,
        intervention_plan,
    }
}

fn group_summary(metric: &Metric) -> GroupSummary {
    let mean = metric.mean();
    let priority_aspect = match &metric.value {
        MetricValue::Group(children) => children
            .iter()
            .min_by(|a, b| a.mean().total_cmp(&b.mean()))
            .map(|m| m.label.clone()),
        MetricValue::Scalar(_) => None,
    };
    GroupSummary {
        id: metric.id.clone(),
        label: metric.label.clone(),
        mean,
        band: StatusBand::from_score(mean),
        priority_aspect,
    }
}

fn intervention_plan(metric: &Metric) -> Vec<InterventionPlanEntry> {
    let mut plan: Vec<InterventionPlanEntry> = metric
        .children()
        .iter()
        .map(|m| InterventionPlanEntry {
            label: m.label.clone(),
            intensity: m.mean(),
        })
        .collect();
    plan.sort_by(|a, b| b.intensity.total_cmp(&a.intensity));
    plan
}

/// Age-banded focus recommendation for the development dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FocusArea {
    EarlyStimulation,
    MotorAndCommunication,
    SocialAndIndependence,
}

impl FocusArea {
    pub fn description(&self) -> &'static str {
        match self {
            FocusArea::EarlyStimulation => "Early stimulation and foundational therapy",
            FocusArea::MotorAndCommunication => "Motor development and communication",
            FocusArea::SocialAndIndependence => "Social skills and independence",
        }
    }
}

pub fn focus_for_age(months: u32) -> FocusArea {
    if months < 12 {
        FocusArea::EarlyStimulation
    } else if months < 36 {
        FocusArea::MotorAndCommunication
    } else {
        FocusArea::SocialAndIndependence
    }
}
