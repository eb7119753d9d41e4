//! Built-in markdown templates for the three standard reports.

use serde::Serialize;
use tracing::info;

use trisight_core::error::CoreError;
use trisight_core::models::metric::{Metric, MetricSet};
use trisight_reference::summary::ProfileSummary;

use crate::error::ReportError;
use crate::render::render_template;

const GENETIC_TEMPLATE: &str = "\
## Genetic Analysis Report

### Overview
- **Dominant karyotype**: {{ dominant_karyotype }} ({{ dominant_share }}% of cases)
- **Marker genes evaluated**: {{ markers | length }}

### Marker Gene Expression
{% for m in markers %}- **{{ m.label }}**: expression level {{ m.percent }}%
{% endfor %}
### Associated Condition Risk
{% for r in risks %}- **{{ r.label }}**: risk {{ r.percent }}%
{% endfor %}
### Follow-up
- Periodic monitoring of associated medical conditions
- Further genetic counselling
- Early intervention guided by the expression profile
";

const DEVELOPMENT_TEMPLATE: &str = "\
## Developmental Progress Report

### Motor Development
- **Gross motor**: progressive development from {{ gross_from }}% to {{ gross_to }}%
- **Fine motor**: gradual gains from {{ fine_from }}% to {{ fine_to }}%

### Cognitive Profile
{% for c in cognitive %}- **{{ c.label }}**: {{ c.percent }}% capacity
{% endfor %}
### Recommended Therapy
{% for t in therapy %}- **{{ t.label }}**: intensity {{ t.percent }}%
{% endfor %}
### Social and Emotional Skills
{% for s in social %}- **{{ s.label }}**: {{ s.percent }}% ability
{% endfor %}
### Support Strategy
- Regular therapy matched to individual needs
- Holistic, personal approach
- Focus on each child's unique potential
";

const MANAGEMENT_TEMPLATE: &str = "\
## Holistic Management Report

### Multidimensional Evaluation
{% for g in groups %}- **{{ g.label }}**: {{ g.band }} (score {{ g.percent }}%)
{% endfor %}
### Development Focus
{% for p in priorities %}- **{{ p.group }}**: prioritize {{ p.aspect }}
{% endfor %}
### Intervention Plan
{% for i in plan %}- **{{ i.label }}**: intensity {{ i.percent }}%, continue and optimize
{% endfor %}";

#[derive(Serialize)]
struct LineItem {
    label: String,
    percent: String,
}

#[derive(Serialize)]
struct GeneticContext {
    dominant_karyotype: String,
    dominant_share: String,
    markers: Vec<LineItem>,
    risks: Vec<LineItem>,
}

/// Render the genetic analysis report for a genetics metric set.
pub fn genetic_report(set: &MetricSet) -> Result<String, ReportError> {
    let karyotype = set.require("karyotype_distribution")?;
    let markers = set.require("marker_expression")?;
    let risks = set.require("condition_risk")?;

    let dominant = karyotype
        .children()
        .iter()
        .max_by(|a, b| a.mean().total_cmp(&b.mean()));

    let context = GeneticContext {
        dominant_karyotype: dominant.map(|m| m.label.clone()).unwrap_or_default(),
        dominant_share: dominant
            .map(|m| format!("{:.0}", m.mean()))
            .unwrap_or_default(),
        markers: fraction_lines(markers),
        risks: fraction_lines(risks),
    };

    let rendered = render_template("genetic_report", GENETIC_TEMPLATE, &context)?;
    info!(
        markers = context.markers.len(),
        risks = context.risks.len(),
        "genetic report rendered"
    );
    Ok(rendered)
}

#[derive(Serialize)]
struct DevelopmentContext {
    gross_from: String,
    gross_to: String,
    fine_from: String,
    fine_to: String,
    cognitive: Vec<LineItem>,
    therapy: Vec<LineItem>,
    social: Vec<LineItem>,
}

/// Render the developmental progress report for a development metric set.
pub fn development_report(set: &MetricSet) -> Result<String, ReportError> {
    let motor = set.require("motor")?;
    let (gross_from, gross_to) = trajectory(require_child(motor, "gross")?);
    let (fine_from, fine_to) = trajectory(require_child(motor, "fine")?);

    let context = DevelopmentContext {
        gross_from,
        gross_to,
        fine_from,
        fine_to,
        cognitive: fraction_lines(set.require("cognitive")?),
        therapy: fraction_lines(set.require("therapy_intensity")?),
        social: fraction_lines(set.require("social_skills")?),
    };

    let rendered = render_template("development_report", DEVELOPMENT_TEMPLATE, &context)?;
    info!("development report rendered");
    Ok(rendered)
}

#[derive(Serialize)]
struct GroupLine {
    label: String,
    band: String,
    percent: String,
}

#[derive(Serialize)]
struct PriorityLine {
    group: String,
    aspect: String,
}

#[derive(Serialize)]
struct ManagementContext {
    groups: Vec<GroupLine>,
    priorities: Vec<PriorityLine>,
    plan: Vec<LineItem>,
}

/// Render the holistic management report for a derived profile summary.
pub fn management_report(summary: &ProfileSummary) -> Result<String, ReportError> {
    let context = ManagementContext {
        groups: summary
            .groups
            .iter()
            .map(|g| GroupLine {
                label: g.label.clone(),
                band: g.band.label().to_string(),
                percent: percent(g.mean),
            })
            .collect(),
        priorities: summary
            .groups
            .iter()
            .filter_map(|g| {
                g.priority_aspect.as_ref().map(|aspect| PriorityLine {
                    group: g.label.clone(),
                    aspect: aspect.clone(),
                })
            })
            .collect(),
        plan: summary
            .intervention_plan
            .iter()
            .map(|entry| LineItem {
                label: entry.label.clone(),
                percent: percent(entry.intensity),
            })
            .collect(),
    };

    let rendered = render_template("management_report", MANAGEMENT_TEMPLATE, &context)?;
    info!(groups = context.groups.len(), "management report rendered");
    Ok(rendered)
}

fn require_child<'a>(metric: &'a Metric, id: &str) -> Result<&'a Metric, ReportError> {
    metric
        .children()
        .iter()
        .find(|m| m.id == id)
        .ok_or_else(|| {
            ReportError::IncompleteInput(CoreError::MissingMetric(format!(
                "{}.{}",
                metric.id, id
            )))
        })
}

/// First and last values of an age-banded trajectory, as whole percents.
fn trajectory(metric: &Metric) -> (String, String) {
    let children = metric.children();
    let first = children.first().map(Metric::mean).unwrap_or(0.0);
    let last = children.last().map(Metric::mean).unwrap_or(0.0);
    (
        format!("{:.0}", first * 100.0),
        format!("{:.0}", last * 100.0),
    )
}

fn fraction_lines(metric: &Metric) -> Vec<LineItem> {
    metric
        .children()
        .iter()
        .map(|m| LineItem {
            label: m.label.clone(),
            percent: percent(m.mean()),
        })
        .collect()
}

fn percent(fraction: f64) -> String {
    format!("{:.2}", fraction * 100.0)
}
