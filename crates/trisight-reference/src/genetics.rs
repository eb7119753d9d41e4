use std::sync::LazyLock;

use trisight_core::models::gene::GenePanel;
use trisight_core::models::metric::{Metric, MetricSet, MetricValue};

/// Reference genetics metrics: karyotype distribution (percent of cases),
/// chromosome-21 marker gene expression, associated-condition risk, and the
/// overall expression profile (fractions).
pub fn genetics() -> &'static MetricSet {
    static SET: LazyLock<MetricSet> = LazyLock::new(|| {
        MetricSet::new(vec![
            Metric::group(
                "karyotype_distribution",
                "Karyotype Distribution",
                vec![
                    Metric::scalar("full_trisomy_21", "Full Trisomy 21", 95.0),
                    Metric::scalar("mosaic", "Mosaic", 3.0),
                    Metric::scalar("translocation", "Translocation", 2.0),
                ],
            ),
            Metric::group(
                "marker_expression",
                "Marker Gene Expression",
                vec![
                    Metric::scalar("dyrk1a", "DYRK1A", 0.75),
                    Metric::scalar("sod1", "SOD1", 0.65),
                    Metric::scalar("rcan1", "RCAN1", 0.55),
                    Metric::scalar("app", "APP", 0.45),
                ],
            ),
            Metric::group(
                "condition_risk",
                "Associated Condition Risk",
                vec![
                    Metric::scalar("cardiac_disease", "Cardiac Disease", 0.45),
                    Metric::scalar("thyroid_disorder", "Thyroid Disorder", 0.35),
                    Metric::scalar("leukemia", "Leukemia", 0.15),
                    Metric::scalar("early_dementia", "Early Dementia", 0.25),
                ],
            ),
            Metric::group(
                "expression_profile",
                "Expression Profile",
                vec![
                    Metric::scalar("overexpressed", "Overexpressed", 0.7),
                    Metric::scalar("underexpressed", "Underexpressed", 0.3),
                    Metric::scalar("neutral", "Neutral", 0.0),
                ],
            ),
        ])
    });
    &SET
}

/// The genetics set with the marker-expression group replaced by a
/// user-entered panel. The remaining groups stay at reference values.
pub fn genetics_with_panel(panel: &GenePanel) -> MetricSet {
    let mut set = genetics().clone();
    if let Some(marker) = set.metrics.iter_mut().find(|m| m.id == "marker_expression") {
        marker.value = MetricValue::Group(
            panel
                .entries
                .iter()
                .map(|e| Metric::scalar(&e.gene.to_lowercase(), &e.gene, e.level))
                .collect(),
        );
    }
    set
}
