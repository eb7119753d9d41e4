use std::sync::LazyLock;

use trisight_core::models::metric::{Metric, MetricSet};

/// Reference holistic-management metrics: the four dimensions the
/// management dashboard rolls up into bands and an intervention plan.
pub fn holistic() -> &'static MetricSet {
    static SET: LazyLock<MetricSet> = LazyLock::new(|| {
        MetricSet::new(vec![
            Metric::group(
                "medical_health",
                "Medical Health",
                vec![
                    Metric::scalar("cardiac", "Cardiac", 0.7),
                    Metric::scalar("thyroid", "Thyroid", 0.6),
                    Metric::scalar("hearing", "Hearing", 0.5),
                    Metric::scalar("vision", "Vision", 0.55),
                ],
            ),
            Metric::group(
                "development",
                "Development",
                vec![
                    Metric::scalar("gross_motor", "Gross Motor", 0.65),
                    Metric::scalar("fine_motor", "Fine Motor", 0.6),
                    Metric::scalar("cognitive", "Cognitive", 0.55),
                    Metric::scalar("language", "Language", 0.5),
                ],
            ),
            Metric::group(
                "social_emotional",
                "Social and Emotional",
                vec![
                    Metric::scalar("social_interaction", "Social Interaction", 0.6),
                    Metric::scalar("emotional_regulation", "Emotional Regulation", 0.55),
                    Metric::scalar("independence", "Independence", 0.5),
                    Metric::scalar("communication", "Communication", 0.58),
                ],
            ),
            Metric::group(
                "intervention",
                "Intervention and Support",
                vec![
                    Metric::scalar("speech_therapy", "Speech Therapy", 0.7),
                    Metric::scalar("occupational_therapy", "Occupational Therapy", 0.65),
                    Metric::scalar("behavioral_therapy", "Behavioral Therapy", 0.6),
                    Metric::scalar("special_education", "Special Education", 0.58),
                ],
            ),
        ])
    });
    &SET
}
