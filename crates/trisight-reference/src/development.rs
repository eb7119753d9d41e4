use std::sync::LazyLock;

use trisight_core::models::metric::{Metric, MetricSet};

/// Reference developmental metrics. Motor development nests twice: gross
/// and fine motor, each tracked across four age bands.
pub fn development() -> &'static MetricSet {
    static SET: LazyLock<MetricSet> = LazyLock::new(|| {
        MetricSet::new(vec![
            Metric::group(
                "motor",
                "Motor Development",
                vec![
                    Metric::group(
                        "gross",
                        "Gross Motor",
                        vec![
                            Metric::scalar("m0_6", "0-6 months", 0.3),
                            Metric::scalar("m6_12", "6-12 months", 0.5),
                            Metric::scalar("y1_2", "1-2 years", 0.7),
                            Metric::scalar("y2_3", "2-3 years", 0.8),
                        ],
                    ),
                    Metric::group(
                        "fine",
                        "Fine Motor",
                        vec![
                            Metric::scalar("m0_6", "0-6 months", 0.2),
                            Metric::scalar("m6_12", "6-12 months", 0.4),
                            Metric::scalar("y1_2", "1-2 years", 0.6),
                            Metric::scalar("y2_3", "2-3 years", 0.75),
                        ],
                    ),
                ],
            ),
            Metric::group(
                "cognitive",
                "Cognitive Development",
                vec![
                    Metric::scalar("attention", "Attention", 0.6),
                    Metric::scalar("memory", "Memory", 0.5),
                    Metric::scalar("problem_solving", "Problem Solving", 0.4),
                    Metric::scalar("language", "Language", 0.45),
                ],
            ),
            Metric::group(
                "therapy_intensity",
                "Therapy Intensity",
                vec![
                    Metric::scalar("speech_therapy", "Speech Therapy", 0.7),
                    Metric::scalar("occupational_therapy", "Occupational Therapy", 0.65),
                    Metric::scalar("physical_therapy", "Physical Therapy", 0.6),
                    Metric::scalar("behavioral_therapy", "Behavioral Therapy", 0.55),
                ],
            ),
            Metric::group(
                "social_skills",
                "Social Skills",
                vec![
                    Metric::scalar("communication", "Communication", 0.5),
                    Metric::scalar("social_interaction", "Social Interaction", 0.55),
                    Metric::scalar("independence", "Independence", 0.45),
                    Metric::scalar("emotional_regulation", "Emotional Regulation", 0.4),
                ],
            ),
        ])
    });
    &SET
}
