use std::sync::LazyLock;

use crate::Profile;
use crate::matcher::TriggerSpec;
use crate::scorer::{CategorySpec, ScoreMode, ScoringConfig};

/// The comprehensive clinical profile: seven observable aspects of a Down
/// syndrome medical narrative, scored from free text.
pub struct Clinical;

impl Profile for Clinical {
    fn id(&self) -> &str {
        "clinical"
    }

    fn name(&self) -> &str {
        "Clinical Profile"
    }

    fn config(&self) -> &ScoringConfig {
        static CONFIG: LazyLock<ScoringConfig> = LazyLock::new(|| {
            ScoringConfig::new(vec![
                CategorySpec {
                    id: "chromosome_abnormality".to_string(),
                    label: "Chromosome Abnormality".to_string(),
                    mode: ScoreMode::Presence,
                    triggers: vec![TriggerSpec::pattern(r"trisomy\s+21|chromosome\s+21")],
                },
                CategorySpec {
                    id: "genetic_variation".to_string(),
                    label: "Genetic Variation".to_string(),
                    mode: ScoreMode::Presence,
                    triggers: vec![TriggerSpec::pattern("mosaic|translocation")],
                },
                count_category(
                    "physical_features",
                    "Physical Features",
                    &[
                        "epicanthal fold",
                        "flat facial profile",
                        "small ears",
                        "low muscle tone",
                        "short stature",
                        "single palmar crease",
                    ],
                ),
                count_category(
                    "developmental_markers",
                    "Developmental Markers",
                    &[
                        "intellectual disability",
                        "developmental delay",
                        "cognitive impairment",
                        "speech delay",
                    ],
                ),
                count_category(
                    "associated_conditions",
                    "Associated Conditions",
                    &[
                        "heart defect",
                        "congenital heart disease",
                        "thyroid",
                        "hearing loss",
                        "vision problems",
                        "respiratory issues",
                    ],
                ),
                count_category(
                    "intervention_strategies",
                    "Intervention Strategies",
                    &[
                        "early intervention",
                        "therapy",
                        "support",
                        "educational support",
                        "occupational therapy",
                    ],
                ),
                count_category(
                    "quality_of_life",
                    "Quality of Life Indicators",
                    &[
                        "social skills",
                        "independence",
                        "inclusion",
                        "life expectancy",
                        "quality of life",
                    ],
                ),
            ])
            .expect("built-in clinical profile must validate")
        });
        &CONFIG
    }
}

fn count_category(id: &str, label: &str, phrases: &[&str]) -> CategorySpec {
    CategorySpec {
        id: id.to_string(),
        label: label.to_string(),
        mode: ScoreMode::Count,
        triggers: phrases.iter().map(|p| TriggerSpec::literal(p)).collect(),
    }
}
