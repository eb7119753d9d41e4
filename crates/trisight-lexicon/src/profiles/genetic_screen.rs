use std::sync::LazyLock;

use crate::Profile;
use crate::matcher::TriggerSpec;
use crate::scorer::{CategorySpec, ScoreMode, ScoringConfig};

/// Genetic screening vocabulary: karyotype mentions, the four
/// chromosome-21 marker genes, and elevated-risk conditions.
///
/// Gene symbols use word-bounded patterns; APP in particular is too short
/// to match as a plain substring.
pub struct GeneticScreen;

impl Profile for GeneticScreen {
    fn id(&self) -> &str {
        "genetic_screen"
    }

    fn name(&self) -> &str {
        "Genetic Screening"
    }

    fn config(&self) -> &ScoringConfig {
        static CONFIG: LazyLock<ScoringConfig> = LazyLock::new(|| {
            ScoringConfig::new(vec![
                CategorySpec {
                    id: "karyotype".to_string(),
                    label: "Karyotype Finding".to_string(),
                    mode: ScoreMode::Presence,
                    triggers: vec![TriggerSpec::pattern(
                        r"trisomy\s+21|mosaic|translocation",
                    )],
                },
                CategorySpec {
                    id: "marker_genes".to_string(),
                    label: "Marker Genes".to_string(),
                    mode: ScoreMode::Count,
                    triggers: vec![
                        TriggerSpec::pattern(r"\bdyrk1a\b"),
                        TriggerSpec::pattern(r"\bsod1\b"),
                        TriggerSpec::pattern(r"\brcan1\b"),
                        TriggerSpec::pattern(r"\bapp\b"),
                    ],
                },
                CategorySpec {
                    id: "risk_conditions".to_string(),
                    label: "Risk Conditions".to_string(),
                    mode: ScoreMode::Count,
                    triggers: vec![
                        TriggerSpec::literal("heart disease"),
                        TriggerSpec::literal("thyroid"),
                        TriggerSpec::literal("leukemia"),
                        TriggerSpec::literal("dementia"),
                    ],
                },
            ])
            .expect("built-in genetic screening profile must validate")
        });
        &CONFIG
    }
}
