use trisight_lexicon::error::LexiconError;
use trisight_lexicon::matcher::TriggerSpec;
use trisight_lexicon::scorer::{CategorySpec, ScoreMode, ScoringConfig};

fn spec(id: &str, triggers: Vec<TriggerSpec>) -> CategorySpec {
    CategorySpec {
        id: id.to_string(),
        label: id.to_string(),
        mode: ScoreMode::Presence,
        triggers,
    }
}

#[test]
fn empty_configuration_is_rejected() {
    let err = ScoringConfig::new(vec![]).unwrap_err();
    assert!(matches!(err, LexiconError::EmptyConfiguration));
}

#[test]
fn duplicate_category_is_rejected() {
    let err = ScoringConfig::new(vec![
        spec("genetic", vec![TriggerSpec::literal("mosaic")]),
        spec("genetic", vec![TriggerSpec::literal("translocation")]),
    ])
    .unwrap_err();

    assert!(matches!(err, LexiconError::DuplicateCategory(ref id) if id == "genetic"));
}

#[test]
fn category_without_triggers_is_rejected() {
    let err = ScoringConfig::new(vec![spec("empty", vec![])]).unwrap_err();
    assert!(matches!(err, LexiconError::EmptyCategory(ref id) if id == "empty"));
}

#[test]
fn blank_literal_trigger_is_rejected() {
    let err = ScoringConfig::new(vec![spec("blank", vec![TriggerSpec::literal("   ")])])
        .unwrap_err();
    assert!(matches!(err, LexiconError::EmptyTrigger(ref id) if id == "blank"));
}

#[test]
fn invalid_pattern_is_rejected() {
    let err = ScoringConfig::new(vec![spec("broken", vec![TriggerSpec::pattern("(")])])
        .unwrap_err();

    match err {
        LexiconError::InvalidPattern { category, .. } => assert_eq!(category, "broken"),
        other => panic!("expected InvalidPattern, got {other:?}"),
    }
}

#[test]
fn error_messages_name_the_category() {
    let err = ScoringConfig::new(vec![spec("physical", vec![])]).unwrap_err();
    assert!(err.to_string().contains("physical"));
}

#[test]
fn valid_config_reports_its_vocabulary() {
    let specs = vec![
        CategorySpec {
            id: "karyotype".to_string(),
            label: "Karyotype".to_string(),
            mode: ScoreMode::Presence,
            triggers: vec![TriggerSpec::pattern(r"trisomy\s+21")],
        },
        CategorySpec {
            id: "conditions".to_string(),
            label: "Conditions".to_string(),
            mode: ScoreMode::Count,
            triggers: vec![
                TriggerSpec::literal("thyroid"),
                TriggerSpec::literal("hearing loss"),
            ],
        },
    ];

    let config = ScoringConfig::new(specs.clone()).expect("config is valid");
    let reported = config.to_specs();

    assert_eq!(reported.len(), 2);
    assert_eq!(reported[0].id, "karyotype");
    assert_eq!(reported[0].mode, ScoreMode::Presence);
    assert_eq!(reported[1].triggers, specs[1].triggers);
}

#[test]
fn compiled_categories_expose_their_shape() {
    let config = ScoringConfig::new(vec![
        spec("karyotype", vec![TriggerSpec::pattern(r"trisomy\s+21")]),
        CategorySpec {
            id: "conditions".to_string(),
            label: "Conditions".to_string(),
            mode: ScoreMode::Count,
            triggers: vec![
                TriggerSpec::literal("thyroid"),
                TriggerSpec::literal("hearing loss"),
            ],
        },
    ])
    .expect("config is valid");

    let categories = config.categories();
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].id(), "karyotype");
    assert_eq!(categories[0].mode(), ScoreMode::Presence);
    assert_eq!(categories[1].label(), "Conditions");
    assert_eq!(categories[1].trigger_count(), 2);
}

#[test]
fn category_specs_serialize_with_snake_case_modes() {
    let json = serde_json::to_string(&CategorySpec {
        id: "karyotype".to_string(),
        label: "Karyotype".to_string(),
        mode: ScoreMode::Presence,
        triggers: vec![TriggerSpec::pattern("mosaic|translocation")],
    })
    .expect("spec serializes");

    assert!(json.contains("\"presence\""));
    assert!(json.contains("\"pattern\""));
}
