use trisight_core::models::document::Document;
use trisight_core::models::metric::MetricValue;
use trisight_lexicon::get_profile;
use trisight_lexicon::matcher::TriggerSpec;
use trisight_lexicon::scorer::{CategorySpec, ScoreMode, ScoringConfig};

fn count_config(id: &str, phrases: &[&str]) -> ScoringConfig {
    ScoringConfig::new(vec![CategorySpec {
        id: id.to_string(),
        label: id.to_string(),
        mode: ScoreMode::Count,
        triggers: phrases.iter().map(|p| TriggerSpec::literal(p)).collect(),
    }])
    .expect("test config is valid")
}

#[test]
fn empty_document_scores_zero_everywhere() {
    let profile = get_profile("clinical").expect("clinical profile registered");
    let vector = profile.config().score(&Document::new(""));

    assert_eq!(vector.len(), 7);
    assert!(vector.entries.iter().all(|e| e.value == 0));
}

#[test]
fn entry_order_matches_configuration_order() {
    let config = ScoringConfig::new(vec![
        CategorySpec {
            id: "zeta".to_string(),
            label: "Zeta".to_string(),
            mode: ScoreMode::Presence,
            triggers: vec![TriggerSpec::literal("zeta")],
        },
        CategorySpec {
            id: "alpha".to_string(),
            label: "Alpha".to_string(),
            mode: ScoreMode::Presence,
            triggers: vec![TriggerSpec::literal("alpha")],
        },
        CategorySpec {
            id: "mid".to_string(),
            label: "Mid".to_string(),
            mode: ScoreMode::Presence,
            triggers: vec![TriggerSpec::literal("mid")],
        },
    ])
    .expect("test config is valid");

    let vector = config.score(&Document::new("alpha and zeta"));
    let ids: Vec<&str> = vector.entries.iter().map(|e| e.category.as_str()).collect();
    assert_eq!(ids, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn literal_matching_is_case_insensitive() {
    let config = count_config("conditions", &["heart defect"]);
    let upper = config.score(&Document::new("Diagnosed with a Heart Defect."));
    let lower = config.score(&Document::new("diagnosed with a heart defect."));

    assert_eq!(upper.get("conditions"), Some(1));
    assert_eq!(upper, lower);
}

#[test]
fn pattern_matching_is_case_insensitive() {
    let profile = get_profile("clinical").expect("clinical profile registered");
    let upper = profile.config().score(&Document::new("Trisomy 21"));
    let lower = profile.config().score(&Document::new("trisomy 21"));

    assert_eq!(upper.get("chromosome_abnormality"), Some(1));
    assert_eq!(upper, lower);
}

#[test]
fn pattern_alternation_spans_whitespace_runs() {
    let profile = get_profile("clinical").expect("clinical profile registered");
    let vector = profile
        .config()
        .score(&Document::new("karyotype shows trisomy   21"));

    assert_eq!(vector.get("chromosome_abnormality"), Some(1));
}

#[test]
fn presence_caps_at_one() {
    let profile = get_profile("clinical").expect("clinical profile registered");
    let vector = profile
        .config()
        .score(&Document::new("mosaic pattern with a translocation variant"));

    assert_eq!(vector.get("genetic_variation"), Some(1));
}

#[test]
fn count_is_distinct_triggers_not_occurrences() {
    let profile = get_profile("clinical").expect("clinical profile registered");
    let vector = profile
        .config()
        .score(&Document::new("therapy, then more therapy, then therapy again"));

    assert_eq!(vector.get("intervention_strategies"), Some(1));
}

#[test]
fn overlapping_triggers_each_count() {
    let config = count_config(
        "interventions",
        &["therapy", "support", "educational support", "occupational therapy"],
    );
    let vector = config.score(&Document::new("occupational therapy and support"));

    // "therapy" matches inside "occupational therapy"; both count, plus
    // "support". "educational support" is absent.
    assert_eq!(vector.get("interventions"), Some(3));
}

#[test]
fn clinical_scenario_scores_expected_categories() {
    let profile = get_profile("clinical").expect("clinical profile registered");
    let vector = profile.config().score(&Document::new(
        "Patient has trisomy 21 and a heart defect, receiving speech therapy.",
    ));

    assert_eq!(vector.get("chromosome_abnormality"), Some(1));
    assert_eq!(vector.get("genetic_variation"), Some(0));
    assert_eq!(vector.get("associated_conditions"), Some(1));
    assert_eq!(vector.get("intervention_strategies"), Some(1));
    assert_eq!(vector.get("quality_of_life"), Some(0));
}

#[test]
fn unrecognized_text_scores_zero_everywhere() {
    let profile = get_profile("clinical").expect("clinical profile registered");
    let vector = profile
        .config()
        .score(&Document::new("The weather was pleasant on the drive home."));

    assert!(vector.entries.iter().all(|e| e.value == 0));
}

#[test]
fn repeated_scoring_is_deterministic() {
    let profile = get_profile("clinical").expect("clinical profile registered");
    let doc = Document::new("trisomy 21 with hearing loss and early intervention");

    assert_eq!(profile.config().score(&doc), profile.config().score(&doc));
}

#[test]
fn appending_a_new_trigger_never_decreases_a_count() {
    let config = count_config("markers", &["speech delay", "developmental delay"]);

    let base = config.score(&Document::new("notable speech delay"));
    let extended = config.score(&Document::new(
        "notable speech delay and a developmental delay",
    ));

    assert!(extended.get("markers") >= base.get("markers"));
    assert_eq!(extended.get("markers"), Some(2));
}

#[test]
fn score_vector_flattens_into_metric_set() {
    let config = count_config("conditions", &["thyroid", "hearing loss"]);
    let vector = config.score(&Document::new("thyroid screening and hearing loss"));

    let set = vector.into_metric_set();
    assert_eq!(set.metrics.len(), 1);
    assert_eq!(set.metrics[0].id, "conditions");
    assert_eq!(set.metrics[0].value, MetricValue::Scalar(2.0));
}
