use trisight_reference::development::development;
use trisight_reference::gene_panel::parse_gene_panel;
use trisight_reference::genetics::genetics_with_panel;
use trisight_reference::holistic::holistic;
use trisight_reference::summary::summarize;
use trisight_report::templates::{development_report, genetic_report, management_report};

#[test]
fn genetic_report_reflects_a_user_panel() {
    let panel = parse_gene_panel("DYRK1A, SOD1", "0.8, 0.5").expect("panel parses");
    let rendered = genetic_report(&genetics_with_panel(&panel)).expect("report renders");

    assert!(rendered.contains("**DYRK1A**: expression level 80.00%"));
    assert!(rendered.contains("**SOD1**: expression level 50.00%"));
    assert!(!rendered.contains("RCAN1"));
}

#[test]
fn development_report_tracks_motor_trajectories() {
    let rendered = development_report(development()).expect("report renders");

    assert!(rendered.contains("**Gross motor**: progressive development from 30% to 80%"));
    assert!(rendered.contains("**Fine motor**: gradual gains from 20% to 75%"));
    assert!(rendered.contains("**Attention**: 60.00% capacity"));
    assert!(rendered.contains("**Speech Therapy**: intensity 70.00%"));
    assert!(rendered.contains("**Emotional Regulation**: 40.00% ability"));
}

#[test]
fn management_report_lists_bands_focus_and_plan() {
    let rendered = management_report(&summarize(holistic())).expect("report renders");

    assert!(rendered.contains("**Medical Health**: Fair (score 58.75%)"));
    assert!(rendered.contains("**Intervention and Support**: Good"));
    assert!(rendered.contains("**Medical Health**: prioritize Hearing"));
    assert!(rendered.contains("**Speech Therapy**: intensity 70.00%, continue and optimize"));
}
