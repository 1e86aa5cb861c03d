//! Tests for aggregate reporting over classified records

use anisan::algorithm::reporting::{
    AgeBand, Grouping, ScreeningReport, by_age_band, by_region, by_sex, most_severe_records,
    overall, rank_most_at_risk,
};
use anisan::{MeasurementInput, NutritionalCategory, Sex};

use crate::utils::{input, record, record_from, region};

fn sample_records() -> Vec<anisan::ChildRecord> {
    vec![
        record("Amina", 14.0, false, Some(region("Niger", "Maradi"))),
        record("Issa", 11.2, false, Some(region("Niger", "Maradi"))),
        record("Fatou", 12.0, false, Some(region("Sénégal", "Dakar"))),
        record("Moussa", 13.5, true, Some(region("Sénégal", "Dakar"))),
        record("Awa", 12.7, false, Some(region("Niger", "Zinder"))),
        record("Ali", 13.2, false, None),
    ]
}

#[test]
fn test_overall_counts_and_shares() {
    let records = sample_records();
    let summary = overall(&records);

    assert_eq!(summary.total, 6);
    assert_eq!(summary.count(NutritionalCategory::Normal), 2);
    assert_eq!(summary.count(NutritionalCategory::SevereCritical), 1);
    assert_eq!(summary.count(NutritionalCategory::SevereAcute), 1);
    assert_eq!(summary.most_severe, Some(NutritionalCategory::SevereCritical));
    assert!((summary.share(NutritionalCategory::Normal) - 100.0 / 3.0).abs() < 1e-9);
    assert!((summary.severe_share() - 100.0 / 3.0).abs() < 1e-9);

    let total_share: f64 = NutritionalCategory::ALL
        .iter()
        .map(|c| summary.share(*c))
        .sum();
    assert!((total_share - 100.0).abs() < 1e-9);
}

#[test]
fn test_empty_group_has_zero_shares() {
    let summary = overall(&[]);
    assert_eq!(summary.total, 0);
    assert_eq!(summary.share(NutritionalCategory::Normal), 0.0);
    assert_eq!(summary.most_severe, None);
}

#[test]
fn test_by_region_groups() {
    let records = sample_records();
    let groups = by_region(&records);

    let names: Vec<_> = groups.iter().map(|g| g.group.as_str()).collect();
    assert_eq!(
        names,
        vec!["Dakar, Sénégal", "Maradi, Niger", "Unassigned", "Zinder, Niger"]
    );

    let maradi = groups.iter().find(|g| g.group == "Maradi, Niger").unwrap();
    assert_eq!(maradi.total, 2);
    assert_eq!(maradi.most_severe, Some(NutritionalCategory::SevereAcute));
    assert_eq!(maradi.share(NutritionalCategory::SevereAcute), 50.0);
}

#[test]
fn test_most_at_risk_uses_severity_rank() {
    let records = sample_records();
    let groups = by_region(&records);
    let ranked: Vec<_> = rank_most_at_risk(&groups)
        .iter()
        .map(|g| g.group.clone())
        .collect();

    // Alphabetical or label-based ordering would put these differently.
    assert_eq!(
        ranked,
        vec!["Dakar, Sénégal", "Maradi, Niger", "Zinder, Niger", "Unassigned"]
    );
}

#[test]
fn test_most_at_risk_breaks_ties_by_count() {
    let records = vec![
        record("A", 11.2, false, Some(region("Niger", "Agadez"))),
        record("B", 11.3, false, Some(region("Niger", "Tahoua"))),
        record("C", 11.4, false, Some(region("Niger", "Tahoua"))),
    ];
    let groups = by_region(&records);
    let ranked = rank_most_at_risk(&groups);
    assert_eq!(ranked[0].group, "Tahoua, Niger");
    assert_eq!(ranked[1].group, "Agadez, Niger");
}

#[test]
fn test_most_severe_records_keep_insertion_order_on_ties() {
    let records = sample_records();
    let top: Vec<_> = most_severe_records(&records, 3)
        .iter()
        .map(|r| r.name().to_string())
        .collect();
    assert_eq!(top, vec!["Moussa", "Issa", "Fatou"]);

    let normals: Vec<_> = most_severe_records(&records, records.len())
        .into_iter()
        .filter(|r| r.category() == NutritionalCategory::Normal)
        .map(|r| r.name().to_string())
        .collect();
    assert_eq!(normals, vec!["Amina", "Ali"]);
}

#[test]
fn test_by_sex_and_age_band() {
    let records = vec![
        record_from("A", MeasurementInput { age_months: 3, sex: Sex::Male, ..input(12.0, false) }, None),
        record_from("B", MeasurementInput { age_months: 8, ..input(14.0, false) }, None),
        record_from("C", MeasurementInput { age_months: 40, ..input(10.8, false) }, None),
        record_from("D", MeasurementInput { age_months: 4, ..input(13.1, false) }, None),
    ];

    let sexes = by_sex(&records);
    assert_eq!(sexes.len(), 2);
    assert_eq!(sexes[0].group, "Male");
    assert_eq!(sexes[0].total, 1);
    assert_eq!(sexes[1].group, "Female");
    assert_eq!(sexes[1].total, 3);

    let bands = by_age_band(&records);
    let labels: Vec<_> = bands.iter().map(|g| g.group.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            AgeBand::Infant.label(),
            AgeBand::OlderInfant.label(),
            AgeBand::Preschool.label()
        ]
    );
    assert_eq!(bands[0].total, 2);
}

#[test]
fn test_report_render() {
    let records = sample_records();
    let report = ScreeningReport::build(&records, Grouping::Region);
    let text = report.render();

    assert!(text.contains("Total Children: 6"));
    assert!(text.contains("Severe Acute Malnutrition (critical): 1 (16.7%)"));
    assert!(text.contains("By Region:"));
    assert!(text.contains("1. Dakar, Sénégal - Severe Acute Malnutrition (critical) (1 of 2)"));

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["overall"]["total"], 6);
    assert_eq!(json["groups"].as_array().unwrap().len(), 4);
}

#[test]
fn test_report_render_empty() {
    let report = ScreeningReport::build(&[], Grouping::Sex);
    assert!(report.render().contains("No records."));
}
