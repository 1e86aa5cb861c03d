//! Tests for the MUAC/edema classification rule
//!
//! Boundary handling, edema precedence, invalid input and the documented
//! end-to-end cases.

use anisan::algorithm::nutrition::{ClassificationResult, Classifier, NutritionalCategory, classify};
use anisan::{AnisanError, Measurement, PlausibleRange, ScreeningConfig};

use crate::utils::input;

fn rank(muac_cm: f64, edema: bool) -> u8 {
    classify(muac_cm, edema).unwrap().severity_rank
}

#[test]
fn test_end_to_end_cases() {
    let critical = classify(10.5, false).unwrap();
    assert_eq!(critical.category, NutritionalCategory::SevereCritical);
    assert_eq!(critical.category.label(), "Severe Acute Malnutrition (critical)");
    assert_eq!(critical.severity_rank, 4);

    let moderate = classify(12.0, false).unwrap();
    assert_eq!(moderate.category.label(), "Moderate Acute Malnutrition");
    assert_eq!(moderate.severity_rank, 2);

    let edema_override = classify(14.0, true).unwrap();
    assert_eq!(edema_override.category, NutritionalCategory::SevereCritical);
    assert_eq!(edema_override.severity_rank, 4);
}

#[test]
fn test_tier_boundaries_are_inclusive_lower_exclusive_upper() {
    assert_eq!(rank(10.999, false), 4);
    assert_eq!(rank(11.0, false), 3);
    assert_eq!(rank(11.499, false), 3);
    assert_eq!(rank(11.5, false), 2);
    assert_eq!(rank(12.499, false), 2);
    assert_eq!(rank(12.5, false), 1);
    assert_eq!(rank(12.999, false), 1);
    assert_eq!(rank(13.0, false), 0);
}

#[test]
fn test_normal_above_thirteen() {
    for muac in [13.0, 13.5, 15.0, 20.0, 25.0] {
        let result = classify(muac, false).unwrap();
        assert_eq!(result.category, NutritionalCategory::Normal);
        assert_eq!(result.severity_rank, 0);
    }
}

#[test]
fn test_edema_forces_critical_across_range() {
    for muac in [5.0, 10.0, 11.2, 12.0, 12.7, 13.0, 20.0, 25.0] {
        assert_eq!(rank(muac, true), 4, "edema at MUAC {muac}");
    }
}

#[test]
fn test_invalid_muac_rejected() {
    for muac in [-1.0, 0.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 4.99, 25.01] {
        match classify(muac, false) {
            Err(AnisanError::InvalidMeasurement { field, .. }) => assert_eq!(field, "muac_cm"),
            other => panic!("expected InvalidMeasurement for {muac}, got {other:?}"),
        }
    }
}

#[test]
fn test_invalid_muac_rejected_even_with_edema() {
    assert!(matches!(
        classify(f64::NAN, true),
        Err(AnisanError::InvalidMeasurement { .. })
    ));
}

#[test]
fn test_configured_range_is_honoured() {
    let config = ScreeningConfig {
        muac_range_cm: PlausibleRange::inclusive(8.0, 20.0),
        ..Default::default()
    };
    let classifier = Classifier::new(&config);
    assert!(classifier.classify(7.5, false).is_err());
    assert!(classifier.classify(21.0, false).is_err());
    assert_eq!(classifier.classify(8.0, false).unwrap().severity_rank, 4);
}

#[test]
fn test_repeated_calls_are_equal() {
    let first = classify(11.7, false).unwrap();
    let second = classify(11.7, false).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_result_json_shape() {
    let result = classify(12.0, false).unwrap();
    let json: serde_json::Value = serde_json::to_value(&result).unwrap();
    assert_eq!(json["category"], "Moderate Acute Malnutrition");
    assert_eq!(json["severityRank"], 2);
    assert!(json["advisory"].as_str().unwrap().contains("weekly"));

    let parsed: ClassificationResult = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, result);
}

#[test]
fn test_rank_matches_category_order() {
    let results: Vec<_> = [10.0, 11.2, 12.0, 12.7, 14.0]
        .iter()
        .map(|m| classify(*m, false).unwrap())
        .collect();
    for pair in results.windows(2) {
        assert!(pair[0].severity_rank > pair[1].severity_rank);
        assert!(pair[0].category > pair[1].category);
    }
}

#[test]
fn test_reclassify_reports_drift_against_stored_category() {
    let classifier = Classifier::default();
    let measurement = Measurement::from_input(input(11.2, false), &ScreeningConfig::default()).unwrap();

    let drifted = classifier
        .reclassify(&measurement, NutritionalCategory::Normal)
        .unwrap();
    assert!(drifted.drifted());
    assert_eq!(drifted.stored, NutritionalCategory::Normal);
    assert_eq!(drifted.current.category, NutritionalCategory::SevereAcute);

    let unchanged = classifier
        .reclassify(&measurement, NutritionalCategory::SevereAcute)
        .unwrap();
    assert!(!unchanged.drifted());
}
