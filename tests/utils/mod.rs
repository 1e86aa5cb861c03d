use anisan::{
    ChildRecord, Classifier, Measurement, MeasurementInput, RegionCatalog, RegionRef,
    ScreeningConfig, Sex,
};
use chrono::{NaiveDate, NaiveDateTime};

/// Fixed measurement date used across tests
#[must_use]
pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, 10).unwrap()
}

/// Fixed recording timestamp used across tests
#[must_use]
pub fn test_timestamp() -> NaiveDateTime {
    test_date().and_hms_opt(9, 30, 0).unwrap()
}

/// Plausible intake for a 24-month-old with the given MUAC (cm) and edema flag
#[must_use]
pub fn input(muac_cm: f64, edema_present: bool) -> MeasurementInput {
    MeasurementInput {
        age_months: 24,
        weight_kg: 10.0,
        height_cm: 84.0,
        muac: muac_cm,
        muac_unit: None,
        edema_present,
        sex: Sex::Female,
        measured_on: test_date(),
    }
}

/// Resolve a region from the default catalog
#[must_use]
pub fn region(country: &str, region: &str) -> RegionRef {
    RegionCatalog::default().resolve(country, region).unwrap()
}

/// Build a classified record with the default configuration
#[must_use]
pub fn record(name: &str, muac_cm: f64, edema_present: bool, region: Option<RegionRef>) -> ChildRecord {
    record_from(name, input(muac_cm, edema_present), region)
}

/// Build a classified record from explicit intake
#[must_use]
pub fn record_from(name: &str, input: MeasurementInput, region: Option<RegionRef>) -> ChildRecord {
    let config = ScreeningConfig::default();
    let measurement = Measurement::from_input(input, &config).unwrap();
    ChildRecord::classify_at(
        name,
        region,
        measurement,
        &Classifier::new(&config),
        test_timestamp(),
    )
    .unwrap()
}
