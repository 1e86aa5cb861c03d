//! Anthropometric measurement model
//!
//! A `Measurement` is only ever built from validated intake and is immutable
//! afterwards. Raw intake arrives as a `MeasurementInput`, typically
//! deserialized from a form, the CLI or a JSON request.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::{PlausibleRange, ScreeningConfig};
use crate::error::{AnisanError, Result};
use crate::models::types::{MuacUnit, Sex};

/// Raw, unvalidated measurement as submitted by an intake surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementInput {
    /// Age in completed months
    pub age_months: u32,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Height (or length) in centimeters
    pub height_cm: f64,
    /// Mid-upper-arm circumference in `muac_unit`
    pub muac: f64,
    /// Unit of `muac`; the configured intake unit when absent
    #[serde(default)]
    pub muac_unit: Option<MuacUnit>,
    /// Bilateral pitting edema observed
    #[serde(default)]
    pub edema_present: bool,
    /// Sex of the child
    pub sex: Sex,
    /// Date the measurement was taken
    pub measured_on: NaiveDate,
}

/// Validated anthropometric measurement of a child
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    age_months: u32,
    weight_kg: f64,
    height_cm: f64,
    muac_cm: f64,
    edema_present: bool,
    sex: Sex,
    measured_on: NaiveDate,
}

/// Check a MUAC value in centimeters against a plausible range.
///
/// Non-finite, non-positive and out-of-range values are rejected; nothing is
/// clamped.
pub fn check_muac_cm(muac_cm: f64, range: &PlausibleRange) -> Result<f64> {
    check_positive_in_range("muac_cm", muac_cm, range)
}

fn check_positive_in_range(field: &'static str, value: f64, range: &PlausibleRange) -> Result<f64> {
    if !value.is_finite() {
        return Err(AnisanError::invalid_measurement(
            field,
            value,
            "must be a finite number",
        ));
    }
    if value <= 0.0 {
        return Err(AnisanError::invalid_measurement(field, value, "must be positive"));
    }
    if !range.contains(value) {
        return Err(AnisanError::invalid_measurement(
            field,
            value,
            format!("outside plausible range {range}"),
        ));
    }
    Ok(value)
}

impl Measurement {
    /// Validate raw intake against the configured plausible ranges
    pub fn from_input(input: MeasurementInput, config: &ScreeningConfig) -> Result<Self> {
        if input.age_months > config.max_age_months {
            return Err(AnisanError::invalid_measurement(
                "age_months",
                input.age_months,
                format!("must be between 0 and {} months", config.max_age_months),
            ));
        }

        let weight_kg = check_positive_in_range("weight_kg", input.weight_kg, &config.weight_range_kg)?;
        let height_cm = check_positive_in_range("height_cm", input.height_cm, &config.height_range_cm)?;

        let unit = input.muac_unit.unwrap_or(config.muac_unit);
        let muac_cm = check_muac_cm(unit.to_centimeters(input.muac), &config.muac_range_cm)?;

        Ok(Self {
            age_months: input.age_months,
            weight_kg,
            height_cm,
            muac_cm,
            edema_present: input.edema_present,
            sex: input.sex,
            measured_on: input.measured_on,
        })
    }

    /// Age in completed months
    #[must_use]
    pub const fn age_months(&self) -> u32 {
        self.age_months
    }

    /// Weight in kilograms
    #[must_use]
    pub const fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Height in centimeters
    #[must_use]
    pub const fn height_cm(&self) -> f64 {
        self.height_cm
    }

    /// MUAC in centimeters
    #[must_use]
    pub const fn muac_cm(&self) -> f64 {
        self.muac_cm
    }

    #[must_use]
    pub const fn edema_present(&self) -> bool {
        self.edema_present
    }

    #[must_use]
    pub const fn sex(&self) -> Sex {
        self.sex
    }

    #[must_use]
    pub const fn measured_on(&self) -> NaiveDate {
        self.measured_on
    }

    /// Rebuild the intake this measurement was validated from, in centimeters
    #[must_use]
    pub fn to_input(&self) -> MeasurementInput {
        MeasurementInput {
            age_months: self.age_months,
            weight_kg: self.weight_kg,
            height_cm: self.height_cm,
            muac: self.muac_cm,
            muac_unit: Some(MuacUnit::Centimeters),
            edema_present: self.edema_present,
            sex: self.sex,
            measured_on: self.measured_on,
        }
    }
}
