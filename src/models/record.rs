//! Classified child record
//!
//! A `ChildRecord` pairs a validated measurement with the classification it
//! produced. The pair is built in one step so a record can never carry a
//! category that was not derived from its own measurement.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::algorithm::nutrition::{
    ClassificationResult, Classifier, NutritionalCategory, Reclassification,
};
use crate::config::ScreeningConfig;
use crate::error::{AnisanError, Result};
use crate::geo::RegionRef;
use crate::models::measurement::{Measurement, MeasurementInput};
use crate::models::types::{MuacUnit, Sex};

/// A screened child with its classification
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChildRecord {
    name: String,
    region: Option<RegionRef>,
    measurement: Measurement,
    classification: ClassificationResult,
    recorded_at: NaiveDateTime,
}

impl ChildRecord {
    /// Classify a measurement and wrap it into a record stamped with the current time
    pub fn classify(
        name: &str,
        region: Option<RegionRef>,
        measurement: Measurement,
        classifier: &Classifier,
    ) -> Result<Self> {
        let recorded_at = chrono::Local::now().naive_local();
        Self::classify_at(name, region, measurement, classifier, recorded_at)
    }

    /// Same as [`ChildRecord::classify`] with an explicit timestamp
    pub fn classify_at(
        name: &str,
        region: Option<RegionRef>,
        measurement: Measurement,
        classifier: &Classifier,
        recorded_at: NaiveDateTime,
    ) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AnisanError::invalid_measurement(
                "name",
                "",
                "child name must not be empty",
            ));
        }

        let classification = classifier.classify_measurement(&measurement)?;

        Ok(Self {
            name: name.to_string(),
            region,
            measurement,
            classification,
            recorded_at,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn region(&self) -> Option<&RegionRef> {
        self.region.as_ref()
    }

    #[must_use]
    pub const fn measurement(&self) -> &Measurement {
        &self.measurement
    }

    #[must_use]
    pub const fn classification(&self) -> &ClassificationResult {
        &self.classification
    }

    /// Shorthand for the classification category
    #[must_use]
    pub const fn category(&self) -> NutritionalCategory {
        self.classification.category
    }

    #[must_use]
    pub const fn recorded_at(&self) -> NaiveDateTime {
        self.recorded_at
    }
}

/// Serialized form of a `ChildRecord`, as read back from storage before
/// re-validation
#[derive(Debug, Clone, Deserialize)]
pub struct StoredRecord {
    pub name: String,
    #[serde(default)]
    pub region: Option<RegionRef>,
    pub measurement: StoredMeasurement,
    pub classification: ClassificationResult,
    pub recorded_at: NaiveDateTime,
}

impl StoredRecord {
    /// Re-validate and re-classify a stored record under the current
    /// configuration and rule table. The returned record always carries the
    /// current classification; the `Reclassification` tells whether it differs
    /// from what was stored.
    pub fn restore(
        self,
        config: &ScreeningConfig,
        classifier: &Classifier,
    ) -> Result<(ChildRecord, Reclassification)> {
        let measurement = Measurement::from_input(self.measurement.into(), config)?;
        let reclassification = classifier.reclassify(&measurement, self.classification.category)?;
        let record = ChildRecord::classify_at(
            &self.name,
            self.region,
            measurement,
            classifier,
            self.recorded_at,
        )?;
        Ok((record, reclassification))
    }
}

/// Serialized form of a `Measurement` (MUAC always in centimeters)
#[derive(Debug, Clone, Deserialize)]
pub struct StoredMeasurement {
    pub age_months: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub muac_cm: f64,
    pub edema_present: bool,
    pub sex: Sex,
    pub measured_on: NaiveDate,
}

impl From<StoredMeasurement> for MeasurementInput {
    fn from(stored: StoredMeasurement) -> Self {
        Self {
            age_months: stored.age_months,
            weight_kg: stored.weight_kg,
            height_cm: stored.height_cm,
            muac: stored.muac_cm,
            muac_unit: Some(MuacUnit::Centimeters),
            edema_present: stored.edema_present,
            sex: stored.sex,
            measured_on: stored.measured_on,
        }
    }
}
