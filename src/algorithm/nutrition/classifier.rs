//! MUAC/edema classification rule
//!
//! Rules are evaluated in order and the first match wins. Edema is checked
//! before any MUAC threshold and always yields the critical tier. Each MUAC
//! tier covers `[previous bound, upper bound)`.

use serde::{Deserialize, Serialize};

use super::category::NutritionalCategory;
use crate::config::{PlausibleRange, ScreeningConfig};
use crate::error::{AnisanError, Result};
use crate::models::measurement::{Measurement, check_muac_cm};

/// MUAC tiers as `(exclusive upper bound in cm, category)`, most severe first
pub const MUAC_RULES: [(f64, NutritionalCategory); 5] = [
    (11.0, NutritionalCategory::SevereCritical),
    (11.5, NutritionalCategory::SevereAcute),
    (12.5, NutritionalCategory::ModerateAcute),
    (13.0, NutritionalCategory::NutritionalStress),
    (f64::INFINITY, NutritionalCategory::Normal),
];

/// Outcome of classifying one measurement
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    /// Nutritional-status category
    pub category: NutritionalCategory,
    /// Severity rank of `category`; higher is more severe
    pub severity_rank: u8,
    /// Guidance associated with the category
    pub advisory: String,
}

impl ClassificationResult {
    /// Build the result for a category
    #[must_use]
    pub fn for_category(category: NutritionalCategory) -> Self {
        Self {
            category,
            severity_rank: category.severity_rank(),
            advisory: category.advisory(),
        }
    }
}

/// Result of re-running classification on an already classified value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reclassification {
    /// Category the value was stored with
    pub stored: NutritionalCategory,
    /// Result under the current rule table
    pub current: ClassificationResult,
}

impl Reclassification {
    /// Whether the stored category disagrees with the current rules
    #[must_use]
    pub fn drifted(&self) -> bool {
        self.stored != self.current.category
    }
}

/// Classifier validating MUAC against a plausible range before applying the rules
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classifier {
    muac_range_cm: PlausibleRange,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(&ScreeningConfig::default())
    }
}

impl Classifier {
    /// Create a classifier using the configured MUAC range
    #[must_use]
    pub fn new(config: &ScreeningConfig) -> Self {
        Self {
            muac_range_cm: config.muac_range_cm,
        }
    }

    /// Classify a MUAC value (cm) and edema flag.
    ///
    /// Fails with `InvalidMeasurement` before any rule is evaluated when the
    /// MUAC is non-finite, non-positive or outside the plausible range.
    pub fn classify(&self, muac_cm: f64, edema_present: bool) -> Result<ClassificationResult> {
        let muac_cm = check_muac_cm(muac_cm, &self.muac_range_cm)?;
        let category = category_for(muac_cm, edema_present)?;
        log::debug!(
            "Classified MUAC {muac_cm} cm (edema: {edema_present}) as {}",
            category.short_code()
        );
        Ok(ClassificationResult::for_category(category))
    }

    /// Classify a validated measurement. Only MUAC and edema are consulted.
    pub fn classify_measurement(&self, measurement: &Measurement) -> Result<ClassificationResult> {
        self.classify(measurement.muac_cm(), measurement.edema_present())
    }

    /// Re-run classification for a measurement previously stored with `stored`
    pub fn reclassify(
        &self,
        measurement: &Measurement,
        stored: NutritionalCategory,
    ) -> Result<Reclassification> {
        let current = self.classify_measurement(measurement)?;
        Ok(Reclassification { stored, current })
    }
}

/// Classify with the default plausible MUAC range of 5 to 25 cm
pub fn classify(muac_cm: f64, edema_present: bool) -> Result<ClassificationResult> {
    Classifier::default().classify(muac_cm, edema_present)
}

fn category_for(muac_cm: f64, edema_present: bool) -> Result<NutritionalCategory> {
    if edema_present {
        return Ok(NutritionalCategory::SevereCritical);
    }

    MUAC_RULES
        .iter()
        .find(|(upper, _)| muac_cm < *upper)
        .map(|(_, category)| *category)
        .ok_or(AnisanError::UnknownCategory {
            muac_cm,
            edema_present,
        })
}
