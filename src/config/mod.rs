//! Configuration for nutritional screening.
//!
//! Plausible physical ranges used to reject malformed intake, the unit MUAC
//! is entered in, and where the session register is persisted.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::util::safe_read_to_string;
use crate::error::{AnisanError, Result};
use crate::models::types::MuacUnit;

/// Default location of the persisted record store
pub const DEFAULT_STORE_PATH: &str = "enfants.json";

/// Closed interval of accepted values for a measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlausibleRange {
    /// Smallest accepted value
    pub min: f64,
    /// Largest accepted value
    pub max: f64,
    /// Whether `min` itself is accepted
    #[serde(default = "default_true")]
    pub min_inclusive: bool,
}

const fn default_true() -> bool {
    true
}

impl PlausibleRange {
    /// Range accepting `min <= value <= max`
    #[must_use]
    pub const fn inclusive(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            min_inclusive: true,
        }
    }

    /// Range accepting `min < value <= max`
    #[must_use]
    pub const fn left_open(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            min_inclusive: false,
        }
    }

    /// Check whether a finite value lies in the range
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        let above_min = if self.min_inclusive {
            value >= self.min
        } else {
            value > self.min
        };
        above_min && value <= self.max
    }

    fn validate(&self, name: &str) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min >= self.max {
            return Err(AnisanError::ConfigError(format!(
                "{name} range must satisfy min < max, got [{}, {}]",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

impl fmt::Display for PlausibleRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = if self.min_inclusive { '[' } else { '(' };
        write!(f, "{open}{}, {}]", self.min, self.max)
    }
}

/// Configuration for measurement intake and record storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreeningConfig {
    /// Accepted MUAC values, always in centimeters
    pub muac_range_cm: PlausibleRange,
    /// Accepted weights in kilograms
    pub weight_range_kg: PlausibleRange,
    /// Accepted heights in centimeters
    pub height_range_cm: PlausibleRange,
    /// Oldest accepted age in months (inclusive)
    pub max_age_months: u32,
    /// Unit MUAC is entered in at intake
    pub muac_unit: MuacUnit,
    /// File the session register is persisted to
    pub store_path: PathBuf,
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            muac_range_cm: PlausibleRange::inclusive(5.0, 25.0),
            weight_range_kg: PlausibleRange::left_open(0.0, 30.0),
            height_range_cm: PlausibleRange::left_open(30.0, 150.0),
            max_age_months: 59,
            muac_unit: MuacUnit::Centimeters,
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
        }
    }
}

impl ScreeningConfig {
    /// Load a configuration from a JSON file; missing keys take their defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = safe_read_to_string(path, "loading screening configuration")?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        log::debug!("Loaded screening configuration from {}", path.display());
        Ok(config)
    }

    /// Apply `ANISAN_STORE_PATH`, `ANISAN_MAX_AGE_MONTHS` and `ANISAN_MUAC_UNIT`
    /// overrides from the environment
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Ok(path) = std::env::var("ANISAN_STORE_PATH") {
            self.store_path = PathBuf::from(path);
        }
        if let Ok(age) = std::env::var("ANISAN_MAX_AGE_MONTHS") {
            self.max_age_months = age.trim().parse::<u32>().map_err(|e| {
                AnisanError::ConfigError(format!("ANISAN_MAX_AGE_MONTHS='{age}': {e}"))
            })?;
        }
        if let Ok(unit) = std::env::var("ANISAN_MUAC_UNIT") {
            self.muac_unit = unit.parse()?;
        }
        self.validate()?;
        Ok(self)
    }

    /// Reject empty or inverted ranges
    pub fn validate(&self) -> Result<()> {
        self.muac_range_cm.validate("MUAC")?;
        self.weight_range_kg.validate("weight")?;
        self.height_range_cm.validate("height")?;
        if self.muac_range_cm.min <= 0.0 {
            return Err(AnisanError::ConfigError(
                "MUAC range must exclude non-positive values".to_string(),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for ScreeningConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Screening Configuration:")?;
        writeln!(f, "  MUAC Range (cm): {}", self.muac_range_cm)?;
        writeln!(f, "  Weight Range (kg): {}", self.weight_range_kg)?;
        writeln!(f, "  Height Range (cm): {}", self.height_range_cm)?;
        writeln!(f, "  Maximum Age (months): {}", self.max_age_months)?;
        writeln!(f, "  MUAC Input Unit: {}", self.muac_unit)?;
        writeln!(f, "  Store Path: {}", self.store_path.display())?;
        Ok(())
    }
}
