//! Small value types shared by the measurement and record models

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AnisanError, Result};

/// Sex of the child. Recorded for reporting, never used in classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sex {
    /// Male
    #[serde(rename = "M", alias = "male", alias = "Male")]
    Male,
    /// Female
    #[serde(rename = "F", alias = "female", alias = "Female")]
    Female,
}

impl Sex {
    /// Short code used in exports
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
        }
    }
}

impl FromStr for Sex {
    type Err = AnisanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" | "masculin" | "garçon" | "garcon" | "boy" => Ok(Self::Male),
            "f" | "female" | "féminin" | "feminin" | "fille" | "girl" => Ok(Self::Female),
            other => Err(AnisanError::invalid_measurement(
                "sex",
                other,
                "expected M or F",
            )),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "Male"),
            Self::Female => write!(f, "Female"),
        }
    }
}

/// Unit a MUAC value is entered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MuacUnit {
    /// Centimeters (canonical)
    #[default]
    #[serde(rename = "cm")]
    Centimeters,
    /// Millimeters, converted to centimeters at intake
    #[serde(rename = "mm")]
    Millimeters,
}

impl MuacUnit {
    /// Convert a value in this unit to centimeters
    #[must_use]
    pub fn to_centimeters(self, value: f64) -> f64 {
        match self {
            Self::Centimeters => value,
            Self::Millimeters => value / 10.0,
        }
    }
}

impl FromStr for MuacUnit {
    type Err = AnisanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "cm" | "centimeters" => Ok(Self::Centimeters),
            "mm" | "millimeters" => Ok(Self::Millimeters),
            other => Err(AnisanError::ConfigError(format!(
                "Unknown MUAC unit '{other}', expected cm or mm"
            ))),
        }
    }
}

impl fmt::Display for MuacUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Centimeters => write!(f, "cm"),
            Self::Millimeters => write!(f, "mm"),
        }
    }
}
