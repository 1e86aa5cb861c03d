//! Age bands used to break down screening results

use std::fmt;

use serde::Serialize;

/// Age band in months
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum AgeBand {
    /// 0 to 5 months
    Infant,
    /// 6 to 11 months
    OlderInfant,
    /// 12 to 23 months
    Toddler,
    /// 24 to 59 months
    Preschool,
    /// 60 months and above
    School,
}

impl AgeBand {
    /// Band containing an age in months
    #[must_use]
    pub const fn from_months(age_months: u32) -> Self {
        match age_months {
            0..=5 => Self::Infant,
            6..=11 => Self::OlderInfant,
            12..=23 => Self::Toddler,
            24..=59 => Self::Preschool,
            _ => Self::School,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Infant => "0-5 months",
            Self::OlderInfant => "6-11 months",
            Self::Toddler => "12-23 months",
            Self::Preschool => "24-59 months",
            Self::School => "60+ months",
        }
    }
}

impl fmt::Display for AgeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
