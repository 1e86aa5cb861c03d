//! Nutritional-status categories
//!
//! The five severity tiers a screened child can fall into. Variants are
//! declared from least to most severe so the derived ordering matches the
//! severity rank.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Nutritional-status category, ordered by severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NutritionalCategory {
    /// MUAC at or above 13.0 cm, no edema
    #[serde(rename = "Normal")]
    Normal = 0,
    /// MUAC in [12.5, 13.0)
    #[serde(rename = "Nutritional stress")]
    NutritionalStress = 1,
    /// Moderate acute malnutrition, MUAC in [11.5, 12.5)
    #[serde(rename = "Moderate Acute Malnutrition")]
    ModerateAcute = 2,
    /// Severe acute malnutrition, MUAC in [11.0, 11.5)
    #[serde(rename = "Severe Acute Malnutrition")]
    SevereAcute = 3,
    /// Critical severe acute malnutrition: edema, or MUAC below 11.0
    #[serde(rename = "Severe Acute Malnutrition (critical)")]
    SevereCritical = 4,
}

impl NutritionalCategory {
    /// Every category, least severe first
    pub const ALL: [Self; 5] = [
        Self::Normal,
        Self::NutritionalStress,
        Self::ModerateAcute,
        Self::SevereAcute,
        Self::SevereCritical,
    ];

    /// Severity rank; higher is more severe
    #[must_use]
    pub const fn severity_rank(self) -> u8 {
        self as u8
    }

    /// Look up a category by its severity rank
    #[must_use]
    pub const fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            0 => Some(Self::Normal),
            1 => Some(Self::NutritionalStress),
            2 => Some(Self::ModerateAcute),
            3 => Some(Self::SevereAcute),
            4 => Some(Self::SevereCritical),
            _ => None,
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::NutritionalStress => "Nutritional stress",
            Self::ModerateAcute => "Moderate Acute Malnutrition",
            Self::SevereAcute => "Severe Acute Malnutrition",
            Self::SevereCritical => "Severe Acute Malnutrition (critical)",
        }
    }

    /// Short code for tables and exports
    #[must_use]
    pub const fn short_code(self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::NutritionalStress => "STRESS",
            Self::ModerateAcute => "MAM",
            Self::SevereAcute => "MAS",
            Self::SevereCritical => "MAS-C",
        }
    }

    /// Whether the category is one of the two severe acute malnutrition tiers
    #[must_use]
    pub const fn is_severe(self) -> bool {
        matches!(self, Self::SevereAcute | Self::SevereCritical)
    }

    /// Guidance for caregivers and health workers, one action per line
    #[must_use]
    pub const fn advisory_lines(self) -> &'static [&'static str] {
        match self {
            Self::SevereCritical => &[
                "Refer immediately for hospitalization (inpatient stabilization center).",
                "Start emergency therapeutic feeding under medical supervision.",
                "Treat infections and monitor closely until stabilized.",
            ],
            Self::SevereAcute => &[
                "Refer urgently to an outpatient therapeutic treatment center.",
                "Provide ready-to-use therapeutic food (RUTF).",
                "Follow up medically every week and treat infections.",
            ],
            Self::ModerateAcute => &[
                "Provide supplementary feeding with fortified flours, groundnut paste, fish, eggs and oil.",
                "Enroll in community management of acute malnutrition.",
                "Follow up weekly on MUAC and weight.",
            ],
            Self::NutritionalStress => &[
                "Diversify the diet with energy-, protein-, iron- and vitamin A-rich foods.",
                "Give micronutrient supplementation.",
                "Monitor growth monthly.",
            ],
            Self::Normal => &[
                "Maintain a balanced diet: exclusive breastfeeding to 6 months, then diversification.",
                "Continue routine monthly growth monitoring (weight, height, MUAC).",
            ],
        }
    }

    /// Advisory lines joined into a single paragraph
    #[must_use]
    pub fn advisory(self) -> String {
        self.advisory_lines().join(" ")
    }
}

impl fmt::Display for NutritionalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
