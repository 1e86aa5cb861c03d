//! Country and region catalog
//!
//! Records are tagged with the country and region where the child was
//! screened. The catalog constrains intake to known pairs and carries
//! optional coordinates for each region.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::util::safe_read_to_string;
use crate::error::{AnisanError, Result};

/// A validated country/region pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RegionRef {
    pub country: String,
    pub region: String,
}

impl fmt::Display for RegionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.region, self.country)
    }
}

/// A region entry in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Region name
    #[serde(rename = "region")]
    pub name: String,
    /// Latitude of the region's reference point
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Longitude of the region's reference point
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl Region {
    fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            latitude: None,
            longitude: None,
        }
    }
}

const NIGER_REGIONS: [&str; 8] = [
    "Agadez", "Diffa", "Dosso", "Maradi", "Niamey", "Tahoua", "Tillabéri", "Zinder",
];

const SENEGAL_REGIONS: [&str; 14] = [
    "Dakar",
    "Diourbel",
    "Fatick",
    "Kaffrine",
    "Kaolack",
    "Kédougou",
    "Kolda",
    "Louga",
    "Matam",
    "Saint-Louis",
    "Sédhiou",
    "Tambacounda",
    "Thiès",
    "Ziguinchor",
];

/// Countries mapped to their regions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionCatalog {
    countries: BTreeMap<String, Vec<Region>>,
}

impl Default for RegionCatalog {
    fn default() -> Self {
        let mut countries = BTreeMap::new();
        countries.insert(
            "Niger".to_string(),
            NIGER_REGIONS.iter().map(|r| Region::named(r)).collect(),
        );
        countries.insert(
            "Sénégal".to_string(),
            SENEGAL_REGIONS.iter().map(|r| Region::named(r)).collect(),
        );
        Self { countries }
    }
}

impl RegionCatalog {
    /// Load a catalog from JSON shaped as
    /// `{ "<country>": [{ "region": .., "latitude": .., "longitude": .. }] }`
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = safe_read_to_string(path, "loading region catalog")?;
        let catalog: Self = serde_json::from_str(&content)?;
        log::info!(
            "Loaded region catalog with {} countries from {}",
            catalog.countries.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Country names in sorted order
    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.countries.keys().map(String::as_str)
    }

    /// Regions of a country, in catalog order
    #[must_use]
    pub fn regions(&self, country: &str) -> Option<&[Region]> {
        self.countries.get(country).map(Vec::as_slice)
    }

    /// Validate a country/region pair
    pub fn resolve(&self, country: &str, region: &str) -> Result<RegionRef> {
        let country = country.trim();
        let region = region.trim();
        self.find(country, region)
            .map(|r| RegionRef {
                country: country.to_string(),
                region: r.name.clone(),
            })
            .ok_or_else(|| AnisanError::UnknownRegion {
                country: country.to_string(),
                region: region.to_string(),
            })
    }

    /// Coordinates of a region, when the catalog has them
    #[must_use]
    pub fn coordinates(&self, region: &RegionRef) -> Option<(f64, f64)> {
        let entry = self.find(&region.country, &region.region)?;
        entry.latitude.zip(entry.longitude)
    }

    fn find(&self, country: &str, region: &str) -> Option<&Region> {
        self.countries
            .get(country)?
            .iter()
            .find(|r| r.name == region)
    }
}
