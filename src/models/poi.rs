//! Point of interest records and travel styles

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Coordinates;
use crate::TourGuideError;

fn default_duration() -> f64 {
    1.0
}

/// A visitable place as supplied by the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Poi {
    /// Unique within a city
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    /// Hours spent on site
    #[serde(default = "default_duration")]
    pub duration: f64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Poi {
    /// Create a POI with the default one hour visit and no tags
    #[must_use]
    pub fn new(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            lon,
            duration: default_duration(),
            tags: Vec::new(),
            description: String::new(),
            image: None,
        }
    }

    #[must_use]
    pub fn with_duration(mut self, hours: f64) -> Self {
        self.duration = hours;
        self
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.lat, self.lon)
    }

    /// Whether the POI is tagged with the given style
    #[must_use]
    pub fn matches_style(&self, style: TravelStyle) -> bool {
        self.tags.iter().any(|tag| tag == style.as_str())
    }
}

impl AsRef<Poi> for Poi {
    fn as_ref(&self) -> &Poi {
        self
    }
}

/// Travel styles a trip can be biased towards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelStyle {
    Cultural,
    Historical,
    Family,
    Adventure,
    Romantic,
    Spiritual,
    Relaxation,
}

impl TravelStyle {
    pub const ALL: [TravelStyle; 7] = [
        TravelStyle::Cultural,
        TravelStyle::Historical,
        TravelStyle::Family,
        TravelStyle::Adventure,
        TravelStyle::Romantic,
        TravelStyle::Spiritual,
        TravelStyle::Relaxation,
    ];

    /// Tag name used in the catalog
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TravelStyle::Cultural => "cultural",
            TravelStyle::Historical => "historical",
            TravelStyle::Family => "family",
            TravelStyle::Adventure => "adventure",
            TravelStyle::Romantic => "romantic",
            TravelStyle::Spiritual => "spiritual",
            TravelStyle::Relaxation => "relaxation",
        }
    }
}

impl fmt::Display for TravelStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TravelStyle {
    type Err = TourGuideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|style| style.as_str() == needle)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|s| s.as_str()).collect();
                TourGuideError::validation(format!(
                    "unknown travel style '{s}'. Must be one of: {}",
                    names.join(", ")
                ))
            })
    }
}
