//! POI catalog: points of interest grouped by state and city
//!
//! The catalog is a JSON document of the form
//! `{"State": {"City": [poi, ...]}}`. It is validated once when loaded so
//! that the planner can rely on well-formed records.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::models::{Coordinates, Poi};
use crate::{Result, TourGuideError};

/// City name to its ordered POIs
pub type CityPois = BTreeMap<String, Vec<Poi>>;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct PoiCatalog {
    states: BTreeMap<String, CityPois>,
}

impl PoiCatalog {
    /// Parse and validate a catalog from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        let catalog: PoiCatalog = serde_json::from_str(json)
            .map_err(|e| TourGuideError::catalog(format!("failed to parse catalog: {e}")))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load and validate a catalog file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading POI catalog from: {:?}", path);
        let content = fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&content)?;
        info!(
            "Loaded {} POIs across {} states",
            catalog.poi_count(),
            catalog.states.len()
        );
        Ok(catalog)
    }

    /// Build a catalog from in-memory data, validating it
    pub fn from_states(states: BTreeMap<String, CityPois>) -> Result<Self> {
        let catalog = Self { states };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn states(&self) -> impl Iterator<Item = &str> {
        self.states.keys().map(String::as_str)
    }

    pub fn cities(&self, state: &str) -> Result<impl Iterator<Item = &str>> {
        let cities = self
            .states
            .get(state)
            .ok_or_else(|| TourGuideError::validation(format!("unknown state '{state}'")))?;
        Ok(cities.keys().map(String::as_str))
    }

    pub fn pois(&self, state: &str, city: &str) -> Result<&[Poi]> {
        let cities = self
            .states
            .get(state)
            .ok_or_else(|| TourGuideError::validation(format!("unknown state '{state}'")))?;
        cities
            .get(city)
            .map(Vec::as_slice)
            .ok_or_else(|| {
                TourGuideError::validation(format!("unknown city '{city}' in state '{state}'"))
            })
    }

    #[must_use]
    pub fn poi_count(&self) -> usize {
        self.states
            .values()
            .flat_map(BTreeMap::values)
            .map(Vec::len)
            .sum()
    }

    fn validate(&self) -> Result<()> {
        for (state, cities) in &self.states {
            for (city, pois) in cities {
                debug!("Validating {} POIs for {}/{}", pois.len(), state, city);
                validate_city(state, city, pois)?;
            }
        }
        Ok(())
    }
}

fn validate_city(state: &str, city: &str, pois: &[Poi]) -> Result<()> {
    let mut seen = HashSet::new();
    for poi in pois {
        let location = format!("{state}/{city}");
        if poi.name.trim().is_empty() {
            return Err(TourGuideError::catalog(format!(
                "{location}: POI with empty name"
            )));
        }
        if !seen.insert(poi.name.as_str()) {
            return Err(TourGuideError::catalog(format!(
                "{location}: duplicate POI name '{}'",
                poi.name
            )));
        }
        if let Err(e) = Coordinates::validated(poi.lat, poi.lon) {
            return Err(TourGuideError::catalog(format!(
                "{location}: POI '{}' has invalid coordinates: {e}",
                poi.name
            )));
        }
        if !poi.duration.is_finite() || poi.duration <= 0.0 {
            return Err(TourGuideError::catalog(format!(
                "{location}: POI '{}' must have a positive duration, got {}",
                poi.name, poi.duration
            )));
        }
    }
    Ok(())
}
