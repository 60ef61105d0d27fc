//! Geographic coordinate model

use serde::{Deserialize, Serialize};

use crate::{Result, TourGuideError};

/// A point on the globe in decimal degrees
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Coordinates {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl Coordinates {
    /// Create coordinates without range checks
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Create coordinates, rejecting non-finite or out of range values
    pub fn validated(latitude: f64, longitude: f64) -> Result<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(TourGuideError::validation(format!(
                "latitude {latitude} must be between -90 and 90"
            )));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(TourGuideError::validation(format!(
                "longitude {longitude} must be between -180 and 180"
            )));
        }
        Ok(Self::new(latitude, longitude))
    }

    /// Great-circle distance to another point in kilometers
    #[must_use]
    pub fn distance_km(&self, other: &Coordinates) -> f64 {
        crate::planner::haversine(self.latitude, self.longitude, other.latitude, other.longitude)
    }

    /// Format as `lat,lon`, the shape used by direction links
    #[must_use]
    pub fn to_pair_string(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }

    /// Format coordinates for display
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }

    /// Unweighted centroid of a set of points, `None` when empty
    pub fn centroid<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Coordinates>,
    {
        let (count, lat_sum, lon_sum) = points
            .into_iter()
            .fold((0usize, 0.0, 0.0), |(n, lat, lon), p| {
                (n + 1, lat + p.latitude, lon + p.longitude)
            });
        if count == 0 {
            return None;
        }
        let n = count as f64;
        Some(Self::new(lat_sum / n, lon_sum / n))
    }
}

/// Parse the optional stay location typed by the user as `lat,lon`.
///
/// Blank input means no stay location.
pub fn parse_stay_location(input: &str) -> Result<Option<Coordinates>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let parts: Vec<&str> = trimmed.split(',').map(str::trim).collect();
    if parts.len() != 2 {
        return Err(TourGuideError::validation(format!(
            "stay location '{input}' must be two numbers separated by a comma, e.g. 22.5726,88.3639"
        )));
    }

    let parse = |s: &str| {
        s.parse::<f64>().map_err(|_| {
            TourGuideError::validation(format!("stay location '{input}' contains non-numeric value '{s}'"))
        })
    };
    let latitude = parse(parts[0])?;
    let longitude = parse(parts[1])?;

    Coordinates::validated(latitude, longitude).map(Some)
}
