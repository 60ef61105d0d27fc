//! Route helpers for map display and driving-directions links

use serde::Serialize;

use crate::models::{Coordinates, ScheduledPoi};

const GOOGLE_MAPS_DIRECTIONS: &str = "https://www.google.com/maps/dir/?api=1";

/// A numbered stop on a day's route
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStop {
    /// 1-based visiting order
    pub order: usize,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// `"{order}. {name}"`
    pub label: String,
}

#[must_use]
pub fn route_stops(day: &[ScheduledPoi]) -> Vec<RouteStop> {
    day.iter()
        .enumerate()
        .map(|(i, entry)| {
            let order = i + 1;
            RouteStop {
                order,
                name: entry.poi.name.clone(),
                latitude: entry.poi.lat,
                longitude: entry.poi.lon,
                label: format!("{order}. {}", entry.poi.name),
            }
        })
        .collect()
}

/// Mean position of the day's stops, used to center a map view
#[must_use]
pub fn route_center(day: &[ScheduledPoi]) -> Option<Coordinates> {
    Coordinates::centroid(day.iter().map(|entry| entry.poi.coordinates()))
}

/// Driving directions through the day's stops in order.
///
/// `None` for days with fewer than two stops.
#[must_use]
pub fn google_maps_url(day: &[ScheduledPoi]) -> Option<String> {
    let (first, rest) = day.split_first()?;
    let (last, middle) = rest.split_last()?;

    let waypoints = middle
        .iter()
        .map(|entry| entry.poi.coordinates().to_pair_string())
        .collect::<Vec<_>>()
        .join("|");

    Some(format!(
        "{GOOGLE_MAPS_DIRECTIONS}&origin={}&destination={}&waypoints={}&travelmode=driving",
        first.poi.coordinates().to_pair_string(),
        last.poi.coordinates().to_pair_string(),
        urlencoding::encode(&waypoints)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Poi;
    use crate::planner::recompute_day_times;

    fn day(points: &[(&str, f64, f64)]) -> Vec<ScheduledPoi> {
        let pois: Vec<Poi> = points
            .iter()
            .map(|(name, lat, lon)| Poi::new(*name, *lat, *lon))
            .collect();
        recompute_day_times(&pois, "09:00").unwrap()
    }

    #[test]
    fn test_route_stops_are_numbered() {
        let stops = route_stops(&day(&[("Fort", 1.0, 2.0), ("Lake", 1.5, 2.5)]));
        assert_eq!(stops[0].order, 1);
        assert_eq!(stops[0].label, "1. Fort");
        assert_eq!(stops[1].label, "2. Lake");
        assert_eq!(stops[1].latitude, 1.5);
    }

    #[test]
    fn test_route_center() {
        let center = route_center(&day(&[("A", 1.0, 2.0), ("B", 3.0, 4.0)])).unwrap();
        assert_eq!(center, Coordinates::new(2.0, 3.0));
        assert!(route_center(&[]).is_none());
    }

    #[test]
    fn test_url_requires_two_stops() {
        assert!(google_maps_url(&[]).is_none());
        assert!(google_maps_url(&day(&[("A", 1.0, 2.0)])).is_none());
    }

    #[test]
    fn test_url_with_waypoints() {
        let url = google_maps_url(&day(&[
            ("A", 22.5, 88.3),
            ("B", 22.6, 88.4),
            ("C", 22.7, 88.5),
            ("D", 22.8, 88.6),
        ]))
        .unwrap();
        assert_eq!(
            url,
            "https://www.google.com/maps/dir/?api=1&origin=22.5,88.3&destination=22.8,88.6\
             &waypoints=22.6%2C88.4%7C22.7%2C88.5&travelmode=driving"
        );
    }

    #[test]
    fn test_url_two_stops_has_empty_waypoints() {
        let url = google_maps_url(&day(&[("A", 1.0, 2.0), ("B", 3.0, 4.0)])).unwrap();
        assert!(url.contains("origin=1,2&destination=3,4&waypoints=&travelmode=driving"));
    }
}
