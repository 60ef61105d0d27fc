//! Great-circle distance between coordinates

use haversine::{Location as HaversineLocation, Units, distance};

/// Haversine distance in kilometers on a sphere of radius 6371 km.
///
/// Inputs are in degrees.
#[must_use]
pub fn haversine(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let from = HaversineLocation {
        latitude: lat1,
        longitude: lon1,
    };
    let to = HaversineLocation {
        latitude: lat2,
        longitude: lon2,
    };
    distance(from, to, Units::Kilometers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const EPS: f64 = 1e-9;

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(22.5726, 88.3639)]
    #[case(-33.8688, 151.2093)]
    fn test_identical_points_are_zero(#[case] lat: f64, #[case] lon: f64) {
        assert!(haversine(lat, lon, lat, lon).abs() < EPS);
    }

    #[rstest]
    #[case(0.0, 0.0, 0.0, 1.0)]
    #[case(48.8566, 2.3522, 51.5074, -0.1278)]
    #[case(22.5726, 88.3639, 28.6139, 77.2090)]
    fn test_symmetric(#[case] lat1: f64, #[case] lon1: f64, #[case] lat2: f64, #[case] lon2: f64) {
        let ab = haversine(lat1, lon1, lat2, lon2);
        let ba = haversine(lat2, lon2, lat1, lon1);
        assert!((ab - ba).abs() < EPS);
    }

    #[test]
    fn test_one_degree_on_equator() {
        // 2 * pi * 6371 / 360
        let expected = 6371.0 * std::f64::consts::PI / 180.0;
        assert!((haversine(0.0, 0.0, 0.0, 1.0) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_paris_london() {
        let d = haversine(48.8566, 2.3522, 51.5074, -0.1278);
        assert!((d - 343.5).abs() < 1.0, "got {d}");
    }
}
