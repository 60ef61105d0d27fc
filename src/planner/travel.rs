//! Travel time model: straight-line distance at a fixed average speed

use super::distance::haversine;
use crate::models::Coordinates;

pub const DEFAULT_AVG_SPEED_KMPH: f64 = 30.0;
/// Minimum transfer time between two stops, even adjacent ones
pub const DEFAULT_MIN_TRAVEL_HOURS: f64 = 0.25;

/// Anything with a position the travel model can measure from
pub trait Positioned {
    fn position(&self) -> Coordinates;
}

impl Positioned for Coordinates {
    fn position(&self) -> Coordinates {
        *self
    }
}

impl Positioned for crate::models::Poi {
    fn position(&self) -> Coordinates {
        self.coordinates()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TravelModel {
    pub avg_speed_kmph: f64,
    pub min_hours: f64,
}

impl Default for TravelModel {
    fn default() -> Self {
        Self {
            avg_speed_kmph: DEFAULT_AVG_SPEED_KMPH,
            min_hours: DEFAULT_MIN_TRAVEL_HOURS,
        }
    }
}

impl TravelModel {
    #[must_use]
    pub fn new(avg_speed_kmph: f64, min_hours: f64) -> Self {
        Self {
            avg_speed_kmph,
            min_hours,
        }
    }

    /// Hours to get from `from` to `to`, never below the floor
    #[must_use]
    pub fn hours_between<A, B>(&self, from: &A, to: &B) -> f64
    where
        A: Positioned + ?Sized,
        B: Positioned + ?Sized,
    {
        let (a, b) = (from.position(), to.position());
        let km = haversine(a.latitude, a.longitude, b.latitude, b.longitude);
        (km / self.avg_speed_kmph).max(self.min_hours)
    }
}

/// Travel hours between two points at the given average speed
#[must_use]
pub fn travel_time_hours<A, B>(p1: &A, p2: &B, avg_speed_kmph: f64) -> f64
where
    A: Positioned + ?Sized,
    B: Positioned + ?Sized,
{
    TravelModel::new(avg_speed_kmph, DEFAULT_MIN_TRAVEL_HOURS).hours_between(p1, p2)
}
