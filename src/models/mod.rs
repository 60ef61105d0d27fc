//! Data models for the `TourGuide` planner
//!
//! This module contains the core domain models organized by concern:
//! - Location: Geographic coordinates and stay-location parsing
//! - Poi: Points of interest and travel styles
//! - Itinerary: Day-indexed, time-stamped schedules

pub mod itinerary;
pub mod location;
pub mod poi;

// Re-export all public types for convenient access
pub use itinerary::{Itinerary, ScheduledPoi};
pub use location::{Coordinates, parse_stay_location};
pub use poi::{Poi, TravelStyle};
