//! `TourGuide` - Multi-day sightseeing itinerary planning
//!
//! This library provides the core functionality for scoring points of
//! interest against a travel style, greedily distributing them over days
//! under a time budget, and stamping concrete visiting times, plus the
//! catalog, export and route helpers built on top of a generated itinerary.

pub mod catalog;
pub mod clock;
pub mod config;
pub mod directions;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod planner;
pub mod session;

// Re-export core types for public API
pub use catalog::PoiCatalog;
pub use config::TourGuideConfig;
pub use error::TourGuideError;
pub use models::{Coordinates, Itinerary, Poi, ScheduledPoi, TravelStyle, parse_stay_location};
pub use planner::{
    ItineraryPlanner, MoveDirection, PlannerSettings, generate_itinerary, haversine,
    recompute_day_times, score_poi, travel_time_hours,
};
pub use session::{PlannerSession, TripParameters};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TourGuideError>;
