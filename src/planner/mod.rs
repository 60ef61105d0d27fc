//! Itinerary planning
//!
//! This module provides the planning core:
//! - Distance and travel time models
//! - Relevance scoring of POIs for a travel style
//! - The day scheduler that stamps clock times onto an ordered day
//! - The greedy multi-day itinerary generator
//! - Reorder and removal operations on generated days
//!
//! Everything here is synchronous and free of I/O.

pub mod distance;
pub mod editing;
pub mod generator;
pub mod scheduler;
pub mod scoring;
pub mod travel;

use chrono::Duration;

use crate::Result;
use crate::clock::{check_hours, parse_start_time};
use crate::config::PlannerConfig;
use crate::models::{Coordinates, Itinerary, Poi, ScheduledPoi, TravelStyle};

pub use distance::haversine;
pub use editing::MoveDirection;
pub use scoring::score_poi;
pub use travel::{Positioned, TravelModel, travel_time_hours};

pub const DEFAULT_DAY_HOURS_BUDGET: f64 = 8.5;
pub const DEFAULT_BUFFER_MINUTES: u32 = 30;
/// Longest visit the scheduler accepts
pub const MAX_VISIT_HOURS: f64 = 24.0;

/// Tunables for the travel model, scheduler and generator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlannerSettings {
    pub travel: TravelModel,
    /// Wrap-up time after each visit before travelling on
    pub buffer_minutes: u32,
    /// Maximum travel plus visit hours per day
    pub day_hours_budget: f64,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            travel: TravelModel::default(),
            buffer_minutes: DEFAULT_BUFFER_MINUTES,
            day_hours_budget: DEFAULT_DAY_HOURS_BUDGET,
        }
    }
}

impl PlannerSettings {
    #[must_use]
    pub fn with_day_hours_budget(mut self, hours: f64) -> Self {
        self.day_hours_budget = hours;
        self
    }

    #[must_use]
    pub fn buffer(&self) -> Duration {
        Duration::minutes(i64::from(self.buffer_minutes))
    }
}

impl From<&PlannerConfig> for PlannerSettings {
    fn from(config: &PlannerConfig) -> Self {
        Self {
            travel: TravelModel::new(config.avg_speed_kmph, config.min_travel_hours),
            buffer_minutes: config.buffer_minutes,
            day_hours_budget: config.day_hours_budget,
        }
    }
}

/// Stateless planner bound to a set of settings
#[derive(Debug, Clone, Default)]
pub struct ItineraryPlanner {
    settings: PlannerSettings,
}

impl ItineraryPlanner {
    #[must_use]
    pub fn new(settings: PlannerSettings) -> Self {
        Self { settings }
    }

    #[must_use]
    pub fn settings(&self) -> &PlannerSettings {
        &self.settings
    }

    /// Re-stamp an ordered day starting at `start_time` (`HH:MM`)
    pub fn recompute_day<P: AsRef<Poi>>(
        &self,
        day: &[P],
        start_time: &str,
    ) -> Result<Vec<ScheduledPoi>> {
        let start = parse_start_time(start_time)?;
        check_visit_durations(day.iter().map(AsRef::<Poi>::as_ref))?;
        Ok(scheduler::stamp_day(
            day,
            start,
            &self.settings.travel,
            self.settings.buffer(),
        ))
    }
}

/// Fail on the first POI whose duration the scheduler cannot stamp
pub(crate) fn check_visit_durations<'a>(pois: impl IntoIterator<Item = &'a Poi>) -> Result<()> {
    for poi in pois {
        check_hours(&format!("duration of '{}'", poi.name), poi.duration, MAX_VISIT_HOURS)?;
    }
    Ok(())
}

/// Re-stamp an ordered day with the default travel model and buffer
pub fn recompute_day_times<P: AsRef<Poi>>(
    day_activities: &[P],
    start_time: &str,
) -> Result<Vec<ScheduledPoi>> {
    ItineraryPlanner::default().recompute_day(day_activities, start_time)
}

/// Generate an itinerary with default settings and the given day budget
pub fn generate_itinerary(
    city_pois: &[Poi],
    days: u32,
    travel_style: TravelStyle,
    start_time: &str,
    stay_coord: Option<Coordinates>,
    day_hours_budget: f64,
) -> Result<Itinerary> {
    let settings = PlannerSettings::default().with_day_hours_budget(day_hours_budget);
    ItineraryPlanner::new(settings).generate(city_pois, days, travel_style, start_time, stay_coord)
}
