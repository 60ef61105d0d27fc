//! Planner session: the application state a front end keeps between
//! interactions.
//!
//! The session regenerates the itinerary only when the trip parameters
//! change, remembers which day is being viewed, and routes reorder and
//! removal requests to the planner. Latest parameters win.

use tracing::{debug, info};

use crate::catalog::PoiCatalog;
use crate::models::{Itinerary, ScheduledPoi, TravelStyle, parse_stay_location};
use crate::planner::{ItineraryPlanner, MoveDirection};
use crate::{Result, TourGuideError};

/// Everything the user chooses that shapes the itinerary
#[derive(Debug, Clone, PartialEq)]
pub struct TripParameters {
    pub state: String,
    pub city: String,
    pub days: u32,
    pub travel_style: TravelStyle,
    /// Daily start time as typed, `HH:MM`
    pub start_time: String,
    /// Optional stay location as typed, `lat,lon` or blank
    pub stay_location: String,
}

#[derive(Debug)]
pub struct PlannerSession {
    planner: ItineraryPlanner,
    max_days: u32,
    last_params: Option<TripParameters>,
    itinerary: Option<Itinerary>,
    selected_day: u32,
}

impl PlannerSession {
    #[must_use]
    pub fn new(planner: ItineraryPlanner, max_days: u32) -> Self {
        Self {
            planner,
            max_days,
            last_params: None,
            itinerary: None,
            selected_day: 1,
        }
    }

    /// Apply new parameters, regenerating when they differ from the last
    /// ones seen. Returns whether a new itinerary was generated.
    ///
    /// On error the previous itinerary is left in place.
    pub fn update(&mut self, catalog: &PoiCatalog, params: TripParameters) -> Result<bool> {
        if self.last_params.as_ref() == Some(&params) {
            debug!("Trip parameters unchanged, keeping itinerary");
            return Ok(false);
        }

        if params.days == 0 || params.days > self.max_days {
            return Err(TourGuideError::validation(format!(
                "number of days must be between 1 and {}, got {}",
                self.max_days, params.days
            )));
        }
        let stay = parse_stay_location(&params.stay_location)?;
        let pois = catalog.pois(&params.state, &params.city)?;

        let itinerary = self.planner.generate(
            pois,
            params.days,
            params.travel_style,
            &params.start_time,
            stay,
        )?;
        info!(
            "Regenerated itinerary for {}/{} ({} days, {})",
            params.state, params.city, params.days, params.travel_style
        );

        self.itinerary = Some(itinerary);
        self.last_params = Some(params);
        self.selected_day = 1;
        Ok(true)
    }

    #[must_use]
    pub fn itinerary(&self) -> Option<&Itinerary> {
        self.itinerary.as_ref()
    }

    #[must_use]
    pub fn params(&self) -> Option<&TripParameters> {
        self.last_params.as_ref()
    }

    #[must_use]
    pub fn selected_day(&self) -> u32 {
        self.selected_day
    }

    /// Entries of the selected day, empty before the first generation
    #[must_use]
    pub fn selected_entries(&self) -> &[ScheduledPoi] {
        self.itinerary
            .as_ref()
            .and_then(|itinerary| itinerary.day(self.selected_day))
            .unwrap_or(&[])
    }

    pub fn select_day(&mut self, day: u32) -> Result<()> {
        let itinerary = self.current()?;
        if itinerary.day(day).is_none() {
            return Err(TourGuideError::validation(format!(
                "day {day} is not part of the {}-day itinerary",
                itinerary.day_count()
            )));
        }
        self.selected_day = day;
        Ok(())
    }

    /// Move an entry of the selected day up or down
    pub fn move_entry(&mut self, index: usize, direction: MoveDirection) -> Result<&[ScheduledPoi]> {
        let day = self.selected_day;
        let itinerary = self.itinerary.as_mut().ok_or_else(not_generated)?;
        self.planner.move_entry(itinerary, day, index, direction)
    }

    /// Remove an entry from the selected day
    pub fn remove_entry(&mut self, index: usize) -> Result<ScheduledPoi> {
        let day = self.selected_day;
        let itinerary = self.itinerary.as_mut().ok_or_else(not_generated)?;
        self.planner.remove_entry(itinerary, day, index)
    }

    fn current(&self) -> Result<&Itinerary> {
        self.itinerary.as_ref().ok_or_else(not_generated)
    }
}

fn not_generated() -> TourGuideError {
    TourGuideError::validation("no itinerary has been generated yet")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::PlannerSettings;

    const CATALOG: &str = r#"{
        "State": {
            "City": [
                {"name": "A", "lat": 10.0, "lon": 10.0, "tags": ["family"]},
                {"name": "B", "lat": 10.0, "lon": 10.01, "duration": 2},
                {"name": "C", "lat": 10.0, "lon": 10.02, "duration": 0.5}
            ],
            "Empty": []
        }
    }"#;

    fn catalog() -> PoiCatalog {
        PoiCatalog::from_json_str(CATALOG).unwrap()
    }

    fn params() -> TripParameters {
        TripParameters {
            state: "State".to_string(),
            city: "City".to_string(),
            days: 2,
            travel_style: TravelStyle::Family,
            start_time: "09:00".to_string(),
            stay_location: String::new(),
        }
    }

    fn session() -> PlannerSession {
        PlannerSession::new(ItineraryPlanner::new(PlannerSettings::default()), 14)
    }

    #[test]
    fn test_regenerates_only_on_change() {
        let catalog = catalog();
        let mut session = session();
        assert!(session.update(&catalog, params()).unwrap());
        assert!(!session.update(&catalog, params()).unwrap());

        let mut changed = params();
        changed.start_time = "10:00".to_string();
        assert!(session.update(&catalog, changed).unwrap());
        assert_eq!(session.params().unwrap().start_time, "10:00");
    }

    #[test]
    fn test_regeneration_resets_selected_day() {
        let catalog = catalog();
        let mut session = session();
        session.update(&catalog, params()).unwrap();
        session.select_day(2).unwrap();
        assert_eq!(session.selected_day(), 2);

        let mut changed = params();
        changed.days = 3;
        session.update(&catalog, changed).unwrap();
        assert_eq!(session.selected_day(), 1);
        assert!(session.select_day(4).is_err());
    }

    #[test]
    fn test_failed_update_keeps_previous_itinerary() {
        let catalog = catalog();
        let mut session = session();
        session.update(&catalog, params()).unwrap();
        let before = session.itinerary().cloned();

        let mut bad = params();
        bad.stay_location = "not,a,coord".to_string();
        assert!(session.update(&catalog, bad).is_err());

        let mut bad_days = params();
        bad_days.days = 15;
        assert!(session.update(&catalog, bad_days).is_err());

        assert_eq!(session.itinerary().cloned(), before);
    }

    #[test]
    fn test_edits_apply_to_selected_day() {
        let catalog = catalog();
        let mut session = session();
        session.update(&catalog, params()).unwrap();
        let first: Vec<String> = session
            .selected_entries()
            .iter()
            .map(|e| e.name().to_string())
            .collect();
        assert_eq!(first, vec!["A", "C", "B"]);

        let day = session.move_entry(1, MoveDirection::Down).unwrap();
        let names: Vec<&str> = day.iter().map(ScheduledPoi::name).collect();
        assert_eq!(names, vec!["A", "B", "C"]);

        let removed = session.remove_entry(0).unwrap();
        assert_eq!(removed.name(), "A");
        assert_eq!(session.selected_entries().len(), 2);
    }

    #[test]
    fn test_empty_city_and_no_itinerary() {
        let catalog = catalog();
        let mut session = session();
        assert!(session.selected_entries().is_empty());
        assert!(session.remove_entry(0).is_err());

        let mut empty = params();
        empty.city = "Empty".to_string();
        session.update(&catalog, empty).unwrap();
        assert!(session.itinerary().unwrap().is_empty());
        assert!(session.selected_entries().is_empty());
    }
}
