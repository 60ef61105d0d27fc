//! Greedy multi-day itinerary generator
//!
//! Each day starts from the same center (the stay location, or the centroid
//! of the pool) and repeatedly picks the most relevant remaining POI, nearest
//! first among equals, that still fits the day budget. There is no
//! backtracking; POIs left over after the last day are dropped.

use tracing::{debug, info, warn};

use super::scheduler::stamp_day;
use super::scoring::score_poi;
use super::{ItineraryPlanner, check_visit_durations};
use crate::Result;
use crate::clock::parse_start_time;
use crate::models::{Coordinates, Itinerary, Poi, TravelStyle};

struct Candidate {
    index: usize,
    score: f64,
    distance_km: f64,
}

impl ItineraryPlanner {
    /// Partition `pool` into `days` time-stamped days.
    ///
    /// Fails when `start_time` is not `HH:MM` or a POI has a duration that is
    /// negative, not finite, or longer than a day.
    #[tracing::instrument(level = "debug", skip(self, pool), fields(pool_size = pool.len()))]
    pub fn generate(
        &self,
        pool: &[Poi],
        days: u32,
        travel_style: TravelStyle,
        start_time: &str,
        stay: Option<Coordinates>,
    ) -> Result<Itinerary> {
        let start = parse_start_time(start_time)?;
        check_visit_durations(pool)?;
        let mut itinerary = Itinerary::empty(start, days);

        let Some(center) = stay.or_else(|| Coordinates::centroid(pool.iter().map(Poi::coordinates)))
        else {
            debug!("Empty POI pool, returning {} empty days", days);
            return Ok(itinerary);
        };
        debug!("Day start center: {}", center.format_coordinates());

        let mut remaining = pool.to_vec();
        for day in 1..=days {
            let picked = self.fill_day(&mut remaining, center, travel_style);
            debug!("Day {} filled with {} POIs", day, picked.len());
            itinerary.set_day(
                day,
                stamp_day(&picked, start, &self.settings.travel, self.settings.buffer()),
            );
        }

        if !remaining.is_empty() {
            warn!(
                "{} POIs did not fit into {} days and were dropped",
                remaining.len(),
                days
            );
        }
        info!(
            "Generated {}-day itinerary with {} of {} POIs",
            days,
            itinerary.total_scheduled(),
            pool.len()
        );

        Ok(itinerary)
    }

    /// Greedily take POIs out of `remaining` until nothing else fits the day
    fn fill_day(
        &self,
        remaining: &mut Vec<Poi>,
        center: Coordinates,
        travel_style: TravelStyle,
    ) -> Vec<Poi> {
        let budget = self.settings.day_hours_budget;
        let travel = &self.settings.travel;
        let mut time_used = 0.0;
        let mut cursor = center;
        let mut day = Vec::new();

        while !remaining.is_empty() {
            let candidates = rank_candidates(remaining, cursor, travel_style);

            let pick = candidates.iter().find_map(|candidate| {
                let poi = &remaining[candidate.index];
                let cost = travel.hours_between(&cursor, poi) + poi.duration;
                (time_used + cost <= budget).then_some((candidate.index, cost))
            });
            let Some((index, cost)) = pick else {
                break;
            };

            let poi = remaining.remove(index);
            remaining.retain(|other| other.name != poi.name);
            debug!(
                "Picked {} ({:.2}h, {:.2}h used of {:.2}h)",
                poi.name,
                cost,
                time_used + cost,
                budget
            );
            time_used += cost;
            cursor = poi.coordinates();
            day.push(poi);
        }

        day
    }
}

/// Order remaining POIs by score descending, then distance from the cursor,
/// then name.
fn rank_candidates(remaining: &[Poi], cursor: Coordinates, travel_style: TravelStyle) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = remaining
        .iter()
        .enumerate()
        .map(|(index, poi)| Candidate {
            index,
            score: score_poi(poi, travel_style),
            distance_km: cursor.distance_km(&poi.coordinates()),
        })
        .collect();

    candidates.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.distance_km.total_cmp(&b.distance_km))
            .then_with(|| remaining[a.index].name.cmp(&remaining[b.index].name))
    });
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::format_clock;
    use crate::planner::{PlannerSettings, generate_itinerary};

    fn names(itinerary: &Itinerary, day: u32) -> Vec<&str> {
        itinerary
            .day(day)
            .unwrap()
            .iter()
            .map(|s| s.name())
            .collect()
    }

    #[test]
    fn test_rank_prefers_score_over_distance() {
        let pool = vec![
            Poi::new("Near", 0.0, 0.01).with_duration(3.0),
            Poi::new("Far", 0.0, 0.5).with_tags(["family"]),
        ];
        let ranked = rank_candidates(&pool, Coordinates::new(0.0, 0.0), TravelStyle::Family);
        assert_eq!(ranked[0].index, 1);
        assert_eq!(ranked[1].index, 0);
    }

    #[test]
    fn test_rank_ties_broken_by_distance_then_name() {
        let pool = vec![
            Poi::new("Zeta", 0.0, 0.2),
            Poi::new("Beta", 0.0, 0.1),
            Poi::new("Alpha", 0.0, 0.1),
        ];
        let ranked = rank_candidates(&pool, Coordinates::new(0.0, 0.0), TravelStyle::Cultural);
        let order: Vec<&str> = ranked.iter().map(|c| pool[c.index].name.as_str()).collect();
        assert_eq!(order, vec!["Alpha", "Beta", "Zeta"]);
    }

    #[test]
    fn test_two_poi_scenario() {
        let pool = vec![
            Poi::new("A", 0.0, 0.0).with_tags(["family"]),
            Poi::new("B", 0.0, 1.0),
        ];
        let itinerary =
            generate_itinerary(&pool, 1, TravelStyle::Family, "09:00", None, 8.5).unwrap();
        let day = itinerary.day(1).unwrap();
        assert_eq!(names(&itinerary, 1), vec!["A", "B"]);
        assert_eq!(format_clock(day[0].start_time), "09:00");
        assert_eq!(format_clock(day[0].end_time), "10:00");
        // 10:00 + 30 min buffer + 111.19 km at 30 km/h (3h42m)
        assert_eq!(format_clock(day[1].start_time), "14:12");
        assert_eq!(format_clock(day[1].end_time), "15:12");
    }

    #[test]
    fn test_empty_pool_yields_empty_days() {
        let itinerary =
            generate_itinerary(&[], 2, TravelStyle::Cultural, "09:00", None, 8.5).unwrap();
        assert_eq!(itinerary.day_count(), 2);
        assert!(itinerary.is_empty());
    }

    #[test]
    fn test_tiny_budget_yields_empty_days() {
        let pool = vec![Poi::new("A", 0.0, 0.0), Poi::new("B", 0.0, 0.1)];
        let itinerary =
            generate_itinerary(&pool, 3, TravelStyle::Cultural, "09:00", None, 0.1).unwrap();
        assert_eq!(itinerary.day_count(), 3);
        assert!(itinerary.is_empty());
    }

    #[test]
    fn test_invalid_start_time_fails_fast() {
        let pool = vec![Poi::new("A", 0.0, 0.0)];
        assert!(generate_itinerary(&pool, 1, TravelStyle::Cultural, "9h", None, 8.5).is_err());
    }

    #[test]
    fn test_spills_into_following_days() {
        // each costs 0.25h travel + 4h, so two per day
        let pool: Vec<Poi> = (0..5)
            .map(|i| Poi::new(format!("P{i}"), 0.0, 0.001 * f64::from(i)).with_duration(4.0))
            .collect();
        let planner = ItineraryPlanner::new(PlannerSettings::default());
        let itinerary = planner
            .generate(&pool, 2, TravelStyle::Cultural, "09:00", None)
            .unwrap();
        assert_eq!(itinerary.day(1).unwrap().len(), 2);
        assert_eq!(itinerary.day(2).unwrap().len(), 2);
        assert_eq!(itinerary.total_scheduled(), 4);
    }

    #[test]
    fn test_each_day_starts_from_the_stay_location() {
        let pool = vec![
            Poi::new("Fort", 0.0, 0.5).with_tags(["family"]).with_duration(3.0),
            Poi::new("Lighthouse", 0.0, 0.45).with_tags(["family"]).with_duration(3.0),
            Poi::new("Bazaar", 0.0, -0.01),
            Poi::new("Temple", 0.0, 0.03),
        ];
        let stay = Some(Coordinates::new(0.0, 0.0));
        let itinerary =
            generate_itinerary(&pool, 2, TravelStyle::Family, "09:00", stay, 8.5).unwrap();

        assert_eq!(names(&itinerary, 1), vec!["Lighthouse", "Fort"]);
        // measured from Fort, Temple would be nearer and come first
        assert_eq!(names(&itinerary, 2), vec!["Bazaar", "Temple"]);
        let day = itinerary.day(2).unwrap();
        assert_eq!(day[0].window(), "09:00 - 10:00");
        assert_eq!(day[1].window(), "10:45 - 11:45");
    }

    #[test]
    fn test_duplicate_names_scheduled_once() {
        let pool = vec![Poi::new("Same", 0.0, 0.0), Poi::new("Same", 0.0, 0.01)];
        let itinerary =
            generate_itinerary(&pool, 2, TravelStyle::Cultural, "09:00", None, 8.5).unwrap();
        assert_eq!(itinerary.scheduled_names(), vec!["Same"]);
    }

    #[test]
    fn test_stay_location_is_used_as_start() {
        // nearest to the stay location goes first among equal scores
        let pool = vec![Poi::new("West", 0.0, -0.05), Poi::new("East", 0.0, 0.05)];
        let stay = Some(Coordinates::new(0.0, 0.06));
        let itinerary =
            generate_itinerary(&pool, 1, TravelStyle::Cultural, "09:00", stay, 8.5).unwrap();
        assert_eq!(names(&itinerary, 1), vec!["East", "West"]);
    }
}
