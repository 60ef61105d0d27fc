//! Day scheduler: stamps clock times onto an ordered day of POIs

use chrono::{Duration, NaiveTime};

use super::travel::TravelModel;
use crate::clock::{hours_to_duration, on_schedule_day};
use crate::models::{Poi, ScheduledPoi};

/// Stamp start and end times onto `pois` in the given order.
///
/// The first stop starts at `start`. Each later stop starts after the
/// previous end, plus `buffer`, plus travel from the previous stop.
/// Inputs are cloned, never mutated. Visit durations must already be
/// checked finite.
pub fn stamp_day<P: AsRef<Poi>>(
    pois: &[P],
    start: NaiveTime,
    travel: &TravelModel,
    buffer: Duration,
) -> Vec<ScheduledPoi> {
    let mut stamped = Vec::with_capacity(pois.len());
    let mut cursor = on_schedule_day(start);
    let mut previous: Option<&Poi> = None;

    for poi in pois.iter().map(AsRef::<Poi>::as_ref) {
        if let Some(prev) = previous {
            cursor += hours_to_duration(travel.hours_between(prev, poi));
        }
        let start_time = cursor;
        let end_time = start_time + hours_to_duration(poi.duration);
        stamped.push(ScheduledPoi {
            poi: poi.clone(),
            start_time,
            end_time,
        });
        cursor = end_time + buffer;
        previous = Some(poi);
    }

    stamped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::format_clock;

    fn nine() -> NaiveTime {
        NaiveTime::from_hms_opt(9, 0, 0).unwrap()
    }

    fn times(day: &[ScheduledPoi]) -> Vec<(String, String)> {
        day.iter()
            .map(|s| (format_clock(s.start_time), format_clock(s.end_time)))
            .collect()
    }

    #[test]
    fn test_empty_day() {
        let day: Vec<Poi> = Vec::new();
        assert!(stamp_day(&day, nine(), &TravelModel::default(), Duration::minutes(30)).is_empty());
    }

    #[test]
    fn test_adjacent_stops_use_floor_and_buffer() {
        let day = vec![
            Poi::new("A", 10.0, 10.0),
            Poi::new("B", 10.0, 10.0).with_duration(2.0),
            Poi::new("C", 10.0, 10.0).with_duration(0.5),
        ];
        let stamped = stamp_day(&day, nine(), &TravelModel::default(), Duration::minutes(30));
        assert_eq!(
            times(&stamped),
            vec![
                ("09:00".to_string(), "10:00".to_string()),
                ("10:45".to_string(), "12:45".to_string()),
                ("13:30".to_string(), "14:00".to_string()),
            ]
        );
    }

    #[test]
    fn test_day_running_past_midnight_keeps_order() {
        let day = vec![
            Poi::new("A", 0.0, 0.0).with_duration(1.5),
            Poi::new("B", 0.0, 0.01).with_duration(2.0),
        ];
        let late = NaiveTime::from_hms_opt(22, 0, 0).unwrap();
        let stamped = stamp_day(&day, late, &TravelModel::default(), Duration::minutes(30));
        assert_eq!(
            times(&stamped),
            vec![
                ("22:00".to_string(), "23:30".to_string()),
                ("00:15".to_string(), "02:15".to_string()),
            ]
        );
        assert!(stamped[0].end_time <= stamped[1].start_time);
        assert!(stamped[1].start_time <= stamped[1].end_time);
    }

    #[test]
    fn test_does_not_mutate_input() {
        let day = vec![Poi::new("A", 0.0, 0.0), Poi::new("B", 0.0, 0.1)];
        let before = day.clone();
        let _ = stamp_day(&day, nine(), &TravelModel::default(), Duration::minutes(30));
        assert_eq!(day, before);
    }

    #[test]
    fn test_restamping_is_idempotent() {
        let day = vec![Poi::new("A", 0.0, 0.0), Poi::new("B", 0.0, 0.2)];
        let model = TravelModel::default();
        let first = stamp_day(&day, nine(), &model, Duration::minutes(30));
        let second = stamp_day(&first, nine(), &model, Duration::minutes(30));
        assert_eq!(first, second);
    }
}
