//! Wall-clock helpers for day schedules
//!
//! Stamped times live on a fixed reference day so a schedule that runs past
//! midnight still orders correctly. Displayed times wrap on a 24 hour clock
//! and are truncated to whole minutes.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::{Result, TourGuideError};

const CLOCK_FORMAT: &str = "%H:%M";

/// Parse a day start time in `HH:MM` form
pub fn parse_start_time(input: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(input.trim(), CLOCK_FORMAT)
        .map_err(|_| TourGuideError::invalid_time(input))
}

/// Place `time` on the reference day every schedule is stamped from
#[must_use]
pub fn on_schedule_day(time: NaiveTime) -> NaiveDateTime {
    NaiveDate::default().and_time(time)
}

/// Render a time as `HH:MM`, wrapping past midnight
#[must_use]
pub fn format_clock<T: Timelike>(time: T) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

/// Convert fractional hours to a duration at microsecond resolution.
///
/// Expects finite hours; callers check visit durations with
/// [`check_hours`] first.
#[must_use]
pub fn hours_to_duration(hours: f64) -> Duration {
    Duration::microseconds((hours * 3_600_000_000.0).round() as i64)
}

/// Reject hours that are negative, not finite, or longer than `max_hours`
pub fn check_hours(what: &str, hours: f64, max_hours: f64) -> Result<f64> {
    if hours.is_finite() && (0.0..=max_hours).contains(&hours) {
        Ok(hours)
    } else {
        Err(TourGuideError::validation(format!(
            "{what} must be between 0 and {max_hours} hours, got {hours}"
        )))
    }
}

/// Serde adapter storing a `NaiveTime` as `HH:MM`
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_clock(*time))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_start_time(&raw).map_err(de::Error::custom)
    }
}

/// Serde adapter storing a stamped time as `HH:MM`.
///
/// Reading back places the time on the reference day, so the day offset of a
/// stop after midnight is not preserved.
pub mod hhmm_stamp {
    use chrono::NaiveDateTime;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_clock(*time))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        super::hhmm::deserialize(deserializer).map(super::on_schedule_day)
    }
}
