//! Itinerary model: day-indexed, time-stamped POI lists

use std::collections::BTreeMap;

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::Poi;
use crate::clock::{self, hhmm, hhmm_stamp};

/// A POI with its computed visiting window.
///
/// Times sit on the reference day from [`clock::on_schedule_day`], so a stop
/// after midnight still compares later than the ones before it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduledPoi {
    #[serde(flatten)]
    pub poi: Poi,
    #[serde(with = "hhmm_stamp")]
    pub start_time: NaiveDateTime,
    #[serde(with = "hhmm_stamp")]
    pub end_time: NaiveDateTime,
}

impl ScheduledPoi {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.poi.name
    }

    /// Visiting window formatted as `HH:MM - HH:MM`
    #[must_use]
    pub fn window(&self) -> String {
        format!(
            "{} - {}",
            clock::format_clock(self.start_time),
            clock::format_clock(self.end_time)
        )
    }
}

impl AsRef<Poi> for ScheduledPoi {
    fn as_ref(&self) -> &Poi {
        &self.poi
    }
}

/// Generated trip plan. Days are numbered from 1.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Itinerary {
    /// Start time every day was stamped from
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    days: BTreeMap<u32, Vec<ScheduledPoi>>,
}

impl Itinerary {
    /// Create an itinerary with `day_count` empty days
    #[must_use]
    pub fn empty(start_time: NaiveTime, day_count: u32) -> Self {
        Self {
            start_time,
            days: (1..=day_count).map(|day| (day, Vec::new())).collect(),
        }
    }

    #[must_use]
    pub fn day(&self, day: u32) -> Option<&[ScheduledPoi]> {
        self.days.get(&day).map(Vec::as_slice)
    }

    pub(crate) fn day_mut(&mut self, day: u32) -> Option<&mut Vec<ScheduledPoi>> {
        self.days.get_mut(&day)
    }

    pub(crate) fn set_day(&mut self, day: u32, entries: Vec<ScheduledPoi>) {
        self.days.insert(day, entries);
    }

    /// Days in ascending order
    pub fn days(&self) -> impl Iterator<Item = (u32, &[ScheduledPoi])> {
        self.days.iter().map(|(day, entries)| (*day, entries.as_slice()))
    }

    #[must_use]
    pub fn day_count(&self) -> u32 {
        u32::try_from(self.days.len()).unwrap_or(u32::MAX)
    }

    /// Names of every scheduled POI in day then visiting order
    #[must_use]
    pub fn scheduled_names(&self) -> Vec<&str> {
        self.days
            .values()
            .flat_map(|entries| entries.iter().map(ScheduledPoi::name))
            .collect()
    }

    #[must_use]
    pub fn total_scheduled(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    /// True when no day has any POI
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_scheduled() == 0
    }

    pub(crate) fn as_map(&self) -> &BTreeMap<u32, Vec<ScheduledPoi>> {
        &self.days
    }
}
