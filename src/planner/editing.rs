//! Reorder and removal operations on an already generated day
//!
//! These only re-stamp times; they never regenerate the itinerary or pull
//! POIs back from the unscheduled pool.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ItineraryPlanner;
use super::scheduler::stamp_day;
use crate::models::{Itinerary, ScheduledPoi};
use crate::{Result, TourGuideError};

/// Direction to move an entry within its day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveDirection {
    Up,
    Down,
}

impl ItineraryPlanner {
    /// Swap the entry at `index` with its neighbour and re-stamp the day.
    ///
    /// Moving the first entry up or the last entry down leaves the order
    /// unchanged.
    pub fn move_entry<'a>(
        &self,
        itinerary: &'a mut Itinerary,
        day: u32,
        index: usize,
        direction: MoveDirection,
    ) -> Result<&'a [ScheduledPoi]> {
        let entries = day_entries(itinerary, day, index)?;
        let neighbour = match direction {
            MoveDirection::Up => index.checked_sub(1),
            MoveDirection::Down => Some(index + 1).filter(|&n| n < entries.len()),
        };
        if let Some(neighbour) = neighbour {
            debug!("Day {}: moving entry {} to {}", day, index, neighbour);
            entries.swap(index, neighbour);
        }
        self.restamp(itinerary, day)
    }

    /// Remove the entry at `index` and re-stamp the rest of the day
    pub fn remove_entry(
        &self,
        itinerary: &mut Itinerary,
        day: u32,
        index: usize,
    ) -> Result<ScheduledPoi> {
        let removed = day_entries(itinerary, day, index)?.remove(index);
        debug!("Day {}: removed {}", day, removed.name());
        self.restamp(itinerary, day)?;
        Ok(removed)
    }

    fn restamp<'a>(&self, itinerary: &'a mut Itinerary, day: u32) -> Result<&'a [ScheduledPoi]> {
        let start = itinerary.start_time;
        let entries = itinerary
            .day_mut(day)
            .ok_or_else(|| unknown_day(day))?;
        let restamped = stamp_day(entries.as_slice(), start, &self.settings.travel, self.settings.buffer());
        *entries = restamped;
        Ok(entries.as_slice())
    }
}

fn day_entries(itinerary: &mut Itinerary, day: u32, index: usize) -> Result<&mut Vec<ScheduledPoi>> {
    let entries = itinerary.day_mut(day).ok_or_else(|| unknown_day(day))?;
    if index >= entries.len() {
        return Err(TourGuideError::validation(format!(
            "day {day} has {} entries, no entry at position {index}",
            entries.len()
        )));
    }
    Ok(entries)
}

fn unknown_day(day: u32) -> TourGuideError {
    TourGuideError::validation(format!("itinerary has no day {day}"))
}
