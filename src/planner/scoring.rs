//! Relevance scoring of POIs for a travel style

use crate::models::{Poi, TravelStyle};

const STYLE_MATCH_BONUS: f64 = 10.0;
const SHORT_VISIT_BASE: f64 = 5.0;
const SHORT_VISIT_PENALTY_PER_HOUR: f64 = 2.0;

/// Ordering key for a POI: style match first, shorter visits preferred.
///
/// Never negative; visits of 2.5 hours or more get no short-visit bonus.
#[must_use]
pub fn score_poi(poi: &Poi, travel_style: TravelStyle) -> f64 {
    let style_bonus = if poi.matches_style(travel_style) {
        STYLE_MATCH_BONUS
    } else {
        0.0
    };
    let short_visit_bonus =
        (SHORT_VISIT_BASE - poi.duration * SHORT_VISIT_PENALTY_PER_HOUR).max(0.0);
    style_bonus + short_visit_bonus
}
