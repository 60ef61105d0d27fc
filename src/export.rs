//! Read-only projections of an itinerary for download

use std::io::Write;

use csv::WriterBuilder;
use serde::Serialize;

use crate::clock::format_clock;
use crate::models::Itinerary;
use crate::{Result, TourGuideError};

/// One POI visit on one day, flattened for tabular export
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ExportRow {
    pub day: u32,
    pub place: String,
    pub start: String,
    pub end: String,
    pub duration_hrs: f64,
}

/// Pretty JSON object keyed by day number
pub fn to_json(itinerary: &Itinerary) -> Result<String> {
    Ok(serde_json::to_string_pretty(itinerary.as_map())?)
}

/// Rows in day order, then visiting order
#[must_use]
pub fn flat_rows(itinerary: &Itinerary) -> Vec<ExportRow> {
    itinerary
        .days()
        .flat_map(|(day, entries)| {
            entries.iter().map(move |entry| ExportRow {
                day,
                place: entry.poi.name.clone(),
                start: format_clock(entry.start_time),
                end: format_clock(entry.end_time),
                duration_hrs: entry.poi.duration,
            })
        })
        .collect()
}

/// Write the flattened rows as CSV with a header line
pub fn write_csv<W: Write>(itinerary: &Itinerary, writer: W) -> Result<()> {
    let mut wtr = WriterBuilder::new().has_headers(true).from_writer(writer);
    for row in flat_rows(itinerary) {
        wtr.serialize(&row)
            .map_err(|e| TourGuideError::export(format!("failed to write CSV row: {e}")))?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn to_csv_string(itinerary: &Itinerary) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(itinerary, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| TourGuideError::export(e.to_string()))
}
