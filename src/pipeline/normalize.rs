//! Turns the seismic and multi-hazard payloads into one list of [`DisasterRecord`]s.
//!
//! Seismic records come first, then multi-hazard records, each in feed order.
//! Items with missing or malformed fields are dropped one at a time; a broken
//! item never fails the whole pass.

use crate::constants::{EONET_TIME_FORMAT, TABLE_CATEGORIES, WILDFIRES_CATEGORY};
use crate::metrics::NormalizeMetrics;
use crate::types::{Coordinates, DisasterKind, DisasterRecord, RawFeedData};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::Value;
use tracing::{debug, info};

#[derive(Debug, Clone, Default)]
pub struct NormalizedFeeds {
    pub records: Vec<DisasterRecord>,
    /// Full EONET event objects categorized as wildfires, for the trend chart
    pub wildfire_events: Vec<RawFeedData>,
    pub skipped: usize,
}

/// Normalize both feeds. A `None` feed contributes zero records.
pub fn normalize_feeds(
    seismic: Option<&RawFeedData>,
    hazards: Option<&RawFeedData>,
) -> NormalizedFeeds {
    let mut out = NormalizedFeeds::default();

    if let Some(seismic) = seismic {
        for feature in features(seismic) {
            match seismic_record(feature) {
                Some(record) => out.records.push(record),
                None => {
                    debug!("Skipping malformed seismic feature: {}", feature_id(feature));
                    out.skipped += 1;
                }
            }
        }
    }

    if let Some(hazards) = hazards {
        for event in events(hazards) {
            let Some(category) = first_category(event) else {
                debug!("Skipping EONET event without a category: {}", feature_id(event));
                out.skipped += 1;
                continue;
            };
            let category_lower = category.to_lowercase();
            if !TABLE_CATEGORIES.contains(&category_lower.as_str()) {
                continue;
            }
            match hazard_record(event, category) {
                Some(record) => {
                    out.records.push(record);
                    if category_lower == WILDFIRES_CATEGORY {
                        out.wildfire_events.push(event.clone());
                    }
                }
                None => {
                    debug!("Skipping malformed EONET event: {}", feature_id(event));
                    out.skipped += 1;
                }
            }
        }
    }

    info!(
        "Normalized {} records ({} wildfire events, {} skipped)",
        out.records.len(),
        out.wildfire_events.len(),
        out.skipped
    );
    NormalizeMetrics::record_run(out.records.len(), out.skipped);
    out
}

/// `features` array of a USGS GeoJSON payload (empty if absent)
pub(crate) fn features(seismic: &RawFeedData) -> &[Value] {
    seismic["features"].as_array().map(Vec::as_slice).unwrap_or(&[])
}

/// `events` array of an EONET payload (empty if absent)
pub(crate) fn events(hazards: &RawFeedData) -> &[Value] {
    hazards["events"].as_array().map(Vec::as_slice).unwrap_or(&[])
}

/// Title of an event's first category
pub(crate) fn first_category(event: &Value) -> Option<&str> {
    event["categories"].get(0)?["title"].as_str()
}

/// An event's first geometry entry
pub(crate) fn first_geometry(event: &Value) -> Option<&Value> {
    event["geometry"].as_array()?.first()
}

/// Magnitude exactly as the feed wrote it (`4.5`, `5.0`, `6`)
pub(crate) fn magnitude_text(feature: &Value) -> Option<String> {
    match &feature["properties"]["mag"] {
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Parse an EONET `YYYY-MM-DDTHH:MM:SSZ` timestamp
pub fn parse_eonet_time(raw: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(raw, EONET_TIME_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

fn seismic_record(feature: &Value) -> Option<DisasterRecord> {
    let properties = &feature["properties"];
    let magnitude = magnitude_text(feature)?;
    let occurred_at = DateTime::from_timestamp_millis(properties["time"].as_i64()?)?;
    let location = properties["place"]
        .as_str()
        .unwrap_or("Unknown location")
        .to_string();

    Some(DisasterRecord {
        kind: DisasterKind::Earthquake,
        location,
        headline: format!("Magnitude {}", magnitude),
        occurred_at,
        coordinates: Coordinates::from_geojson(&feature["geometry"]["coordinates"]),
    })
}

fn hazard_record(event: &Value, category: &str) -> Option<DisasterRecord> {
    let geometry = first_geometry(event)?;
    let raw_coords = &geometry["coordinates"];
    let coordinates = Coordinates::from_geojson(raw_coords)?;
    let occurred_at = parse_eonet_time(geometry["date"].as_str()?)?;
    let title = event["title"].as_str()?;

    Some(DisasterRecord {
        kind: DisasterKind::from_category(category),
        location: format!("Lat: {}, Lon: {}", raw_coords[1], raw_coords[0]),
        headline: title.to_string(),
        occurred_at,
        coordinates: Some(coordinates),
    })
}

fn feature_id(item: &Value) -> String {
    item["id"]
        .as_str()
        .map(str::to_string)
        .unwrap_or_else(|| "<no id>".to_string())
}
