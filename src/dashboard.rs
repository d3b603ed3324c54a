//! Assembles one dashboard from a set of fetched feeds and renders it as HTML.

use crate::apis::SourceError;
use crate::constants::NO_RECORDS_PLACEHOLDER;
use crate::error::Result;
use crate::pipeline::{
    build_map, build_ticker, magnitude_histogram, normalize_feeds, wildfire_histogram,
    DisasterMap, Histogram, NewsTicker,
};
use crate::types::{DisasterFilter, DisasterRecord, RawFeedData};
use askama::Template;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Raw payloads of one page load. A `None` feed failed and has a matching entry in `errors`.
#[derive(Debug, Clone, Default)]
pub struct FeedSnapshot {
    pub seismic: Option<RawFeedData>,
    pub hazards: Option<RawFeedData>,
    pub news: Option<RawFeedData>,
    pub errors: Vec<SourceError>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub filter: DisasterFilter,
    pub errors: Vec<SourceError>,
    pub records: Vec<DisasterRecord>,
    pub map: DisasterMap,
    pub magnitude_histogram: Option<Histogram>,
    pub wildfire_histogram: Option<Histogram>,
    pub news: NewsTicker,
    pub generated_at: DateTime<Utc>,
}

impl Dashboard {
    /// Run normalize -> map -> charts -> ticker over one snapshot.
    pub fn build(snapshot: FeedSnapshot, filter: DisasterFilter, generated_at: DateTime<Utc>) -> Self {
        let seismic = snapshot.seismic.as_ref();
        let hazards = snapshot.hazards.as_ref();

        let normalized = normalize_feeds(seismic, hazards);
        let map = build_map(seismic, hazards, filter);
        let magnitude_histogram = magnitude_histogram(seismic);
        let wildfire_histogram = wildfire_histogram(&normalized.wildfire_events);
        let news = build_ticker(snapshot.news.as_ref());

        Self {
            filter,
            errors: snapshot.errors,
            records: normalized.records,
            map,
            magnitude_histogram,
            wildfire_histogram,
            news,
            generated_at,
        }
    }

    pub fn render_html(&self) -> Result<String> {
        Ok(DashboardTemplate::new(self)?.render()?)
    }
}

pub struct FilterOption {
    pub label: &'static str,
    pub selected: bool,
}

/// Table row with every column already formatted
pub struct RecordRow {
    pub kind: String,
    pub location: String,
    pub headline: String,
    pub date: String,
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate<'a> {
    pub filters: Vec<FilterOption>,
    pub errors: &'a [SourceError],
    pub rows: Vec<RecordRow>,
    pub no_records: &'static str,
    pub charts: Vec<&'a Histogram>,
    pub news: &'a NewsTicker,
    pub marker_count: usize,
    pub map_json: String,
    pub generated_at: String,
}

impl<'a> DashboardTemplate<'a> {
    pub fn new(dashboard: &'a Dashboard) -> Result<Self> {
        // Safe to inline into <script>: no closing tag can survive
        let map_json = serde_json::to_string(&dashboard.map)?.replace("</", "<\\/");

        Ok(Self {
            filters: DisasterFilter::ALL
                .iter()
                .map(|f| FilterOption {
                    label: f.label(),
                    selected: *f == dashboard.filter,
                })
                .collect(),
            errors: &dashboard.errors,
            rows: dashboard
                .records
                .iter()
                .map(|r| RecordRow {
                    kind: r.kind.to_string(),
                    location: r.location.clone(),
                    headline: r.headline.clone(),
                    date: r.occurred_at_label(),
                })
                .collect(),
            no_records: NO_RECORDS_PLACEHOLDER,
            charts: dashboard
                .magnitude_histogram
                .iter()
                .chain(dashboard.wildfire_histogram.iter())
                .collect(),
            news: &dashboard.news,
            marker_count: dashboard.map.markers.len(),
            map_json,
            generated_at: dashboard.generated_at.format("%Y-%m-%d %H:%M UTC").to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FeedSource;
    use serde_json::json;

    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_709_296_200, 0).unwrap()
    }

    #[test]
    fn test_empty_snapshot_renders_placeholders() {
        let dashboard = Dashboard::build(FeedSnapshot::default(), DisasterFilter::All, now());
        assert!(dashboard.records.is_empty());
        assert!(dashboard.magnitude_histogram.is_none());

        let html = dashboard.render_html().unwrap();
        assert!(html.contains(NO_RECORDS_PLACEHOLDER));
        assert!(html.contains("No disaster news available at the moment."));
    }

    #[test]
    fn test_source_errors_are_shown() {
        let snapshot = FeedSnapshot {
            errors: vec![SourceError {
                source: FeedSource::Seismic,
                message: "Failed to fetch earthquake data. Status code: 500".to_string(),
            }],
            ..FeedSnapshot::default()
        };
        let html = Dashboard::build(snapshot, DisasterFilter::All, now())
            .render_html()
            .unwrap();
        assert!(html.contains("Failed to fetch earthquake data. Status code: 500"));
    }

    #[test]
    fn test_rendered_page_contains_rows_and_escapes_titles() {
        let snapshot = FeedSnapshot {
            hazards: Some(json!({ "events": [
                { "title": "Fire <script>", "categories": [{ "title": "Wildfires" }],
                  "geometry": [{ "date": "2024-03-01T12:30:00Z", "coordinates": [-120.5, 35.25] }] }
            ]})),
            ..FeedSnapshot::default()
        };
        let dashboard = Dashboard::build(snapshot, DisasterFilter::Wildfire, now());
        let html = dashboard.render_html().unwrap();

        assert!(html.contains("2024-03-01 12:30 UTC"));
        assert!(html.contains("Lat: 35.25, Lon: -120.5"));
        assert!(html.contains("Fire &lt;script&gt;"));
        assert!(!html.contains("Fire <script>"));
        assert!(html.contains("Distribution of Wildfires Over Time"));
    }

    #[test]
    fn test_selected_filter_is_marked() {
        let html = Dashboard::build(FeedSnapshot::default(), DisasterFilter::Storm, now())
            .render_html()
            .unwrap();
        assert!(html.contains(r#"<option value="Storm" selected>"#));
        assert!(html.contains(r#"<option value="All">"#));
    }
}
