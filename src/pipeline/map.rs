//! Clustered world map of seismic and multi-hazard events.
//!
//! The builder only produces marker data; the dashboard template hands it to
//! Leaflet with the markercluster plugin.

use crate::constants::{MAP_CENTER_LAT, MAP_CENTER_LON, MAP_ZOOM};
use crate::pipeline::normalize::{events, features, first_category, first_geometry, magnitude_text};
use crate::types::{Coordinates, DisasterFilter, RawFeedData};
use askama_escape::{escape, Html};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerColor {
    Red,
    Blue,
}

#[derive(Debug, Clone, Serialize)]
pub struct MapMarker {
    pub coordinates: Coordinates,
    pub color: MarkerColor,
    pub icon: &'static str,
    /// Popup body, already HTML-escaped
    pub popup_html: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DisasterMap {
    pub center: Coordinates,
    pub zoom: u8,
    pub clustered: bool,
    pub markers: Vec<MapMarker>,
}

impl Default for DisasterMap {
    fn default() -> Self {
        Self {
            center: Coordinates::new(MAP_CENTER_LAT, MAP_CENTER_LON),
            zoom: MAP_ZOOM,
            clustered: true,
            markers: Vec::new(),
        }
    }
}

impl DisasterMap {
    pub fn count_by_color(&self, color: MarkerColor) -> usize {
        self.markers.iter().filter(|m| m.color == color).count()
    }
}

/// Place markers for the selected category. Items without usable geometry are skipped.
pub fn build_map(
    seismic: Option<&RawFeedData>,
    hazards: Option<&RawFeedData>,
    filter: DisasterFilter,
) -> DisasterMap {
    let mut map = DisasterMap::default();

    if filter.includes_seismic() {
        for feature in seismic.map(features).unwrap_or(&[]) {
            let Some(coordinates) = Coordinates::from_geojson(&feature["geometry"]["coordinates"])
            else {
                debug!("Seismic feature without coordinates, no marker");
                continue;
            };
            let place = feature["properties"]["place"].as_str().unwrap_or("Unknown location");
            let magnitude = magnitude_text(feature).unwrap_or_else(|| "unknown".to_string());
            map.markers.push(MapMarker {
                coordinates,
                color: MarkerColor::Red,
                icon: "info-sign",
                popup_html: format!(
                    "<b>Earthquake</b><br>{}<br>Magnitude: {}",
                    escape(place, Html),
                    escape(&magnitude, Html)
                ),
            });
        }
    }

    for event in hazards.map(events).unwrap_or(&[]) {
        let Some(geometry) = first_geometry(event) else {
            continue;
        };
        let (Some(category), Some(coordinates)) = (
            first_category(event),
            Coordinates::from_geojson(&geometry["coordinates"]),
        ) else {
            debug!("EONET event with malformed category or geometry, no marker");
            continue;
        };
        if !filter.matches_category(category) {
            continue;
        }
        let title = event["title"].as_str().unwrap_or_default();
        map.markers.push(MapMarker {
            coordinates,
            color: MarkerColor::Blue,
            icon: "info-sign",
            popup_html: format!("<b>{}</b><br>{}", escape(category, Html), escape(title, Html)),
        });
    }

    debug!("Built map with {} markers for filter {}", map.markers.len(), filter);
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn seismic_feed() -> Value {
        json!({ "features": [
            { "properties": { "mag": 6.1, "place": "Off the coast <Honshu>", "time": 0 },
              "geometry": { "coordinates": [142.0, 38.0, 12.0] } },
            { "properties": { "mag": 4.8, "place": "Nowhere", "time": 0 },
              "geometry": null }
        ]})
    }

    fn hazard_feed() -> Value {
        json!({ "events": [
            { "title": "Canyon Fire 2", "categories": [{ "title": "Wildfires" }],
              "geometry": [{ "date": "2024-03-01T00:00:00Z", "coordinates": [-118.0, 34.0] }] },
            { "title": "Typhoon X", "categories": [{ "title": "Severe Storms" }],
              "geometry": [{ "date": "2024-03-01T00:00:00Z", "coordinates": [130.0, 15.0] }] },
            { "title": "Etna", "categories": [{ "title": "Volcanoes" }],
              "geometry": [{ "date": "2024-03-01T00:00:00Z", "coordinates": [15.0, 37.7] }] },
            { "title": "No geometry", "categories": [{ "title": "Wildfires" }], "geometry": [] }
        ]})
    }

    #[test]
    fn test_map_defaults() {
        let map = build_map(None, None, DisasterFilter::All);
        assert_eq!(map.center, Coordinates::new(20.0, 0.0));
        assert_eq!(map.zoom, 2);
        assert!(map.clustered);
        assert!(map.markers.is_empty());
    }

    #[test]
    fn test_all_filter_places_every_located_item() {
        let map = build_map(Some(&seismic_feed()), Some(&hazard_feed()), DisasterFilter::All);
        assert_eq!(map.count_by_color(MarkerColor::Red), 1);
        assert_eq!(map.count_by_color(MarkerColor::Blue), 3);
    }

    #[test]
    fn test_earthquake_filter_hides_unrelated_hazards() {
        let map = build_map(Some(&seismic_feed()), Some(&hazard_feed()), DisasterFilter::Earthquake);
        assert_eq!(map.count_by_color(MarkerColor::Red), 1);
        assert_eq!(map.count_by_color(MarkerColor::Blue), 0);
    }

    #[test]
    fn test_earthquake_filter_substring_matches_eonet_earthquakes() {
        let hazards = json!({ "events": [
            { "title": "Quake", "categories": [{ "title": "Earthquakes" }],
              "geometry": [{ "coordinates": [1.0, 2.0] }] }
        ]});
        let map = build_map(None, Some(&hazards), DisasterFilter::Earthquake);
        assert_eq!(map.count_by_color(MarkerColor::Blue), 1);
    }

    #[test]
    fn test_storm_filter_matches_severe_storms_only() {
        let map = build_map(Some(&seismic_feed()), Some(&hazard_feed()), DisasterFilter::Storm);
        assert_eq!(map.count_by_color(MarkerColor::Red), 0);
        assert_eq!(map.markers.len(), 1);
        assert!(map.markers[0].popup_html.contains("Typhoon X"));
        assert_eq!(map.markers[0].coordinates, Coordinates::new(15.0, 130.0));
    }

    #[test]
    fn test_popups_are_escaped() {
        let map = build_map(Some(&seismic_feed()), None, DisasterFilter::All);
        assert_eq!(
            map.markers[0].popup_html,
            "<b>Earthquake</b><br>Off the coast &lt;Honshu&gt;<br>Magnitude: 6.1"
        );
    }

    #[test]
    fn test_malformed_hazard_geometry_is_skipped() {
        let hazards = json!({ "events": [
            { "title": "Bad", "categories": [{ "title": "Wildfires" }],
              "geometry": [{ "coordinates": "oops" }] },
            { "title": "No categories", "geometry": [{ "coordinates": [1.0, 2.0] }] }
        ]});
        let map = build_map(None, Some(&hazards), DisasterFilter::All);
        assert!(map.markers.is_empty());
    }

    #[test]
    fn test_marker_uses_first_category_and_geometry() {
        let hazards = json!({ "events": [{
            "title": "Storm then fire",
            "categories": [{ "title": "Storms" }, { "title": "Wildfires" }],
            "geometry": [
                { "date": "2024-03-01T00:00:00Z", "coordinates": [10.0, 20.0] },
                { "date": "2024-03-05T00:00:00Z", "coordinates": [30.0, 40.0] }
            ]
        }]});

        let wildfire = build_map(None, Some(&hazards), DisasterFilter::Wildfire);
        assert!(wildfire.markers.is_empty());

        let storm = build_map(None, Some(&hazards), DisasterFilter::Storm);
        assert_eq!(storm.markers.len(), 1);
        assert_eq!(storm.markers[0].coordinates, Coordinates::new(20.0, 10.0));
    }
}
