use crate::constants::{RECORD_TIME_FORMAT, STORMS_CATEGORY, WILDFIRES_CATEGORY};
use crate::error::MonitorError;
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Raw feed payload as returned from the external APIs
pub type RawFeedData = serde_json::Value;

/// The three upstream feeds the dashboard reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedSource {
    Seismic,
    MultiHazard,
    News,
}

impl FeedSource {
    /// Identifier used in logs and metric labels
    pub fn id(&self) -> &'static str {
        match self {
            FeedSource::Seismic => "usgs",
            FeedSource::MultiHazard => "eonet",
            FeedSource::News => "newsapi",
        }
    }

    /// Human wording used in user-facing error messages
    pub fn description(&self) -> &'static str {
        match self {
            FeedSource::Seismic => "earthquake data",
            FeedSource::MultiHazard => "EONET disaster data",
            FeedSource::News => "disaster news",
        }
    }
}

impl fmt::Display for FeedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisasterKind {
    Earthquake,
    Wildfire,
    Storm,
    Other(String),
}

impl DisasterKind {
    /// Singularize an EONET category label ("Wildfires" -> Wildfire).
    ///
    /// Known categories map explicitly; anything else loses one trailing `s`.
    pub fn from_category(category: &str) -> Self {
        match category.to_lowercase().as_str() {
            WILDFIRES_CATEGORY => DisasterKind::Wildfire,
            STORMS_CATEGORY => DisasterKind::Storm,
            _ => DisasterKind::Other(
                category
                    .strip_suffix('s')
                    .unwrap_or(category)
                    .to_string(),
            ),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            DisasterKind::Earthquake => "Earthquake",
            DisasterKind::Wildfire => "Wildfire",
            DisasterKind::Storm => "Storm",
            DisasterKind::Other(label) => label,
        }
    }
}

impl fmt::Display for DisasterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for DisasterKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Build from a GeoJSON-style `[lon, lat, ...]` array; `None` unless both are numbers.
    pub fn from_geojson(value: &RawFeedData) -> Option<Self> {
        let coords = value.as_array()?;
        let longitude = coords.first()?.as_f64()?;
        let latitude = coords.get(1)?.as_f64()?;
        Some(Self::new(latitude, longitude))
    }
}

/// One row of the unified disaster table
#[derive(Debug, Clone, Serialize)]
pub struct DisasterRecord {
    pub kind: DisasterKind,
    pub location: String,
    pub headline: String,
    #[serde(serialize_with = "serialize_record_time")]
    pub occurred_at: DateTime<Utc>,
    pub coordinates: Option<Coordinates>,
}

impl DisasterRecord {
    /// `occurred_at` rendered as `YYYY-MM-DD HH:MM UTC`
    pub fn occurred_at_label(&self) -> String {
        format_record_time(&self.occurred_at)
    }
}

pub fn format_record_time(time: &DateTime<Utc>) -> String {
    time.format(RECORD_TIME_FORMAT).to_string()
}

fn serialize_record_time<S: Serializer>(time: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&time.format(RECORD_TIME_FORMAT))
}

/// Category selection offered on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum DisasterFilter {
    #[default]
    All,
    Earthquake,
    Wildfire,
    Storm,
}

impl DisasterFilter {
    pub const ALL: [DisasterFilter; 4] = [
        DisasterFilter::All,
        DisasterFilter::Earthquake,
        DisasterFilter::Wildfire,
        DisasterFilter::Storm,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DisasterFilter::All => "All",
            DisasterFilter::Earthquake => "Earthquake",
            DisasterFilter::Wildfire => "Wildfire",
            DisasterFilter::Storm => "Storm",
        }
    }

    pub fn includes_seismic(&self) -> bool {
        matches!(self, DisasterFilter::All | DisasterFilter::Earthquake)
    }

    /// Loose match against an EONET category label: the lowercased filter only
    /// has to appear somewhere in the lowercased category.
    pub fn matches_category(&self, category: &str) -> bool {
        match self {
            DisasterFilter::All => true,
            other => category
                .to_lowercase()
                .contains(&other.label().to_lowercase()),
        }
    }
}

impl fmt::Display for DisasterFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DisasterFilter {
    type Err = MonitorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|f| f.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| MonitorError::UnknownFilter(s.to_string()))
    }
}
