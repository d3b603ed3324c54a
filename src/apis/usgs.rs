use crate::apis::{FeedApi, FeedRequest};
use crate::config::FeedsConfig;
use crate::constants::{DEFAULT_LOOKBACK_DAYS, DEFAULT_MIN_MAGNITUDE, USGS_QUERY_URL};
use crate::types::FeedSource;
use chrono::{Duration, NaiveDate};

/// USGS FDSN event query: recent earthquakes as GeoJSON, newest first
pub struct UsgsFeed {
    url: String,
    lookback_days: i64,
    min_magnitude: f64,
}

impl Default for UsgsFeed {
    fn default() -> Self {
        Self {
            url: USGS_QUERY_URL.to_string(),
            lookback_days: DEFAULT_LOOKBACK_DAYS,
            min_magnitude: DEFAULT_MIN_MAGNITUDE,
        }
    }
}

impl UsgsFeed {
    pub fn from_config(feeds: &FeedsConfig) -> Self {
        Self {
            url: feeds.usgs_url.clone(),
            lookback_days: feeds.lookback_days,
            min_magnitude: feeds.min_magnitude,
        }
    }
}

impl FeedApi for UsgsFeed {
    fn source(&self) -> FeedSource {
        FeedSource::Seismic
    }

    fn request(&self, today: NaiveDate) -> FeedRequest {
        let start = today - Duration::days(self.lookback_days);
        FeedRequest {
            url: self.url.clone(),
            query: vec![
                ("format", "geojson".to_string()),
                ("starttime", start.format("%Y-%m-%d").to_string()),
                ("endtime", today.format("%Y-%m-%d").to_string()),
                ("minmagnitude", self.min_magnitude.to_string()),
                ("orderby", "time".to_string()),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usgs_request_window_and_magnitude() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        let request = UsgsFeed::default().request(today);

        assert_eq!(request.url, USGS_QUERY_URL);
        assert_eq!(
            request.query,
            vec![
                ("format", "geojson".to_string()),
                ("starttime", "2024-03-01".to_string()),
                ("endtime", "2024-03-31".to_string()),
                ("minmagnitude", "4.5".to_string()),
                ("orderby", "time".to_string()),
            ]
        );
    }

    #[test]
    fn test_usgs_uses_configured_window() {
        let feeds = FeedsConfig {
            lookback_days: 7,
            min_magnitude: 6.0,
            ..FeedsConfig::default()
        };
        let today = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        let request = UsgsFeed::from_config(&feeds).request(today);
        assert!(request.query.contains(&("starttime", "2023-12-27".to_string())));
        assert!(request.query.contains(&("minmagnitude", "6".to_string())));
    }
}
