use crate::apis::{FeedApi, FeedRequest};
use crate::config::FeedsConfig;
use crate::constants::EONET_EVENTS_URL;
use crate::types::FeedSource;
use chrono::NaiveDate;

/// NASA EONET v3 open events, requested without parameters
pub struct EonetFeed {
    url: String,
}

impl Default for EonetFeed {
    fn default() -> Self {
        Self {
            url: EONET_EVENTS_URL.to_string(),
        }
    }
}

impl EonetFeed {
    pub fn from_config(feeds: &FeedsConfig) -> Self {
        Self {
            url: feeds.eonet_url.clone(),
        }
    }
}

impl FeedApi for EonetFeed {
    fn source(&self) -> FeedSource {
        FeedSource::MultiHazard
    }

    fn request(&self, _today: NaiveDate) -> FeedRequest {
        FeedRequest {
            url: self.url.clone(),
            query: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eonet_request_has_no_params() {
        let request = EonetFeed::default().request(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(request.url, EONET_EVENTS_URL);
        assert!(request.query.is_empty());
    }
}
