use crate::apis::{fetch_or_report, EonetFeed, NewsApiFeed, UsgsFeed};
use crate::app::ports::HttpClientPort;
use crate::config::Config;
use crate::dashboard::{Dashboard, FeedSnapshot};
use crate::types::DisasterFilter;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{info, instrument};

/// Use case for one dashboard page load: fetch every feed, then build the page model
pub struct DashboardUseCase {
    http: Arc<dyn HttpClientPort>,
    usgs: UsgsFeed,
    eonet: EonetFeed,
    news: NewsApiFeed,
}

impl DashboardUseCase {
    pub fn new(http: Arc<dyn HttpClientPort>, config: &Config) -> Self {
        Self {
            http,
            usgs: UsgsFeed::from_config(&config.feeds),
            eonet: EonetFeed::from_config(&config.feeds),
            news: NewsApiFeed::from_config(&config.feeds, &config.news_api_key),
        }
    }

    /// Fetch the three feeds one after another. A failed feed is recorded and skipped.
    #[instrument(skip(self))]
    pub async fn collect_feeds(&self, now: DateTime<Utc>) -> FeedSnapshot {
        let today = now.date_naive();
        let http = self.http.as_ref();
        let mut errors = Vec::new();

        let seismic = fetch_or_report(http, &self.usgs, today, &mut errors).await;
        let hazards = fetch_or_report(http, &self.eonet, today, &mut errors).await;
        let news = fetch_or_report(http, &self.news, today, &mut errors).await;

        info!("Collected feeds with {} failed source(s)", errors.len());
        FeedSnapshot {
            seismic,
            hazards,
            news,
            errors,
        }
    }

    pub async fn run(&self, filter: DisasterFilter, now: DateTime<Utc>) -> Dashboard {
        let snapshot = self.collect_feeds(now).await;
        Dashboard::build(snapshot, filter, now)
    }
}
