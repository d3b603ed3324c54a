//! Feed fetchers for the three upstream disaster sources.
//!
//! Each fetcher only knows how to describe its request; [`fetch_feed`] does the
//! single GET, the status check and the JSON decode for all of them.

pub mod eonet;
pub mod newsapi;
pub mod usgs;

use crate::app::ports::HttpClientPort;
use crate::error::{MonitorError, Result};
use crate::metrics::SourcesMetrics;
use crate::types::{FeedSource, RawFeedData};
use chrono::NaiveDate;
use serde::Serialize;
use std::time::Instant;
use tracing::{info, instrument, warn};

pub use eonet::EonetFeed;
pub use newsapi::NewsApiFeed;
pub use usgs::UsgsFeed;

/// Endpoint plus query parameters for one feed call
#[derive(Debug, Clone, PartialEq)]
pub struct FeedRequest {
    pub url: String,
    pub query: Vec<(&'static str, String)>,
}

/// Core trait that every feed source implements
pub trait FeedApi: Send + Sync {
    fn source(&self) -> FeedSource;

    /// Describe the request for the given UTC date
    fn request(&self, today: NaiveDate) -> FeedRequest;
}

/// A failed source, reported to the user while the rest of the page still renders
#[derive(Debug, Clone, Serialize)]
pub struct SourceError {
    pub source: FeedSource,
    pub message: String,
}

impl SourceError {
    pub fn from_error(source: FeedSource, err: &MonitorError) -> Self {
        let message = match err {
            MonitorError::Status { .. } => err.to_string(),
            other => format!("Error fetching {}: {}", source.description(), other),
        };
        Self { source, message }
    }
}

/// Issue one GET for `api` and decode the body. Only HTTP 200 counts as success.
#[instrument(skip(http, api), fields(source = %api.source()))]
pub async fn fetch_feed(
    http: &dyn HttpClientPort,
    api: &dyn FeedApi,
    today: NaiveDate,
) -> Result<RawFeedData> {
    let source = api.source();
    let request = api.request(today);
    let started = Instant::now();

    let response = match http.get(&request.url, &request.query).await {
        Ok(resp) => resp,
        Err(e) => {
            SourcesMetrics::record_request_error(source.id(), "transport");
            return Err(e);
        }
    };

    if response.status != 200 {
        SourcesMetrics::record_request_error(source.id(), "status");
        return Err(MonitorError::Status {
            source_name: source.description().to_string(),
            status: response.status,
        });
    }

    let payload: RawFeedData = match serde_json::from_slice(&response.bytes) {
        Ok(v) => v,
        Err(e) => {
            SourcesMetrics::record_request_error(source.id(), "decode");
            return Err(e.into());
        }
    };

    SourcesMetrics::record_request_success(
        source.id(),
        started.elapsed().as_secs_f64(),
        response.bytes.len(),
    );
    info!("Fetched {} ({} bytes)", source.description(), response.bytes.len());
    Ok(payload)
}

/// Fetch a feed, turning any failure into a [`SourceError`] and `None`.
pub async fn fetch_or_report(
    http: &dyn HttpClientPort,
    api: &dyn FeedApi,
    today: NaiveDate,
    errors: &mut Vec<SourceError>,
) -> Option<RawFeedData> {
    match fetch_feed(http, api, today).await {
        Ok(payload) => Some(payload),
        Err(e) => {
            let report = SourceError::from_error(api.source(), &e);
            warn!("{}", report.message);
            errors.push(report);
            None
        }
    }
}
