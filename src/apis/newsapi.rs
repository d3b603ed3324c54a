use crate::apis::{FeedApi, FeedRequest};
use crate::config::FeedsConfig;
use crate::constants::{DEFAULT_NEWS_LANGUAGE, DEFAULT_NEWS_PAGE_SIZE, DEFAULT_NEWS_QUERY};
use crate::types::FeedSource;
use chrono::NaiveDate;

/// NewsAPI `everything` search for the latest disaster headlines
pub struct NewsApiFeed {
    url: String,
    api_key: String,
    query: String,
    language: String,
    page_size: u32,
}

impl NewsApiFeed {
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: api_key.into(),
            query: DEFAULT_NEWS_QUERY.to_string(),
            language: DEFAULT_NEWS_LANGUAGE.to_string(),
            page_size: DEFAULT_NEWS_PAGE_SIZE,
        }
    }

    pub fn from_config(feeds: &FeedsConfig, api_key: &str) -> Self {
        Self {
            url: feeds.news_url.clone(),
            api_key: api_key.to_string(),
            query: feeds.news_query.clone(),
            language: feeds.news_language.clone(),
            page_size: feeds.news_page_size,
        }
    }
}

impl FeedApi for NewsApiFeed {
    fn source(&self) -> FeedSource {
        FeedSource::News
    }

    fn request(&self, _today: NaiveDate) -> FeedRequest {
        FeedRequest {
            url: self.url.clone(),
            query: vec![
                ("q", self.query.clone()),
                ("apiKey", self.api_key.clone()),
                ("language", self.language.clone()),
                ("sortBy", "publishedAt".to_string()),
                ("pageSize", self.page_size.to_string()),
            ],
        }
    }
}
