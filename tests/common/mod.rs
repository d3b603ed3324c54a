#![allow(dead_code)]

use async_trait::async_trait;
use disaster_monitor::app::ports::{HttpClientPort, HttpGetResult};
use disaster_monitor::config::Config;
use disaster_monitor::error::{MonitorError, Result};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Mutex;

pub const USGS_URL: &str = "https://usgs.test/query";
pub const EONET_URL: &str = "https://eonet.test/events";
pub const NEWS_URL: &str = "https://news.test/everything";

/// Canned responses keyed by URL; unknown URLs fail like a refused connection
#[derive(Default)]
pub struct StubHttp {
    responses: HashMap<String, (u16, String)>,
    pub calls: Mutex<Vec<(String, Vec<(String, String)>)>>,
}

impl StubHttp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_json(mut self, url: &str, body: &Value) -> Self {
        self.responses.insert(url.to_string(), (200, body.to_string()));
        self
    }

    pub fn with_status(mut self, url: &str, status: u16) -> Self {
        self.responses.insert(url.to_string(), (status, String::new()));
        self
    }

    pub fn called_urls(&self) -> Vec<String> {
        self.calls.lock().unwrap().iter().map(|(u, _)| u.clone()).collect()
    }

    pub fn query_for(&self, url: &str) -> Vec<(String, String)> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .find(|(u, _)| u == url)
            .map(|(_, q)| q.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl HttpClientPort for StubHttp {
    async fn get(&self, url: &str, query: &[(&str, String)]) -> Result<HttpGetResult> {
        self.calls.lock().unwrap().push((
            url.to_string(),
            query.iter().map(|(k, v)| (k.to_string(), v.clone())).collect(),
        ));
        match self.responses.get(url) {
            Some((status, body)) => Ok(HttpGetResult {
                status: *status,
                bytes: body.clone().into_bytes(),
            }),
            None => Err(MonitorError::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            ))),
        }
    }
}

pub fn test_config() -> Config {
    Config::from_toml_str(&format!(
        "news_api_key = \"test-key\"\n[feeds]\nusgs_url = \"{}\"\neonet_url = \"{}\"\nnews_url = \"{}\"\n",
        USGS_URL, EONET_URL, NEWS_URL
    ))
    .unwrap()
}

pub fn usgs_payload() -> Value {
    json!({
        "type": "FeatureCollection",
        "features": [
            {
                "id": "us7000abcd",
                "properties": { "mag": 6.2, "place": "45 km SSE of Hualien City, Taiwan", "time": 1_709_296_200_000i64 },
                "geometry": { "type": "Point", "coordinates": [121.7, 23.6, 15.0] }
            },
            {
                "id": "us7000abce",
                "properties": { "mag": 4.5, "place": "South Sandwich Islands region", "time": 1_709_200_000_000i64 },
                "geometry": { "type": "Point", "coordinates": [-26.1, -58.4, 35.0] }
            }
        ]
    })
}

pub fn eonet_payload() -> Value {
    json!({
        "title": "EONET Events",
        "events": [
            {
                "id": "EONET_1",
                "title": "Canyon Fire 2",
                "categories": [{ "id": "wildfires", "title": "Wildfires" }],
                "geometry": [{ "date": "2024-03-01T12:30:00Z", "type": "Point", "coordinates": [-117.76, 33.84] }]
            },
            {
                "id": "EONET_2",
                "title": "Tropical Cyclone Neville",
                "categories": [{ "id": "severeStorms", "title": "Severe Storms" }],
                "geometry": [{ "date": "2024-03-02T06:00:00Z", "type": "Point", "coordinates": [105.5, -13.2] }]
            },
            {
                "id": "EONET_3",
                "title": "Etna Volcano, Italy",
                "categories": [{ "id": "volcanoes", "title": "Volcanoes" }],
                "geometry": [{ "date": "2024-02-20T00:00:00Z", "type": "Point", "coordinates": [14.99, 37.75] }]
            }
        ]
    })
}

pub fn news_payload() -> Value {
    json!({
        "status": "ok",
        "articles": [
            { "title": "Strong earthquake shakes Taiwan", "url": "https://news.test/a" },
            { "title": "Central bank holds rates", "url": "https://news.test/b" },
            { "title": "Wildfire forces evacuations", "url": "https://news.test/c" }
        ]
    })
}

pub fn full_stub() -> StubHttp {
    StubHttp::new()
        .with_json(USGS_URL, &usgs_payload())
        .with_json(EONET_URL, &eonet_payload())
        .with_json(NEWS_URL, &news_payload())
}
