use crate::constants;
use crate::error::{MonitorError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

pub const DEFAULT_CONFIG_PATH: &str = "monitor.toml";
pub const API_KEY_ENV: &str = "NEWS_API_KEY";
pub const PORT_ENV: &str = "MONITOR_PORT";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub news_api_key: String,
    #[serde(default)]
    pub feeds: FeedsConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FeedsConfig {
    pub usgs_url: String,
    pub eonet_url: String,
    pub news_url: String,
    pub lookback_days: i64,
    pub min_magnitude: f64,
    pub news_query: String,
    pub news_language: String,
    pub news_page_size: u32,
}

impl Default for FeedsConfig {
    fn default() -> Self {
        Self {
            usgs_url: constants::USGS_QUERY_URL.to_string(),
            eonet_url: constants::EONET_EVENTS_URL.to_string(),
            news_url: constants::NEWSAPI_EVERYTHING_URL.to_string(),
            lookback_days: constants::DEFAULT_LOOKBACK_DAYS,
            min_magnitude: constants::DEFAULT_MIN_MAGNITUDE,
            news_query: constants::DEFAULT_NEWS_QUERY.to_string(),
            news_language: constants::DEFAULT_NEWS_LANGUAGE.to_string(),
            news_page_size: constants::DEFAULT_NEWS_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: constants::DEFAULT_PORT,
        }
    }
}

impl Config {
    /// Load configuration from an optional TOML file, then apply environment overrides.
    ///
    /// A missing file is not an error: every field has a default except the news
    /// API key, which must come from the file or `NEWS_API_KEY`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH));

        let mut config = if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| {
                MonitorError::Config(format!(
                    "Failed to read config file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
            info!("Loaded configuration from {}", path.display());
            Self::from_toml_str(&content)?
        } else {
            debug!("No config file at {}, using defaults", path.display());
            Self::from_toml_str("")?
        };

        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Override fields from the environment; `lookup` is injected for tests.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(API_KEY_ENV) {
            if !key.trim().is_empty() {
                self.news_api_key = key;
            }
        }
        if let Some(port) = lookup(PORT_ENV) {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| MonitorError::Config(format!("Invalid {}: '{}'", PORT_ENV, port)))?;
        }
        Ok(())
    }

    /// The news API key is the one credential the dashboard cannot start without.
    pub fn validate(&self) -> Result<()> {
        if self.news_api_key.trim().is_empty() {
            return Err(MonitorError::MissingApiKey);
        }
        if self.feeds.lookback_days < 0 {
            return Err(MonitorError::Config(
                "feeds.lookback_days must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}
