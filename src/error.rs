use thiserror::Error;

#[derive(Error, Debug)]
pub enum MonitorError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Template rendering failed: {0}")]
    Template(#[from] askama::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("API key is missing! Set NEWS_API_KEY or news_api_key in the config file.")]
    MissingApiKey,

    #[error("Failed to fetch {source_name}. Status code: {status}")]
    Status { source_name: String, status: u16 },

    #[error("Unknown disaster type: {0}")]
    UnknownFilter(String),
}

pub type Result<T> = std::result::Result<T, MonitorError>;
