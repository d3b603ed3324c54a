/// Feed endpoints and the fixed request parameters sent to them.

pub const USGS_QUERY_URL: &str = "https://earthquake.usgs.gov/fdsnws/event/1/query";
pub const EONET_EVENTS_URL: &str = "https://eonet.gsfc.nasa.gov/api/v3/events";
pub const NEWSAPI_EVERYTHING_URL: &str = "https://newsapi.org/v2/everything";

pub const DEFAULT_LOOKBACK_DAYS: i64 = 30;
pub const DEFAULT_MIN_MAGNITUDE: f64 = 4.5;
pub const DEFAULT_NEWS_QUERY: &str = "earthquake OR wildfire OR storm";
pub const DEFAULT_NEWS_LANGUAGE: &str = "en";
pub const DEFAULT_NEWS_PAGE_SIZE: u32 = 10;
pub const DEFAULT_PORT: u16 = 8501;

/// Keywords a headline must contain (lowercased) to appear in the ticker
pub const NEWS_KEYWORDS: [&str; 3] = ["earthquake", "wildfire", "storm"];

/// EONET category labels (lowercased) that make it into the records table
pub const WILDFIRES_CATEGORY: &str = "wildfires";
pub const STORMS_CATEGORY: &str = "storms";
pub const TABLE_CATEGORIES: [&str; 2] = [WILDFIRES_CATEGORY, STORMS_CATEGORY];

/// Output format shared by every record timestamp
pub const RECORD_TIME_FORMAT: &str = "%Y-%m-%d %H:%M UTC";
/// Timestamp format used by EONET geometry entries
pub const EONET_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

pub const MAP_CENTER_LAT: f64 = 20.0;
pub const MAP_CENTER_LON: f64 = 0.0;
pub const MAP_ZOOM: u8 = 2;

pub const HISTOGRAM_BINS: usize = 30;

pub const NO_NEWS_PLACEHOLDER: &str = "No disaster news available at the moment.";
pub const NO_RECORDS_PLACEHOLDER: &str = "No real-time disasters to display currently.";
