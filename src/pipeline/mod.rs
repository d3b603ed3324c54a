// Per-page-load processing: normalize feeds, then build map, charts and ticker

pub mod charts;
pub mod map;
pub mod news;
pub mod normalize;

pub use charts::{magnitude_histogram, wildfire_histogram, Histogram, HistogramBin};
pub use map::{build_map, DisasterMap, MapMarker, MarkerColor};
pub use news::{build_ticker, Headline, NewsTicker};
pub use normalize::{normalize_feeds, NormalizedFeeds};
