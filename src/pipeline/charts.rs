//! Fixed-bin histograms for the magnitude and wildfire trend charts.

use crate::constants::HISTOGRAM_BINS;
use crate::pipeline::normalize::{features, first_geometry, parse_eonet_time};
use crate::types::RawFeedData;
use chrono::DateTime;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
    pub label: String,
    /// Bar height relative to the tallest bin, 0-100
    pub height_pct: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Histogram {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub total: usize,
    pub bins: Vec<HistogramBin>,
}

impl Histogram {
    /// Bin `values` into `nbins` equal-width bins over `[min, max]`.
    ///
    /// The maximum value lands in the last bin. A single distinct value gives one
    /// bin; no finite values gives `None`.
    pub fn from_values<F>(
        title: &'static str,
        x_label: &'static str,
        y_label: &'static str,
        values: &[f64],
        nbins: usize,
        label: F,
    ) -> Option<Self>
    where
        F: Fn(f64, f64) -> String,
    {
        let values: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if values.is_empty() || nbins == 0 {
            return None;
        }
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let nbins = if max > min { nbins } else { 1 };
        let width = if max > min { (max - min) / nbins as f64 } else { 0.0 };

        let mut counts = vec![0usize; nbins];
        for v in &values {
            let idx = if width > 0.0 {
                (((v - min) / width).floor() as usize).min(nbins - 1)
            } else {
                0
            };
            counts[idx] += 1;
        }

        let tallest = counts.iter().copied().max().unwrap_or(0).max(1);
        let bins = counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| {
                let start = min + width * i as f64;
                let end = if i + 1 == nbins { max } else { start + width };
                HistogramBin {
                    start,
                    end,
                    count,
                    label: label(start, end),
                    height_pct: ((count * 100) / tallest) as u32,
                }
            })
            .collect();

        Some(Self {
            title,
            x_label,
            y_label,
            total: values.len(),
            bins,
        })
    }

    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }
}

/// Magnitudes of every seismic feature that has one
pub fn magnitude_histogram(seismic: Option<&RawFeedData>) -> Option<Histogram> {
    let magnitudes: Vec<f64> = features(seismic?)
        .iter()
        .filter_map(|f| f["properties"]["mag"].as_f64())
        .collect();

    Histogram::from_values(
        "Distribution of Earthquake Magnitudes",
        "Magnitude",
        "Count of Earthquakes",
        &magnitudes,
        HISTOGRAM_BINS,
        |start, end| format!("{:.2} - {:.2}", start, end),
    )
}

/// First-geometry dates of the wildfire events kept by the normalizer
pub fn wildfire_histogram(wildfire_events: &[RawFeedData]) -> Option<Histogram> {
    let timestamps: Vec<f64> = wildfire_events
        .iter()
        .filter_map(|event| first_geometry(event)?["date"].as_str())
        .filter_map(parse_eonet_time)
        .map(|t| t.timestamp() as f64)
        .collect();

    Histogram::from_values(
        "Distribution of Wildfires Over Time",
        "Date of Wildfire",
        "Count of Wildfires",
        &timestamps,
        HISTOGRAM_BINS,
        |start, _end| {
            DateTime::from_timestamp(start as i64, 0)
                .map(|t| t.format("%Y-%m-%d").to_string())
                .unwrap_or_default()
        },
    )
}
