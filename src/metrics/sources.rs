//! Feed fetch metrics: request outcomes, latency and payload size per source.

use crate::metrics::{phase_metric, MetricDoc, MetricType, PhaseMetrics};

pub struct SourcesMetrics;

impl SourcesMetrics {
    pub fn record_request_success(source_id: &str, duration_secs: f64, payload_bytes: usize) {
        ::metrics::counter!(
            phase_metric!(counter, "sources", "requests_success"),
            "source_id" => source_id.to_string()
        )
        .increment(1);
        ::metrics::histogram!(
            phase_metric!(histogram, "sources", "request_duration_seconds"),
            "source_id" => source_id.to_string()
        )
        .record(duration_secs);
        ::metrics::histogram!(
            phase_metric!(histogram, "sources", "payload_bytes"),
            "source_id" => source_id.to_string()
        )
        .record(payload_bytes as f64);
    }

    /// `error_type` is one of `transport`, `status`, `decode`
    pub fn record_request_error(source_id: &str, error_type: &str) {
        ::metrics::counter!(
            phase_metric!(counter, "sources", "requests_error"),
            "source_id" => source_id.to_string(),
            "error_type" => error_type.to_string()
        )
        .increment(1);
    }
}

impl PhaseMetrics for SourcesMetrics {
    fn register_metrics() {
        use metrics::{counter, histogram};

        let _ = counter!(phase_metric!(counter, "sources", "requests_success"));
        let _ = counter!(phase_metric!(counter, "sources", "requests_error"));
        let _ = histogram!(phase_metric!(histogram, "sources", "request_duration_seconds"));
        let _ = histogram!(phase_metric!(histogram, "sources", "payload_bytes"));
    }

    fn phase_name() -> &'static str {
        "sources"
    }

    fn metrics_documentation() -> Vec<MetricDoc> {
        vec![
            MetricDoc {
                name: phase_metric!(counter, "sources", "requests_success"),
                metric_type: MetricType::Counter,
                help: "Feed requests that returned HTTP 200 with valid JSON",
                labels: vec!["source_id"],
            },
            MetricDoc {
                name: phase_metric!(counter, "sources", "requests_error"),
                metric_type: MetricType::Counter,
                help: "Feed requests that failed in transport, status or decoding",
                labels: vec!["source_id", "error_type"],
            },
            MetricDoc {
                name: phase_metric!(histogram, "sources", "request_duration_seconds"),
                metric_type: MetricType::Histogram,
                help: "Duration of successful feed requests in seconds",
                labels: vec!["source_id"],
            },
            MetricDoc {
                name: phase_metric!(histogram, "sources", "payload_bytes"),
                metric_type: MetricType::Histogram,
                help: "Size of feed payloads in bytes",
                labels: vec!["source_id"],
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sources_metrics_registration() {
        SourcesMetrics::register_metrics();
    }

    #[test]
    fn test_metrics_documentation() {
        let docs = SourcesMetrics::metrics_documentation();
        assert_eq!(docs.len(), 4);
        for doc in docs {
            assert!(doc.name.starts_with("disaster_sources_"));
        }
    }
}
