//! Normalization metrics

use crate::metrics::{phase_metric, MetricDoc, MetricType, PhaseMetrics};

pub struct NormalizeMetrics;

impl NormalizeMetrics {
    pub fn record_run(records_emitted: usize, items_skipped: usize) {
        ::metrics::counter!(phase_metric!(counter, "normalize", "runs")).increment(1);
        ::metrics::histogram!(phase_metric!(histogram, "normalize", "records_emitted"))
            .record(records_emitted as f64);
        ::metrics::counter!(phase_metric!(counter, "normalize", "items_skipped"))
            .increment(items_skipped as u64);
    }
}

impl PhaseMetrics for NormalizeMetrics {
    fn register_metrics() {
        use metrics::{counter, histogram};

        let _ = counter!(phase_metric!(counter, "normalize", "runs"));
        let _ = counter!(phase_metric!(counter, "normalize", "items_skipped"));
        let _ = histogram!(phase_metric!(histogram, "normalize", "records_emitted"));
    }

    fn phase_name() -> &'static str {
        "normalize"
    }

    fn metrics_documentation() -> Vec<MetricDoc> {
        vec![
            MetricDoc {
                name: phase_metric!(counter, "normalize", "runs"),
                metric_type: MetricType::Counter,
                help: "Normalization passes (one per page load)",
                labels: vec![],
            },
            MetricDoc {
                name: phase_metric!(counter, "normalize", "items_skipped"),
                metric_type: MetricType::Counter,
                help: "Feed items dropped for missing or malformed fields",
                labels: vec![],
            },
            MetricDoc {
                name: phase_metric!(histogram, "normalize", "records_emitted"),
                metric_type: MetricType::Histogram,
                help: "Unified records produced per pass",
                labels: vec![],
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_metric_names() {
        for doc in NormalizeMetrics::metrics_documentation() {
            assert!(doc.name.starts_with("disaster_normalize_"));
        }
    }
}
