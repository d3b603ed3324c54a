//! Metrics infrastructure for the dashboard pipeline
//!
//! Each phase (feed fetching, normalization) defines its metrics in its own
//! submodule so names stay consistent and conflicts show up at startup.

pub mod normalize;
pub mod registry;
pub mod sources;

pub use normalize::NormalizeMetrics;
pub use sources::SourcesMetrics;

use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::OnceLock;
use tracing::{info, warn};

static HANDLE: OnceLock<Option<PrometheusHandle>> = OnceLock::new();

/// Install the Prometheus recorder and register every phase's metrics.
///
/// Idempotent. Returns a handle for rendering `/metrics`, or `None` when
/// another recorder was already installed.
pub fn init_metrics() -> Option<PrometheusHandle> {
    HANDLE
        .get_or_init(|| {
            match metrics_exporter_prometheus::PrometheusBuilder::new().install_recorder() {
                Ok(handle) => {
                    info!("Prometheus recorder installed");
                    registry::register_all_metrics();
                    Some(handle)
                }
                Err(e) => {
                    warn!("Failed to install Prometheus recorder: {}", e);
                    None
                }
            }
        })
        .clone()
}

/// Trait for phase-specific metrics collections
pub trait PhaseMetrics {
    /// Register all metrics for this phase so they show up before first use
    fn register_metrics();

    fn phase_name() -> &'static str;

    /// Documentation for every metric in this phase
    fn metrics_documentation() -> Vec<MetricDoc>;
}

#[derive(Debug, Clone)]
pub struct MetricDoc {
    pub name: &'static str,
    pub metric_type: MetricType,
    pub help: &'static str,
    #[allow(dead_code)]
    pub labels: Vec<&'static str>,
}

#[derive(Debug, Clone)]
pub enum MetricType {
    Counter,
    Histogram,
}

/// Build a metric name following `disaster_{phase}_{name}[_total]`
macro_rules! phase_metric {
    (counter, $phase:literal, $name:literal) => {
        concat!("disaster_", $phase, "_", $name, "_total")
    };
    (histogram, $phase:literal, $name:literal) => {
        concat!("disaster_", $phase, "_", $name)
    };
}

pub(crate) use phase_metric;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_naming_convention() {
        assert_eq!(
            phase_metric!(counter, "sources", "requests_success"),
            "disaster_sources_requests_success_total"
        );
        assert_eq!(
            phase_metric!(histogram, "normalize", "records_emitted"),
            "disaster_normalize_records_emitted"
        );
    }
}
