//! Registers every phase's metrics and flags name conflicts early.

use crate::metrics::{MetricDoc, PhaseMetrics};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, info, warn};

pub fn register_all_metrics() {
    let mut all_metrics = HashMap::new();

    register_phase_metrics::<super::sources::SourcesMetrics>(&mut all_metrics);
    register_phase_metrics::<super::normalize::NormalizeMetrics>(&mut all_metrics);

    info!(
        "Registered {} total metrics across all phases",
        all_metrics.len()
    );
    for (phase, count) in metrics_per_phase(all_metrics.keys().map(String::as_str)) {
        info!("  {} phase: {} metrics", phase, count);
    }
}

/// Count metric names per phase, in phase order
pub fn metrics_per_phase<'a>(names: impl IntoIterator<Item = &'a str>) -> BTreeMap<&'a str, usize> {
    let mut per_phase = BTreeMap::new();
    for name in names {
        *per_phase.entry(extract_phase_from_metric_name(name)).or_insert(0) += 1;
    }
    per_phase
}

fn register_phase_metrics<T: PhaseMetrics>(all_metrics: &mut HashMap<String, MetricDoc>) {
    T::register_metrics();
    let phase_name = T::phase_name();

    for doc in T::metrics_documentation() {
        if all_metrics.contains_key(doc.name) {
            warn!(
                "Metric name conflict detected: '{}' registered again by phase '{}'",
                doc.name, phase_name
            );
        } else {
            debug!("  - {} ({:?}): {}", doc.name, doc.metric_type, doc.help);
            all_metrics.insert(doc.name.to_string(), doc);
        }
    }
}

/// Phase name embedded in a metric name ("disaster_sources_x_total" -> "sources")
pub fn extract_phase_from_metric_name(metric_name: &str) -> &str {
    metric_name
        .strip_prefix("disaster_")
        .and_then(|rest| rest.find('_').map(|i| &rest[..i]))
        .unwrap_or("unknown")
}
