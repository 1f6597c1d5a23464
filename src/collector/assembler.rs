// Metric family assembly: one family per exported metric, one row per collected container.

use super::labels;
use crate::models::{
    CollectorResult, DerivedMetrics, MetricFamily, MetricKind, MetricRow, MetricValue,
};

struct FamilySpec {
    suffix: &'static str,
    help: &'static str,
    kind: MetricKind,
    value: fn(&DerivedMetrics) -> MetricValue,
}

const FAMILIES: [FamilySpec; 8] = [
    FamilySpec {
        suffix: "mem_limit",
        help: "Container memory limit in bytes",
        kind: MetricKind::Gauge,
        value: |m| MetricValue::Integer(m.mem_limit),
    },
    FamilySpec {
        suffix: "mem_used",
        help: "Container memory usage in bytes",
        kind: MetricKind::Gauge,
        value: |m| MetricValue::Integer(m.mem_used),
    },
    FamilySpec {
        suffix: "mem_usage",
        help: "Container memory usage as a ratio of its limit (0-1)",
        kind: MetricKind::Gauge,
        value: |m| MetricValue::Float(m.mem_usage_ratio),
    },
    FamilySpec {
        suffix: "cpu_percent",
        help: "Container CPU usage percent across all cores (0 to cores*100)",
        kind: MetricKind::Gauge,
        value: |m| MetricValue::Float(m.cpu_percent),
    },
    FamilySpec {
        suffix: "network_rx_bytes",
        help: "Bytes received across all container network interfaces",
        kind: MetricKind::Counter,
        value: |m| MetricValue::Integer(m.rx_bytes),
    },
    FamilySpec {
        suffix: "network_tx_bytes",
        help: "Bytes transmitted across all container network interfaces",
        kind: MetricKind::Counter,
        value: |m| MetricValue::Integer(m.tx_bytes),
    },
    FamilySpec {
        suffix: "blkio_read_bytes",
        help: "Bytes read from block devices by the container",
        kind: MetricKind::Counter,
        value: |m| MetricValue::Integer(m.blk_read),
    },
    FamilySpec {
        suffix: "blkio_write_bytes",
        help: "Bytes written to block devices by the container",
        kind: MetricKind::Counter,
        value: |m| MetricValue::Integer(m.blk_write),
    },
];

/// Build every family over `results`, labelled by `schema`. Results without
/// metrics are skipped. Rows keep the order of `results`.
pub fn assemble(
    schema: &[String],
    results: &[CollectorResult],
    namespace: &str,
) -> Vec<MetricFamily> {
    let rows: Vec<(Vec<String>, &DerivedMetrics)> = results
        .iter()
        .filter_map(|r| {
            r.metrics
                .as_ref()
                .map(|m| (labels::project(&r.labels, schema), m))
        })
        .collect();

    FAMILIES
        .iter()
        .map(|spec| MetricFamily {
            name: format!("{namespace}_{}", spec.suffix),
            help: spec.help.to_string(),
            kind: spec.kind,
            label_names: schema.to_vec(),
            rows: rows
                .iter()
                .map(|(values, m)| MetricRow {
                    label_values: values.clone(),
                    value: (spec.value)(*m),
                })
                .collect(),
        })
        .collect()
}
