// Per-container results and the metric family snapshots built from them

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Values computed from one raw stats sample.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedMetrics {
    pub mem_limit: u64,
    pub mem_used: u64,
    /// usage / limit, rounded half-up to 4 decimals; 0.0 when the limit is 0.
    pub mem_usage_ratio: f64,
    pub cpu_percent: f64,
    pub rx_bytes: u64,
    pub tx_bytes: u64,
    pub blk_read: u64,
    pub blk_write: u64,
}

/// Outcome of one per-container collector task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectorResult {
    pub id: String,
    pub labels: BTreeMap<String, String>,
    /// `None` when the stats read failed or timed out.
    pub metrics: Option<DerivedMetrics>,
}

impl CollectorResult {
    pub fn is_collected(&self) -> bool {
        self.metrics.is_some()
    }
}

/// Ordered label keys shared by every successful result of a scrape.
pub type LabelSchema = Vec<String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    Gauge,
    Counter,
}

/// A sample value. Byte totals stay integral so they export without going
/// through `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Integer(u64),
    Float(f64),
}

impl MetricValue {
    pub fn as_f64(self) -> f64 {
        match self {
            MetricValue::Integer(v) => v as f64,
            MetricValue::Float(v) => v,
        }
    }

    /// Negative and NaN floats clamp to 0.
    pub fn as_u64(self) -> u64 {
        match self {
            MetricValue::Integer(v) => v,
            MetricValue::Float(v) => v.max(0.0) as u64,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricRow {
    /// In schema order.
    pub label_values: Vec<String>,
    pub value: MetricValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricFamily {
    pub name: String,
    pub help: String,
    pub kind: MetricKind,
    pub label_names: LabelSchema,
    pub rows: Vec<MetricRow>,
}
