// Container descriptors and raw stats samples as handed over by the daemon seam

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A running container as listed by the daemon. Immutable for the duration of a scrape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerDescriptor {
    pub id: String,
    /// Never empty; the first entry is the canonical name (with a leading `/`).
    pub names: Vec<String>,
    pub image: String,
    /// Sorted by raw key so label normalization collisions resolve the same way every scrape.
    pub labels: BTreeMap<String, String>,
}

impl ContainerDescriptor {
    /// First name with the daemon's leading separator stripped.
    pub fn canonical_name(&self) -> &str {
        self.names
            .first()
            .map(|n| n.strip_prefix('/').unwrap_or(n))
            .unwrap_or(&self.id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MemorySample {
    pub limit: u64,
    pub usage: u64,
}

/// Current and previous CPU counters from a single stats read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CpuSample {
    pub total_usage: u64,
    pub system_usage: u64,
    pub prev_total_usage: u64,
    pub prev_system_usage: u64,
    pub online_cpus: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceSample {
    pub name: String,
    pub rx_bytes: u64,
    pub tx_bytes: u64,
}

/// Block I/O operation kind, parsed once from the daemon's `op` tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlkioOp {
    Read,
    Write,
    Other(String),
}

impl BlkioOp {
    /// Case-insensitive; anything but "read"/"write" is kept verbatim as `Other`.
    pub fn from_tag(tag: &str) -> Self {
        if tag.eq_ignore_ascii_case("read") {
            BlkioOp::Read
        } else if tag.eq_ignore_ascii_case("write") {
            BlkioOp::Write
        } else {
            BlkioOp::Other(tag.to_string())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlkioEntry {
    pub op: BlkioOp,
    pub value: u64,
}

/// One stats read for one container.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawStatsSample {
    pub memory: MemorySample,
    pub cpu: CpuSample,
    pub networks: Vec<InterfaceSample>,
    pub blkio: Vec<BlkioEntry>,
}
