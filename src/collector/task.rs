// Per-container collector: labels, one stats read, derived metrics.

use super::{StatsAccessor, labels, stats};
use crate::error::StatsError;
use crate::models::{CollectorResult, ContainerDescriptor};
use std::time::Duration;

/// Collect one container. Never fails: a fetch error or timeout yields a
/// result with `metrics: None`, which the scheduler drops.
pub async fn collect_container<A: StatsAccessor>(
    descriptor: &ContainerDescriptor,
    accessor: &A,
    timeout: Duration,
) -> CollectorResult {
    let labels = labels::container_labels(descriptor);
    let name = descriptor.canonical_name();

    let fetched = match tokio::time::timeout(timeout, accessor.fetch_stats(&descriptor.id)).await
    {
        Ok(r) => r,
        Err(_) => Err(StatsError::Timeout {
            id: descriptor.id.clone(),
            timeout_ms: timeout.as_millis() as u64,
        }),
    };

    let metrics = match fetched {
        Ok(sample) => {
            let derived = stats::derive(&sample);
            tracing::debug!(
                container = name,
                cpu_percent = derived.cpu_percent,
                mem_used = derived.mem_used,
                mem_limit = derived.mem_limit,
                mem_usage = derived.mem_usage_ratio,
                rx_bytes = derived.rx_bytes,
                tx_bytes = derived.tx_bytes,
                blk_read = derived.blk_read,
                blk_write = derived.blk_write,
                "container metrics collected"
            );
            Some(derived)
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                container = name,
                operation = "fetch_stats",
                "container stats failed; excluded from this scrape"
            );
            None
        }
    };

    CollectorResult {
        id: descriptor.id.clone(),
        labels,
        metrics,
    }
}
