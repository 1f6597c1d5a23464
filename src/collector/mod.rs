// Per-scrape container metrics pipeline:
// list containers -> fan out collectors -> reconcile label schema -> assemble families.

mod assembler;
mod labels;
mod scheduler;
mod stats;
mod task;

pub use assembler::assemble;
pub use labels::{container_labels, normalize_label_key, reconcile_schema};
pub use scheduler::collect_all;
pub use stats::{cpu_percent, derive, mem_usage_ratio, ratio_half_up};
pub use task::collect_container;

use crate::config::CollectorConfig;
use crate::error::{ListError, StatsError};
use crate::models::{ContainerDescriptor, MetricFamily, RawStatsSample};
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Supplies the running containers for a scrape.
pub trait ContainerLister: Send + Sync + 'static {
    fn list_containers(
        &self,
    ) -> impl Future<Output = Result<Vec<ContainerDescriptor>, ListError>> + Send;
}

/// Reads one stats sample for a container id.
pub trait StatsAccessor: Send + Sync + 'static {
    fn fetch_stats(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<RawStatsSample, StatsError>> + Send;
}

/// Anything that can produce the metric families for one scrape.
pub trait MetricsSource: Send + Sync + 'static {
    fn scrape(&self) -> impl Future<Output = Vec<MetricFamily>> + Send;
}

#[derive(Debug, Clone)]
pub struct CollectorSettings {
    pub worker_pool_size: usize,
    pub stats_timeout: Duration,
    pub namespace: String,
}

impl From<&CollectorConfig> for CollectorSettings {
    fn from(c: &CollectorConfig) -> Self {
        Self {
            worker_pool_size: c.worker_pool_size,
            stats_timeout: Duration::from_millis(c.stats_timeout_ms),
            namespace: c.namespace.clone(),
        }
    }
}

/// Collects container metrics from a daemon on every scrape. Holds no state
/// between scrapes besides the daemon handle and settings.
pub struct ContainerMetricsCollector<D> {
    daemon: Arc<D>,
    settings: CollectorSettings,
}

impl<D> ContainerMetricsCollector<D>
where
    D: ContainerLister + StatsAccessor,
{
    pub fn new(daemon: Arc<D>, settings: CollectorSettings) -> Self {
        Self { daemon, settings }
    }

    pub fn settings(&self) -> &CollectorSettings {
        &self.settings
    }
}

impl<D> MetricsSource for ContainerMetricsCollector<D>
where
    D: ContainerLister + StatsAccessor,
{
    async fn scrape(&self) -> Vec<MetricFamily> {
        let start = Instant::now();

        let containers = match self.daemon.list_containers().await {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    operation = "list_containers",
                    "container listing failed; returning empty snapshot"
                );
                return Vec::new();
            }
        };
        let listed = containers.len();

        let results = collect_all(
            containers,
            self.daemon.clone(),
            self.settings.worker_pool_size,
            self.settings.stats_timeout,
        )
        .await;
        let schema = reconcile_schema(&results);
        let families = assemble(&schema, &results, &self.settings.namespace);

        tracing::info!(
            operation = "scrape",
            containers = listed,
            collected = results.len(),
            labels = schema.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "scrape finished"
        );
        families
    }
}
