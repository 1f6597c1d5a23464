// Fan-out of per-container collectors over a bounded pool.
// The JoinSet drain is the completion barrier: every spawned task is joined
// exactly once, whether it returned a result, failed, or panicked.

use super::{StatsAccessor, task};
use crate::models::{CollectorResult, ContainerDescriptor};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Run one collector per descriptor with at most `pool_size` stats reads in
/// flight. Returns only the successful results, in descriptor order.
pub async fn collect_all<A: StatsAccessor>(
    descriptors: Vec<ContainerDescriptor>,
    accessor: Arc<A>,
    pool_size: usize,
    timeout: Duration,
) -> Vec<CollectorResult> {
    let n = descriptors.len();
    let pool = Arc::new(Semaphore::new(pool_size.max(1)));
    let mut tasks = JoinSet::new();

    for (idx, descriptor) in descriptors.into_iter().enumerate() {
        let pool = pool.clone();
        let accessor = accessor.clone();
        tasks.spawn(async move {
            // Err only if the semaphore is closed; it never is. Run unthrottled then.
            let _permit = pool.acquire_owned().await.ok();
            let result = task::collect_container(&descriptor, accessor.as_ref(), timeout).await;
            (idx, result)
        });
    }

    let mut slots: Vec<Option<CollectorResult>> = (0..n).map(|_| None).collect();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((idx, result)) => slots[idx] = Some(result),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    operation = "collect_container",
                    "collector task did not complete; container excluded"
                );
            }
        }
    }

    slots
        .into_iter()
        .flatten()
        .filter(CollectorResult::is_collected)
        .collect()
}
