// Map raw Docker API models into descriptors and stats samples.

use crate::error::StatsError;
use crate::models::{
    BlkioEntry, BlkioOp, ContainerDescriptor, CpuSample, InterfaceSample, MemorySample,
    RawStatsSample,
};
use bollard::models::{ContainerStatsResponse, ContainerSummary};

/// `None` for summaries without an id or without any name; the daemon never
/// reports those for running containers, but the API models allow it.
pub(crate) fn descriptor_from_summary(c: ContainerSummary) -> Option<ContainerDescriptor> {
    let id = c.id.filter(|id| !id.is_empty())?;
    let names = c.names.unwrap_or_default();
    if names.is_empty() {
        return None;
    }
    Some(ContainerDescriptor {
        id,
        names,
        image: c.image.unwrap_or_default(),
        labels: c.labels.unwrap_or_default().into_iter().collect(),
    })
}

/// Convert one stats response. CPU (current and previous) and memory sections
/// are mandatory; networks and block I/O default to empty.
pub(crate) fn sample_from_response(
    id: &str,
    s: &ContainerStatsResponse,
) -> Result<RawStatsSample, StatsError> {
    let missing = |field: &'static str| StatsError::Parse {
        id: id.to_string(),
        field,
    };

    let cpu_stats = s.cpu_stats.as_ref().ok_or_else(|| missing("cpu_stats"))?;
    let precpu_stats = s
        .precpu_stats
        .as_ref()
        .ok_or_else(|| missing("precpu_stats"))?;
    let cpu_usage = cpu_stats
        .cpu_usage
        .as_ref()
        .ok_or_else(|| missing("cpu_stats.cpu_usage"))?;
    let precpu_usage = precpu_stats
        .cpu_usage
        .as_ref()
        .ok_or_else(|| missing("precpu_stats.cpu_usage"))?;

    // cgroup v2 hosts leave percpu_usage empty; online_cpus is set on both.
    let online_cpus = cpu_stats
        .online_cpus
        .map(u64::from)
        .filter(|n| *n > 0)
        .unwrap_or_else(|| {
            cpu_usage
                .percpu_usage
                .as_ref()
                .map_or(0, |p| p.len() as u64)
        });

    let memory_stats = s
        .memory_stats
        .as_ref()
        .ok_or_else(|| missing("memory_stats"))?;
    let memory = MemorySample {
        limit: memory_stats
            .limit
            .ok_or_else(|| missing("memory_stats.limit"))?,
        usage: memory_stats
            .usage
            .ok_or_else(|| missing("memory_stats.usage"))?,
    };

    // HashMap iteration order is random; sort so samples compare equal across reads.
    let mut networks: Vec<InterfaceSample> = s
        .networks
        .as_ref()
        .map(|n| {
            n.iter()
                .map(|(name, v)| InterfaceSample {
                    name: name.clone(),
                    rx_bytes: v.rx_bytes.unwrap_or(0),
                    tx_bytes: v.tx_bytes.unwrap_or(0),
                })
                .collect()
        })
        .unwrap_or_default();
    networks.sort_by(|a, b| a.name.cmp(&b.name));

    let blkio = s
        .blkio_stats
        .as_ref()
        .and_then(|b| b.io_service_bytes_recursive.as_ref())
        .map(|entries| {
            entries
                .iter()
                .map(|e| BlkioEntry {
                    op: BlkioOp::from_tag(e.op.as_deref().unwrap_or("")),
                    value: e.value.unwrap_or(0),
                })
                .collect()
        })
        .unwrap_or_default();

    Ok(RawStatsSample {
        memory,
        cpu: CpuSample {
            total_usage: cpu_usage.total_usage.unwrap_or(0),
            system_usage: cpu_stats.system_cpu_usage.unwrap_or(0),
            prev_total_usage: precpu_usage.total_usage.unwrap_or(0),
            prev_system_usage: precpu_stats.system_cpu_usage.unwrap_or(0),
            online_cpus,
        },
        networks,
        blkio,
    })
}
