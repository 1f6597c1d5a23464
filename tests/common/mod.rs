// Shared test helpers: an in-memory daemon with scripted per-container behaviour

#![allow(dead_code)]

use docker_exporter::collector::{CollectorSettings, ContainerLister, StatsAccessor};
use docker_exporter::error::{ListError, StatsError};
use docker_exporter::models::*;
use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

#[derive(Clone)]
pub enum Reply {
    Sample(RawStatsSample),
    Fail,
    Hang,
}

#[derive(Default)]
pub struct MockDaemon {
    pub containers: Vec<ContainerDescriptor>,
    pub replies: HashMap<String, Reply>,
    pub list_fails: bool,
}

impl MockDaemon {
    pub fn with(mut self, descriptor: ContainerDescriptor, reply: Reply) -> Self {
        self.replies.insert(descriptor.id.clone(), reply);
        self.containers.push(descriptor);
        self
    }
}

impl ContainerLister for MockDaemon {
    async fn list_containers(&self) -> Result<Vec<ContainerDescriptor>, ListError> {
        if self.list_fails {
            return Err(ListError::Unavailable("daemon unreachable".into()));
        }
        Ok(self.containers.clone())
    }
}

impl StatsAccessor for MockDaemon {
    async fn fetch_stats(&self, id: &str) -> Result<RawStatsSample, StatsError> {
        match self.replies.get(id).cloned() {
            Some(Reply::Sample(s)) => Ok(s),
            Some(Reply::Hang) => std::future::pending().await,
            Some(Reply::Fail) | None => Err(StatsError::Unavailable {
                id: id.to_string(),
                reason: "scripted failure".into(),
            }),
        }
    }
}

pub fn descriptor(id: &str, name: &str, labels: &[(&str, &str)]) -> ContainerDescriptor {
    ContainerDescriptor {
        id: id.to_string(),
        names: vec![format!("/{name}")],
        image: format!("registry.local/{name}:1.0"),
        labels: labels
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<BTreeMap<_, _>>(),
    }
}

pub fn sample(seed: u64) -> RawStatsSample {
    RawStatsSample {
        memory: MemorySample {
            limit: 1024 * seed,
            usage: 512 * seed,
        },
        cpu: CpuSample {
            total_usage: 200 * seed,
            system_usage: 1100 * seed,
            prev_total_usage: 100 * seed,
            prev_system_usage: 1000 * seed,
            online_cpus: 2,
        },
        networks: vec![
            InterfaceSample {
                name: "eth0".into(),
                rx_bytes: 100 * seed,
                tx_bytes: 200 * seed,
            },
            InterfaceSample {
                name: "eth1".into(),
                rx_bytes: 1,
                tx_bytes: 2,
            },
        ],
        blkio: vec![
            BlkioEntry {
                op: BlkioOp::Read,
                value: 4096 * seed,
            },
            BlkioEntry {
                op: BlkioOp::Write,
                value: 8192 * seed,
            },
            BlkioEntry {
                op: BlkioOp::Other("Sync".into()),
                value: 7,
            },
        ],
    }
}

pub fn settings(pool: usize) -> CollectorSettings {
    CollectorSettings {
        worker_pool_size: pool,
        stats_timeout: Duration::from_millis(500),
        namespace: "io_container".into(),
    }
}
