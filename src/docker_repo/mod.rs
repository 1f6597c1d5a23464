// Docker daemon access via bollard: container listing and one-shot stats reads

mod convert;

use crate::collector::{ContainerLister, StatsAccessor};
use crate::config::DockerConfig;
use crate::error::{ListError, StatsError};
use crate::models::{ContainerDescriptor, RawStatsSample};
use bollard::Docker;
use bollard::query_parameters::{ListContainersOptions, StatsOptions};
use futures_util::StreamExt;
use std::collections::HashMap;
use std::time::Duration;

/// Cheap to clone; the underlying client is shared across collector tasks.
#[derive(Clone)]
pub struct DockerRepo {
    docker: Docker,
}

impl DockerRepo {
    pub fn connect(config: &DockerConfig) -> anyhow::Result<Self> {
        let docker = match &config.socket {
            Some(path) => {
                Docker::connect_with_unix(path, config.timeout_secs, bollard::API_DEFAULT_VERSION)?
            }
            None => Docker::connect_with_unix_defaults()?
                .with_timeout(Duration::from_secs(config.timeout_secs)),
        };
        Ok(Self { docker })
    }
}

impl ContainerLister for DockerRepo {
    async fn list_containers(&self) -> Result<Vec<ContainerDescriptor>, ListError> {
        let mut filters = HashMap::new();
        filters.insert("status".to_string(), vec!["running".to_string()]);

        let filter = ListContainersOptions {
            all: false,
            filters: Some(filters),
            ..Default::default()
        };

        let containers = self.docker.list_containers(Some(filter)).await?;
        let listed = containers.len();
        let descriptors: Vec<ContainerDescriptor> = containers
            .into_iter()
            .filter_map(convert::descriptor_from_summary)
            .collect();
        if descriptors.len() < listed {
            tracing::debug!(
                skipped = listed - descriptors.len(),
                operation = "list_containers",
                "skipped containers without id or name"
            );
        }
        Ok(descriptors)
    }
}

impl StatsAccessor for DockerRepo {
    async fn fetch_stats(&self, id: &str) -> Result<RawStatsSample, StatsError> {
        // Non-streaming read: the daemon waits for a second sample so precpu_stats is populated.
        let options = StatsOptions {
            stream: false,
            ..Default::default()
        };
        let mut stream = self.docker.stats(id, Some(options));

        match stream.next().await {
            Some(Ok(s)) => convert::sample_from_response(id, &s),
            Some(Err(e)) => Err(StatsError::Fetch {
                id: id.to_string(),
                source: e,
            }),
            None => Err(StatsError::Empty { id: id.to_string() }),
        }
    }
}
