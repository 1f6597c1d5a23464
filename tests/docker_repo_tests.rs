// Optional DockerRepo tests when Docker daemon is available

use docker_exporter::collector::{
    CollectorSettings, ContainerLister, ContainerMetricsCollector, MetricsSource,
};
use docker_exporter::config::DockerConfig;
use docker_exporter::docker_repo::DockerRepo;
use std::sync::Arc;

#[tokio::test]
async fn docker_repo_connect_and_list_running() {
    let repo = match DockerRepo::connect(&DockerConfig::default()) {
        Ok(r) => r,
        Err(_) => return, // Skip when Docker is not available (e.g. CI without Docker)
    };
    let Ok(containers) = repo.list_containers().await else {
        return; // Socket present but daemon not answering
    };
    for c in &containers {
        assert!(!c.id.is_empty());
        assert!(!c.canonical_name().starts_with('/'));
    }
}

#[tokio::test]
async fn docker_repo_scrape_produces_eight_families() {
    let repo = match DockerRepo::connect(&DockerConfig::default()) {
        Ok(r) => Arc::new(r),
        Err(_) => return,
    };
    if repo.list_containers().await.is_err() {
        return;
    }
    let collector = ContainerMetricsCollector::new(
        repo,
        CollectorSettings {
            worker_pool_size: 4,
            stats_timeout: std::time::Duration::from_secs(10),
            namespace: "io_container".into(),
        },
    );
    let families = collector.scrape().await;
    assert_eq!(families.len(), 8);
}
