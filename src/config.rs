use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub docker: DockerConfig,
    #[serde(default)]
    pub collector: CollectorConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DockerConfig {
    /// Unix socket path. When absent, bollard's defaults apply (DOCKER_HOST or /var/run/docker.sock).
    #[serde(default)]
    pub socket: Option<String>,
    #[serde(default = "default_docker_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for DockerConfig {
    fn default() -> Self {
        Self {
            socket: None,
            timeout_secs: default_docker_timeout_secs(),
        }
    }
}

fn default_docker_timeout_secs() -> u64 {
    120
}

#[derive(Debug, Clone, Deserialize)]
pub struct CollectorConfig {
    /// Max concurrent stats requests per scrape; extra containers wait for a free slot.
    #[serde(default = "default_worker_pool_size")]
    pub worker_pool_size: usize,
    /// Per-container stats deadline. Keep it well under the scrape interval.
    #[serde(default = "default_stats_timeout_ms")]
    pub stats_timeout_ms: u64,
    /// Prefix for every exported metric name.
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            worker_pool_size: default_worker_pool_size(),
            stats_timeout_ms: default_stats_timeout_ms(),
            namespace: default_namespace(),
        }
    }
}

fn default_worker_pool_size() -> usize {
    8
}

fn default_stats_timeout_ms() -> u64 {
    10_000
}

fn default_namespace() -> String {
    "io_container".into()
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(!self.server.host.is_empty(), "server.host must be non-empty");
        if let Some(socket) = &self.docker.socket {
            anyhow::ensure!(!socket.is_empty(), "docker.socket must be non-empty when set");
        }
        anyhow::ensure!(
            self.docker.timeout_secs > 0,
            "docker.timeout_secs must be > 0, got {}",
            self.docker.timeout_secs
        );
        anyhow::ensure!(
            self.collector.worker_pool_size > 0,
            "collector.worker_pool_size must be > 0, got {}",
            self.collector.worker_pool_size
        );
        anyhow::ensure!(
            self.collector.stats_timeout_ms > 0,
            "collector.stats_timeout_ms must be > 0, got {}",
            self.collector.stats_timeout_ms
        );
        anyhow::ensure!(
            is_valid_metric_prefix(&self.collector.namespace),
            "collector.namespace must match [a-zA-Z_][a-zA-Z0-9_]*, got {:?}",
            self.collector.namespace
        );
        Ok(())
    }
}

fn is_valid_metric_prefix(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
