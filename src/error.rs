// Error types for the daemon seam

use thiserror::Error;

/// Listing running containers failed; the whole scrape is abandoned.
#[derive(Debug, Error)]
pub enum ListError {
    #[error("docker list_containers failed: {0}")]
    Docker(#[from] bollard::errors::Error),
    #[error("container listing unavailable: {0}")]
    Unavailable(String),
}

/// Reading stats for a single container failed; only that container is dropped.
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("stats fetch for {id} failed: {source}")]
    Fetch {
        id: String,
        #[source]
        source: bollard::errors::Error,
    },
    #[error("stats stream for {id} ended without a sample")]
    Empty { id: String },
    #[error("malformed stats for {id}: missing {field}")]
    Parse { id: String, field: &'static str },
    #[error("stats fetch for {id} timed out after {timeout_ms}ms")]
    Timeout { id: String, timeout_ms: u64 },
    #[error("stats unavailable for {id}: {reason}")]
    Unavailable { id: String, reason: String },
}
