// HTTP routes

mod http;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::collector::MetricsSource;

pub(crate) struct AppState<S> {
    pub(crate) source: Arc<S>,
}

// Manual impl: derive would require S: Clone.
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
        }
    }
}

pub fn app<S: MetricsSource>(source: Arc<S>) -> Router {
    let state = AppState { source };
    Router::new()
        .route("/", get(|| async { "docker-exporter: metrics at /metrics" })) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .route("/metrics", get(http::metrics_handler::<S>)) // GET /metrics
        .route("/api/metrics", get(http::api_metrics_handler::<S>)) // GET /api/metrics
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
