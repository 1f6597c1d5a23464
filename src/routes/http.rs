// GET handlers: version, metrics (text exposition), api/metrics (JSON)

use axum::{
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};

use prometheus::TEXT_FORMAT;

use super::AppState;
use crate::collector::MetricsSource;
use crate::exposition;
use crate::version::{NAME, VERSION};

/// GET /version — returns service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

/// GET /metrics — runs one scrape and renders it in the Prometheus text format.
pub(super) async fn metrics_handler<S: MetricsSource>(
    State(state): State<AppState<S>>,
) -> impl IntoResponse {
    let families = state.source.scrape().await;
    match exposition::render_text(&families) {
        Ok(body) => {
            (StatusCode::OK, [(header::CONTENT_TYPE, TEXT_FORMAT)], body).into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, operation = "render_text", "metrics encoding failed");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

/// GET /api/metrics — the same scrape as JSON, rows in collection order.
pub(super) async fn api_metrics_handler<S: MetricsSource>(
    State(state): State<AppState<S>>,
) -> impl IntoResponse {
    axum::Json(state.source.scrape().await)
}
