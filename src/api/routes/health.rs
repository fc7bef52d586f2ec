//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (ready to serve traffic)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
///
/// Kubernetes liveness probe.
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Kubernetes readiness probe.
/// The artifact store is loaded before the router exists, so a running
/// server with a non-empty feature table is ready.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    if state.artifacts.features().is_empty() {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::OK
    }
}

/// GET /health
///
/// Full health status with artifact details.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let drivers = state.artifacts.features().len();
    let artifacts_ok = drivers > 0;

    Json(HealthResponse {
        status: if artifacts_ok { "healthy" } else { "unhealthy" }.to_string(),
        artifacts: if artifacts_ok { "ok" } else { "empty" }.to_string(),
        drivers,
        feature_columns: state.artifacts.model().feature_count(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_liveness() {
        let status = liveness().await;
        assert_eq!(status, StatusCode::OK);
    }
}
