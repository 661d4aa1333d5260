//! Health check endpoints.

use axum::{Json, extract::State, http::StatusCode};
use chrono::Utc;
use serde::Serialize;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    ok: bool,
    service: &'static str,
    version: &'static str,
    commit: Option<&'static str>,
    timestamp: String,
    env: String,
}

/// `GET /health` - liveness probe.
///
/// Always returns 200 regardless of dependency state; readiness is a
/// separate endpoint.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        service: "tidepool-admin",
        version: env!("CARGO_PKG_VERSION"),
        commit: option_env!("GIT_COMMIT"),
        timestamp: Utc::now().to_rfc3339(),
        env: state.config().app_env.clone(),
    })
}

/// `GET /health/ready` - readiness probe.
///
/// Checks that the database answers a trivial query. Returns 503 until it
/// does, so deploys only route traffic to instances that can serve it.
pub async fn ready(State(state): State<AppState>) -> StatusCode {
    match sqlx::query("SELECT 1").execute(state.pool()).await {
        Ok(_) => StatusCode::OK,
        Err(err) => {
            tracing::warn!(error = %err, "Readiness check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
