//! Public HTTP routes.
//!
//! No authentication anywhere on this surface; everything here is safe to
//! serve to any visitor.

use axum::{
    Json,
    Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use chrono::Utc;
use serde::Serialize;

use tidepool_core::Slug;

use crate::db::{self, SiteCaseStudy, SiteLogo};
use crate::error::AppError;
use crate::state::AppState;

/// Build the complete site router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(ready))
        .route("/site-logo", get(site_logo))
        .route("/case-studies", get(list_case_studies))
        .route("/case-studies/{slug}", get(case_study_by_slug))
}

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

/// `GET /health` - liveness probe, always 200.
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        service: "tidepool-site",
        version: env!("CARGO_PKG_VERSION"),
        commit: option_env!("GIT_COMMIT"),
        timestamp: Utc::now().to_rfc3339(),
        env: state.config().app_env.clone(),
    })
}

/// `GET /health/ready` - readiness probe.
async fn ready(State(state): State<AppState>) -> StatusCode {
    match sqlx::query("SELECT 1").execute(state.pool()).await {
        Ok(_) => StatusCode::OK,
        Err(err) => {
            tracing::warn!(error = %err, "Readiness check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

/// `GET /site-logo` - the logo to display, or `null` when none is active.
///
/// `null` is a successful answer, not an error: a site with no active
/// logo renders its text fallback.
async fn site_logo(State(state): State<AppState>) -> Result<Json<Option<SiteLogo>>, AppError> {
    let logo = db::current_logo(state.pool()).await?;
    Ok(Json(logo))
}

/// `GET /case-studies` - published case studies, newest first.
async fn list_case_studies(
    State(state): State<AppState>,
) -> Result<Json<Vec<SiteCaseStudy>>, AppError> {
    let case_studies = db::published_case_studies(state.pool()).await?;
    Ok(Json(case_studies))
}

/// `GET /case-studies/{slug}` - one published case study.
///
/// A slug that is malformed, missing, or attached to an unpublished draft
/// all answer 404; visitors get no signal that a draft exists.
async fn case_study_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<SiteCaseStudy>, AppError> {
    let Ok(slug) = Slug::parse(&slug) else {
        return Err(AppError::NotFound(format!("case study {slug}")));
    };

    let case_study = db::published_case_study_by_slug(state.pool(), &slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("case study {slug}")))?;

    Ok(Json(case_study))
}
