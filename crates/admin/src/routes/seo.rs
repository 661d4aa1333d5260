//! SEO audit route.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::auth::Access;
use crate::error::AppError;
use crate::middleware::auth::MaybeAdmin;
use crate::services::seo::{self, Finding, SeoInput};
use crate::state::AppState;

/// Audit response.
#[derive(Debug, Serialize)]
pub struct CheckResponse {
    /// All findings; empty means the content passed.
    findings: Vec<Finding>,
}

/// `POST /api/seo/check` - audit content against the editorial checklist.
pub async fn check(
    MaybeAdmin(identity): MaybeAdmin,
    State(state): State<AppState>,
    Json(input): Json<SeoInput>,
) -> Result<Json<CheckResponse>, AppError> {
    state.gate().authorize(identity.as_ref(), Access::Read)?;

    Ok(Json(CheckResponse {
        findings: seo::audit(&input),
    }))
}
