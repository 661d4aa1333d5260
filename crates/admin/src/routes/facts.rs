//! Routes for the fact review queue.

use axum::{
    Json,
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::{Value, json};

use tidepool_core::{CaseStudyId, FactId, FactStatus};

use crate::auth::Access;
use crate::db::{self, FactRepository};
use crate::error::AppError;
use crate::middleware::auth::MaybeAdmin;
use crate::models::Fact;
use crate::state::AppState;

/// Query parameters for listing facts.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Filter by review status (`pending` or `approved`).
    #[serde(default)]
    status: Option<String>,
}

/// Request body for recording a fact.
#[derive(Debug, Deserialize)]
pub struct CreateFactRequest {
    /// Case study the claim came from, if any.
    #[serde(default)]
    case_study_id: Option<i32>,
    /// The claim text.
    claim: String,
}

/// `GET /api/facts` - list facts, optionally filtered by status.
pub async fn list(
    MaybeAdmin(identity): MaybeAdmin,
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Fact>>, AppError> {
    state.gate().authorize(identity.as_ref(), Access::Read)?;

    let status = query
        .status
        .as_deref()
        .map(str::parse::<FactStatus>)
        .transpose()
        .map_err(|e| AppError::BadRequest(format!("invalid status filter: {e}")))?;

    let facts = FactRepository::new(state.pool()).list(status).await?;
    Ok(Json(facts))
}

/// `POST /api/facts` - record a new pending fact.
pub async fn create(
    MaybeAdmin(identity): MaybeAdmin,
    State(state): State<AppState>,
    Json(request): Json<CreateFactRequest>,
) -> Result<(StatusCode, Json<Fact>), AppError> {
    state.gate().authorize(identity.as_ref(), Access::Write)?;

    let claim = request.claim.trim();
    if claim.is_empty() {
        return Err(AppError::BadRequest("claim must not be empty".to_string()));
    }

    let case_study_id = request.case_study_id.map(CaseStudyId::new);
    if let Some(id) = case_study_id
        && !db::exists::<crate::models::CaseStudy>(state.pool(), id.as_i32()).await?
    {
        return Err(AppError::BadRequest(format!(
            "case study {id} does not exist"
        )));
    }

    let fact = FactRepository::new(state.pool())
        .create(case_study_id, claim)
        .await?;

    Ok((StatusCode::CREATED, Json(fact)))
}

/// `DELETE /api/facts/{id}` - delete a fact.
pub async fn delete(
    MaybeAdmin(identity): MaybeAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    state.gate().authorize(identity.as_ref(), Access::Write)?;

    FactRepository::new(state.pool())
        .delete(FactId::new(id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// `POST /api/ai/facts/approve` - approval stub.
///
/// Frontend contract: always reports success without touching the
/// database, whatever the body says (the raw bytes are never parsed, so
/// a missing content type or malformed JSON cannot turn this into an
/// error). Real approval is tracked separately; keep this response shape
/// until the frontend stops depending on it.
pub async fn approve(
    MaybeAdmin(identity): MaybeAdmin,
    State(state): State<AppState>,
    _body: Bytes,
) -> Result<Json<Value>, AppError> {
    state.gate().authorize(identity.as_ref(), Access::Write)?;

    Ok(Json(json!({
        "approved": true,
        "message": "Fact approved successfully"
    })))
}
