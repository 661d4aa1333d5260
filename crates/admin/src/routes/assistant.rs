//! Content assistant route.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::assistant::GenerateTask;
use crate::auth::Access;
use crate::error::AppError;
use crate::middleware::auth::MaybeAdmin;
use crate::state::AppState;

/// Response from a generation task.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    /// The produced text.
    text: String,
}

/// `POST /api/assistant/generate` - run a content generation task.
///
/// Write access: generation costs money and its output lands in drafts, so
/// viewers cannot invoke it.
pub async fn generate(
    MaybeAdmin(identity): MaybeAdmin,
    State(state): State<AppState>,
    Json(task): Json<GenerateTask>,
) -> Result<Json<GenerateResponse>, AppError> {
    state.gate().authorize(identity.as_ref(), Access::Write)?;

    if task.input.trim().is_empty() {
        return Err(AppError::BadRequest("input must not be empty".to_string()));
    }

    let text = state.assistant().generate(&task).await?;
    Ok(Json(GenerateResponse { text }))
}
