//! Login, session inspection, and logout.
//!
//! Login is two steps: the identity provider verifies the browser's token,
//! then the asserted email must match a provisioned `admin_user` row. An
//! identity the provider vouches for but we never provisioned gets 403.

use axum::{Json, extract::State, response::Redirect};
use serde::Deserialize;
use tower_sessions::Session;

use crate::db::AdminUserRepository;
use crate::error::AppError;
use crate::middleware::auth::{MaybeAdmin, clear_current_admin, set_current_admin};
use crate::models::CurrentAdmin;
use crate::services::identity::IdentityError;
use crate::state::AppState;

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Session token minted by the identity provider.
    token: String,
}

/// `POST /auth/session` - exchange a provider token for an admin session.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<LoginRequest>,
) -> Result<Json<CurrentAdmin>, AppError> {
    if request.token.trim().is_empty() {
        return Err(AppError::BadRequest("token must not be empty".to_string()));
    }

    let assertion = state
        .identity()
        .verify(&request.token)
        .await
        .map_err(|err| match err {
            IdentityError::Rejected => {
                AppError::Unauthorized("identity provider rejected the token".to_string())
            }
            other => AppError::Identity(other),
        })?;

    let repo = AdminUserRepository::new(state.pool());
    let admin = repo.get_by_email(&assertion.email).await?.ok_or_else(|| {
        AppError::Forbidden("no admin account provisioned for this identity".to_string())
    })?;

    let current = CurrentAdmin {
        id: admin.id,
        email: admin.email,
        name: admin.name,
        role: admin.role,
    };

    set_current_admin(&session, &current)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to write session: {e}")))?;

    tracing::info!(admin_id = %current.id, "Admin logged in");

    Ok(Json(current))
}

/// `GET /auth/session` - return the current admin identity, if any.
pub async fn current_session(
    MaybeAdmin(identity): MaybeAdmin,
) -> Result<Json<CurrentAdmin>, AppError> {
    identity
        .map(Json)
        .ok_or_else(|| AppError::Unauthorized("not logged in".to_string()))
}

/// `POST /auth/logout` - clear the session and send the browser home.
pub async fn logout(session: Session) -> Result<Redirect, AppError> {
    clear_current_admin(&session)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to clear session: {e}")))?;
    session
        .flush()
        .await
        .map_err(|e| AppError::Internal(format!("Failed to flush session: {e}")))?;

    Ok(Redirect::to("/"))
}
