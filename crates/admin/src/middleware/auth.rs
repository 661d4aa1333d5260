//! Session identity extraction for admin route handlers.
//!
//! The extractor only reads the session; the allow/deny decision lives in
//! [`crate::auth::AdminGate`] so it can be faked in tests.

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use crate::models::{CurrentAdmin, session_keys};

/// Extractor that reads the current admin identity from the session, if any.
///
/// Never rejects: handlers pass the result to the gate, which decides
/// whether the request may proceed.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(
///     MaybeAdmin(identity): MaybeAdmin,
///     State(state): State<AppState>,
/// ) -> Result<Json<Logo>, AppError> {
///     let admin = state.gate().authorize(identity.as_ref(), Access::Write)?;
///     // ... exactly one repository call ...
/// }
/// ```
pub struct MaybeAdmin(pub Option<CurrentAdmin>);

impl<S> FromRequestParts<S> for MaybeAdmin
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // The session is set in extensions by SessionManagerLayer
        let identity = match parts.extensions.get::<Session>() {
            Some(session) => session
                .get::<CurrentAdmin>(session_keys::CURRENT_ADMIN)
                .await
                .ok()
                .flatten(),
            None => None,
        };

        Ok(Self(identity))
    }
}

/// Helper to set the current admin in the session (login).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_admin(
    session: &Session,
    admin: &CurrentAdmin,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::CURRENT_ADMIN, admin).await
}

/// Helper to clear the current admin from the session (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_current_admin(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session
        .remove::<CurrentAdmin>(session_keys::CURRENT_ADMIN)
        .await?;
    Ok(())
}
