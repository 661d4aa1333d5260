//! CRUD routes for logos.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;

use tidepool_core::LogoId;

use crate::auth::Access;
use crate::db::{LogoFields, LogoRepository};
use crate::error::AppError;
use crate::middleware::auth::MaybeAdmin;
use crate::models::Logo;
use crate::state::AppState;

const MAX_NAME_LENGTH: usize = 120;

/// Request body for creating or replacing a logo.
#[derive(Debug, Deserialize)]
pub struct LogoRequest {
    name: String,
    image_url: String,
    #[serde(default)]
    alt_text: Option<String>,
    #[serde(default)]
    active: bool,
}

impl LogoRequest {
    fn validate(self) -> Result<LogoFields, AppError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::BadRequest("name must not be empty".to_string()));
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(AppError::BadRequest(format!(
                "name must be at most {MAX_NAME_LENGTH} characters"
            )));
        }

        let image_url = url::Url::parse(&self.image_url)
            .map_err(|e| AppError::BadRequest(format!("image_url is not a valid URL: {e}")))?;
        if !matches!(image_url.scheme(), "http" | "https") {
            return Err(AppError::BadRequest(
                "image_url must use http or https".to_string(),
            ));
        }

        Ok(LogoFields {
            name,
            image_url: image_url.to_string(),
            alt_text: self.alt_text.filter(|s| !s.trim().is_empty()),
            active: self.active,
        })
    }
}

/// `GET /api/logos` - list all logos.
pub async fn list(
    MaybeAdmin(identity): MaybeAdmin,
    State(state): State<AppState>,
) -> Result<Json<Vec<Logo>>, AppError> {
    state.gate().authorize(identity.as_ref(), Access::Read)?;

    let logos = LogoRepository::new(state.pool()).list().await?;
    Ok(Json(logos))
}

/// `GET /api/logos/{id}` - fetch one logo.
pub async fn get_one(
    MaybeAdmin(identity): MaybeAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Logo>, AppError> {
    state.gate().authorize(identity.as_ref(), Access::Read)?;

    let logo = LogoRepository::new(state.pool())
        .get(LogoId::new(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("logo {id}")))?;
    Ok(Json(logo))
}

/// `POST /api/logos` - create a logo.
pub async fn create(
    MaybeAdmin(identity): MaybeAdmin,
    State(state): State<AppState>,
    Json(request): Json<LogoRequest>,
) -> Result<(StatusCode, Json<Logo>), AppError> {
    state.gate().authorize(identity.as_ref(), Access::Write)?;

    let fields = request.validate()?;
    let logo = LogoRepository::new(state.pool()).create(&fields).await?;

    tracing::info!(logo_id = %logo.id, "Logo created");

    Ok((StatusCode::CREATED, Json(logo)))
}

/// `PUT /api/logos/{id}` - replace a logo's fields.
pub async fn update(
    MaybeAdmin(identity): MaybeAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<LogoRequest>,
) -> Result<Json<Logo>, AppError> {
    state.gate().authorize(identity.as_ref(), Access::Write)?;

    let fields = request.validate()?;
    let logo = LogoRepository::new(state.pool())
        .update(LogoId::new(id), &fields)
        .await?;
    Ok(Json(logo))
}

/// `DELETE /api/logos/{id}` - delete a logo.
pub async fn delete(
    MaybeAdmin(identity): MaybeAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    state.gate().authorize(identity.as_ref(), Access::Write)?;

    LogoRepository::new(state.pool())
        .delete(LogoId::new(id))
        .await?;

    tracing::info!(logo_id = id, "Logo deleted");

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, image_url: &str) -> LogoRequest {
        LogoRequest {
            name: name.to_string(),
            image_url: image_url.to_string(),
            alt_text: None,
            active: false,
        }
    }

    #[test]
    fn test_validate_accepts_https_url() {
        let fields = request("Acme", "https://cdn.example.com/logo.svg")
            .validate()
            .expect("valid request");
        assert_eq!(fields.name, "Acme");
        assert_eq!(fields.image_url, "https://cdn.example.com/logo.svg");
    }

    #[test]
    fn test_validate_trims_name() {
        let fields = request("  Acme  ", "https://cdn.example.com/logo.svg")
            .validate()
            .expect("valid request");
        assert_eq!(fields.name, "Acme");
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let err = request("   ", "https://cdn.example.com/logo.svg")
            .validate()
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_validate_rejects_long_name() {
        let err = request(&"x".repeat(121), "https://cdn.example.com/logo.svg")
            .validate()
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_validate_rejects_non_http_scheme() {
        let err = request("Acme", "ftp://cdn.example.com/logo.svg")
            .validate()
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));

        let err = request("Acme", "not a url").validate().unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_validate_drops_blank_alt_text() {
        let fields = LogoRequest {
            name: "Acme".to_string(),
            image_url: "https://cdn.example.com/logo.svg".to_string(),
            alt_text: Some("   ".to_string()),
            active: true,
        }
        .validate()
        .expect("valid request");
        assert!(fields.alt_text.is_none());
        assert!(fields.active);
    }
}
