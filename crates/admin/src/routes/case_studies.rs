//! CRUD routes for case studies.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;

use tidepool_core::{CaseStudyId, Slug};

use crate::auth::Access;
use crate::db::{CaseStudyFields, CaseStudyRepository};
use crate::error::AppError;
use crate::middleware::auth::MaybeAdmin;
use crate::models::CaseStudy;
use crate::state::AppState;

/// Request body for creating or replacing a case study.
#[derive(Debug, Deserialize)]
pub struct CaseStudyRequest {
    slug: String,
    title: String,
    summary: String,
    body: String,
    #[serde(default)]
    published: bool,
}

impl CaseStudyRequest {
    fn validate(self) -> Result<CaseStudyFields, AppError> {
        let slug = Slug::parse(&self.slug)
            .map_err(|e| AppError::BadRequest(format!("invalid slug: {e}")))?;

        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(AppError::BadRequest("title must not be empty".to_string()));
        }

        Ok(CaseStudyFields {
            slug,
            title,
            summary: self.summary.trim().to_string(),
            body: self.body,
            published: self.published,
        })
    }
}

/// `GET /api/case-studies` - list all case studies.
pub async fn list(
    MaybeAdmin(identity): MaybeAdmin,
    State(state): State<AppState>,
) -> Result<Json<Vec<CaseStudy>>, AppError> {
    state.gate().authorize(identity.as_ref(), Access::Read)?;

    let case_studies = CaseStudyRepository::new(state.pool()).list().await?;
    Ok(Json(case_studies))
}

/// `GET /api/case-studies/{id}` - fetch one case study.
pub async fn get_one(
    MaybeAdmin(identity): MaybeAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<CaseStudy>, AppError> {
    state.gate().authorize(identity.as_ref(), Access::Read)?;

    let case_study = CaseStudyRepository::new(state.pool())
        .get(CaseStudyId::new(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("case study {id}")))?;
    Ok(Json(case_study))
}

/// `POST /api/case-studies` - create a case study.
pub async fn create(
    MaybeAdmin(identity): MaybeAdmin,
    State(state): State<AppState>,
    Json(request): Json<CaseStudyRequest>,
) -> Result<(StatusCode, Json<CaseStudy>), AppError> {
    state.gate().authorize(identity.as_ref(), Access::Write)?;

    let fields = request.validate()?;
    let case_study = CaseStudyRepository::new(state.pool())
        .create(&fields)
        .await?;

    tracing::info!(case_study_id = %case_study.id, slug = %case_study.slug, "Case study created");

    Ok((StatusCode::CREATED, Json(case_study)))
}

/// `PUT /api/case-studies/{id}` - replace a case study's fields.
pub async fn update(
    MaybeAdmin(identity): MaybeAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<CaseStudyRequest>,
) -> Result<Json<CaseStudy>, AppError> {
    state.gate().authorize(identity.as_ref(), Access::Write)?;

    let fields = request.validate()?;
    let case_study = CaseStudyRepository::new(state.pool())
        .update(CaseStudyId::new(id), &fields)
        .await?;
    Ok(Json(case_study))
}

/// `DELETE /api/case-studies/{id}` - delete a case study.
pub async fn delete(
    MaybeAdmin(identity): MaybeAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    state.gate().authorize(identity.as_ref(), Access::Write)?;

    CaseStudyRepository::new(state.pool())
        .delete(CaseStudyId::new(id))
        .await?;

    tracing::info!(case_study_id = id, "Case study deleted");

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(slug: &str, title: &str) -> CaseStudyRequest {
        CaseStudyRequest {
            slug: slug.to_string(),
            title: title.to_string(),
            summary: "A summary".to_string(),
            body: "Body text".to_string(),
            published: false,
        }
    }

    #[test]
    fn test_validate_accepts_well_formed_request() {
        let fields = request("acme-checkout", "Acme checkout")
            .validate()
            .expect("valid request");
        assert_eq!(fields.slug.as_str(), "acme-checkout");
        assert_eq!(fields.title, "Acme checkout");
    }

    #[test]
    fn test_validate_rejects_bad_slug() {
        for slug in ["", "Has Spaces", "-leading", "trailing-", "UPPER"] {
            let err = request(slug, "Title").validate().unwrap_err();
            assert!(matches!(err, AppError::BadRequest(_)), "slug: {slug:?}");
        }
    }

    #[test]
    fn test_validate_rejects_empty_title() {
        let err = request("fine-slug", "   ").validate().unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
