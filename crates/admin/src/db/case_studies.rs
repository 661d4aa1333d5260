//! Case study repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use tidepool_core::{CaseStudyId, Slug};

use super::{RepositoryError, Resource, map_unique_violation};
use crate::models::CaseStudy;

/// Internal row type for case study queries.
#[derive(Debug, sqlx::FromRow)]
struct CaseStudyRow {
    id: i32,
    slug: String,
    title: String,
    summary: String,
    body: String,
    published: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CaseStudyRow> for CaseStudy {
    type Error = RepositoryError;

    fn try_from(row: CaseStudyRow) -> Result<Self, Self::Error> {
        let slug = Slug::parse(&row.slug).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid slug in database: {e}"))
        })?;

        Ok(Self {
            id: CaseStudyId::new(row.id),
            slug,
            title: row.title,
            summary: row.summary,
            body: row.body,
            published: row.published,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Validated fields for creating or replacing a case study.
#[derive(Debug, Clone)]
pub struct CaseStudyFields {
    /// URL slug, unique across case studies.
    pub slug: Slug,
    /// Headline.
    pub title: String,
    /// Short teaser shown in listings.
    pub summary: String,
    /// Full body (markdown).
    pub body: String,
    /// Whether the case study is live on the public site.
    pub published: bool,
}

impl Resource for CaseStudy {
    const TABLE: &'static str = "tidepool.case_study";
}

const CASE_STUDY_COLUMNS: &str =
    "id, slug, title, summary, body, published, created_at, updated_at";

/// Repository for case study database operations.
pub struct CaseStudyRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CaseStudyRepository<'a> {
    /// Create a new case study repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all case studies, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored slug is invalid.
    pub async fn list(&self) -> Result<Vec<CaseStudy>, RepositoryError> {
        let rows: Vec<CaseStudyRow> = sqlx::query_as(&format!(
            "SELECT {CASE_STUDY_COLUMNS} FROM tidepool.case_study \
             ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Get a case study by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored slug is invalid.
    pub async fn get(&self, id: CaseStudyId) -> Result<Option<CaseStudy>, RepositoryError> {
        let row: Option<CaseStudyRow> = sqlx::query_as(&format!(
            "SELECT {CASE_STUDY_COLUMNS} FROM tidepool.case_study WHERE id = $1"
        ))
        .bind(id.as_i32())
        .fetch_optional(self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// Get a case study by its slug.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored slug is invalid.
    pub async fn get_by_slug(&self, slug: &Slug) -> Result<Option<CaseStudy>, RepositoryError> {
        let row: Option<CaseStudyRow> = sqlx::query_as(&format!(
            "SELECT {CASE_STUDY_COLUMNS} FROM tidepool.case_study WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// Create a new case study.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the slug already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, fields: &CaseStudyFields) -> Result<CaseStudy, RepositoryError> {
        let row: CaseStudyRow = sqlx::query_as(&format!(
            "INSERT INTO tidepool.case_study (slug, title, summary, body, published) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {CASE_STUDY_COLUMNS}"
        ))
        .bind(fields.slug.as_str())
        .bind(&fields.title)
        .bind(&fields.summary)
        .bind(&fields.body)
        .bind(fields.published)
        .fetch_one(self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "slug already exists"))?;

        row.try_into()
    }

    /// Replace a case study's fields.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the case study doesn't exist.
    /// Returns `RepositoryError::Conflict` if the new slug is already used.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        id: CaseStudyId,
        fields: &CaseStudyFields,
    ) -> Result<CaseStudy, RepositoryError> {
        let row: Option<CaseStudyRow> = sqlx::query_as(&format!(
            "UPDATE tidepool.case_study \
             SET slug = $1, title = $2, summary = $3, body = $4, published = $5, \
                 updated_at = NOW() \
             WHERE id = $6 RETURNING {CASE_STUDY_COLUMNS}"
        ))
        .bind(fields.slug.as_str())
        .bind(&fields.title)
        .bind(&fields.summary)
        .bind(&fields.body)
        .bind(fields.published)
        .bind(id.as_i32())
        .fetch_optional(self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "slug already exists"))?;

        row.ok_or(RepositoryError::NotFound)?.try_into()
    }

    /// Delete a case study by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the case study doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete(&self, id: CaseStudyId) -> Result<(), RepositoryError> {
        super::delete_by_id::<CaseStudy>(self.pool, id.as_i32()).await
    }
}
