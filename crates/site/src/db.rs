//! Read-only queries for the public site.
//!
//! The site shares the `tidepool` schema with the admin service but only
//! ever reads from it, and only surfaces what visitors should see:
//! published case studies and the active logo.

use std::time::Duration;

use chrono::{DateTime, Utc};
use secrecy::ExposeSecret;
use serde::Serialize;
use sqlx::PgPool;

use tidepool_core::{CaseStudyId, LogoId, Slug};

use crate::error::AppError;

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    sqlx::postgres::PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

/// Logo as rendered on the public site.
#[derive(Debug, Clone, Serialize)]
pub struct SiteLogo {
    /// Database ID.
    pub id: LogoId,
    /// Display name.
    pub name: String,
    /// Where the image asset is served from.
    pub image_url: String,
    /// Alt text for accessibility.
    pub alt_text: Option<String>,
}

#[derive(Debug, sqlx::FromRow)]
struct SiteLogoRow {
    id: i32,
    name: String,
    image_url: String,
    alt_text: Option<String>,
}

impl From<SiteLogoRow> for SiteLogo {
    fn from(row: SiteLogoRow) -> Self {
        Self {
            id: LogoId::new(row.id),
            name: row.name,
            image_url: row.image_url,
            alt_text: row.alt_text,
        }
    }
}

/// Case study as rendered on the public site.
#[derive(Debug, Clone, Serialize)]
pub struct SiteCaseStudy {
    /// Database ID.
    pub id: CaseStudyId,
    /// URL slug.
    pub slug: Slug,
    /// Headline.
    pub title: String,
    /// Short teaser shown in listings.
    pub summary: String,
    /// Full body (markdown).
    pub body: String,
    /// Publication timestamp shown to visitors.
    pub created_at: DateTime<Utc>,
    /// Last-edited timestamp.
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, sqlx::FromRow)]
struct SiteCaseStudyRow {
    id: i32,
    slug: String,
    title: String,
    summary: String,
    body: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<SiteCaseStudyRow> for SiteCaseStudy {
    type Error = AppError;

    fn try_from(row: SiteCaseStudyRow) -> Result<Self, Self::Error> {
        let slug = Slug::parse(&row.slug)
            .map_err(|e| AppError::DataCorruption(format!("invalid slug in database: {e}")))?;

        Ok(Self {
            id: CaseStudyId::new(row.id),
            slug,
            title: row.title,
            summary: row.summary,
            body: row.body,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

const CASE_STUDY_COLUMNS: &str = "id, slug, title, summary, body, created_at, updated_at";

/// Get the logo the site should currently display, if any.
///
/// The most recently created active row wins.
///
/// # Errors
///
/// Returns `AppError::Database` if the query fails.
pub async fn current_logo(pool: &PgPool) -> Result<Option<SiteLogo>, AppError> {
    let row: Option<SiteLogoRow> = sqlx::query_as(
        "SELECT id, name, image_url, alt_text FROM tidepool.logo \
         WHERE active = TRUE ORDER BY created_at DESC, id DESC LIMIT 1",
    )
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Into::into))
}

/// List published case studies, newest first.
///
/// # Errors
///
/// Returns `AppError::Database` if the query fails.
/// Returns `AppError::DataCorruption` if a stored slug is invalid.
pub async fn published_case_studies(pool: &PgPool) -> Result<Vec<SiteCaseStudy>, AppError> {
    let rows: Vec<SiteCaseStudyRow> = sqlx::query_as(&format!(
        "SELECT {CASE_STUDY_COLUMNS} FROM tidepool.case_study \
         WHERE published = TRUE ORDER BY created_at DESC, id DESC"
    ))
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(TryInto::try_into).collect()
}

/// Get a published case study by slug.
///
/// Unpublished case studies are invisible here, so a draft and a missing
/// slug are indistinguishable to visitors.
///
/// # Errors
///
/// Returns `AppError::Database` if the query fails.
/// Returns `AppError::DataCorruption` if the stored slug is invalid.
pub async fn published_case_study_by_slug(
    pool: &PgPool,
    slug: &Slug,
) -> Result<Option<SiteCaseStudy>, AppError> {
    let row: Option<SiteCaseStudyRow> = sqlx::query_as(&format!(
        "SELECT {CASE_STUDY_COLUMNS} FROM tidepool.case_study \
         WHERE slug = $1 AND published = TRUE"
    ))
    .bind(slug.as_str())
    .fetch_optional(pool)
    .await?;

    row.map(TryInto::try_into).transpose()
}
