//! Logo repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use tidepool_core::LogoId;

use super::{RepositoryError, Resource};
use crate::models::Logo;

/// Internal row type for logo queries.
#[derive(Debug, sqlx::FromRow)]
struct LogoRow {
    id: i32,
    name: String,
    image_url: String,
    alt_text: Option<String>,
    active: bool,
    created_at: DateTime<Utc>,
}

impl From<LogoRow> for Logo {
    fn from(row: LogoRow) -> Self {
        Self {
            id: LogoId::new(row.id),
            name: row.name,
            image_url: row.image_url,
            alt_text: row.alt_text,
            active: row.active,
            created_at: row.created_at,
        }
    }
}

/// Validated fields for creating or replacing a logo.
#[derive(Debug, Clone)]
pub struct LogoFields {
    /// Internal display name.
    pub name: String,
    /// Where the image asset is served from.
    pub image_url: String,
    /// Alt text for accessibility.
    pub alt_text: Option<String>,
    /// Whether this logo is a candidate for public display.
    pub active: bool,
}

impl Resource for Logo {
    const TABLE: &'static str = "tidepool.logo";
}

const LOGO_COLUMNS: &str = "id, name, image_url, alt_text, active, created_at";

/// Repository for logo database operations.
pub struct LogoRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> LogoRepository<'a> {
    /// Create a new logo repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all logos, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Logo>, RepositoryError> {
        let rows: Vec<LogoRow> = sqlx::query_as(&format!(
            "SELECT {LOGO_COLUMNS} FROM tidepool.logo ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Get a logo by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: LogoId) -> Result<Option<Logo>, RepositoryError> {
        let row: Option<LogoRow> =
            sqlx::query_as(&format!("SELECT {LOGO_COLUMNS} FROM tidepool.logo WHERE id = $1"))
                .bind(id.as_i32())
                .fetch_optional(self.pool)
                .await?;

        Ok(row.map(Into::into))
    }

    /// Get the logo the public site should currently display.
    ///
    /// The most recently created active row wins; if two rows were activated
    /// concurrently this picks the newer one rather than failing.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn current_active(&self) -> Result<Option<Logo>, RepositoryError> {
        let row: Option<LogoRow> = sqlx::query_as(&format!(
            "SELECT {LOGO_COLUMNS} FROM tidepool.logo \
             WHERE active = TRUE ORDER BY created_at DESC, id DESC LIMIT 1"
        ))
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    /// Create a new logo.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn create(&self, fields: &LogoFields) -> Result<Logo, RepositoryError> {
        let row: LogoRow = sqlx::query_as(&format!(
            "INSERT INTO tidepool.logo (name, image_url, alt_text, active) \
             VALUES ($1, $2, $3, $4) RETURNING {LOGO_COLUMNS}"
        ))
        .bind(&fields.name)
        .bind(&fields.image_url)
        .bind(&fields.alt_text)
        .bind(fields.active)
        .fetch_one(self.pool)
        .await?;

        Ok(row.into())
    }

    /// Replace a logo's fields.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the logo doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(&self, id: LogoId, fields: &LogoFields) -> Result<Logo, RepositoryError> {
        let row: Option<LogoRow> = sqlx::query_as(&format!(
            "UPDATE tidepool.logo SET name = $1, image_url = $2, alt_text = $3, active = $4 \
             WHERE id = $5 RETURNING {LOGO_COLUMNS}"
        ))
        .bind(&fields.name)
        .bind(&fields.image_url)
        .bind(&fields.alt_text)
        .bind(fields.active)
        .bind(id.as_i32())
        .fetch_optional(self.pool)
        .await?;

        row.map(Into::into).ok_or(RepositoryError::NotFound)
    }

    /// Delete a logo by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the logo doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete(&self, id: LogoId) -> Result<(), RepositoryError> {
        super::delete_by_id::<Logo>(self.pool, id.as_i32()).await
    }
}
