//! Database operations for the `tidepool` schema.
//!
//! ## Tables
//!
//! - `admin_user` - Admin accounts (identity asserted by the external provider)
//! - `session` - Admin session storage (tower-sessions)
//! - `logo` - Site logos (`active` marks the conventional "current" one)
//! - `case_study` - Case studies published on the marketing site
//! - `fact` - Extracted claims awaiting editorial review
//!
//! # Migrations
//!
//! Migrations are stored in `crates/admin/migrations/` and run via:
//! ```bash
//! cargo run -p tidepool-cli -- migrate
//! ```
//!
//! Queries bind at runtime (`sqlx::query_as` over `FromRow` rows) so the
//! workspace builds without a live database.

pub mod admin_users;
pub mod case_studies;
pub mod facts;
pub mod logos;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use admin_users::AdminUserRepository;
pub use case_studies::{CaseStudyFields, CaseStudyRepository};
pub use facts::FactRepository;
pub use logos::{LogoFields, LogoRepository};

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique slug).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// A managed content resource, tagged with its table name.
///
/// The tag lets identifier-keyed operations that are the same for every
/// resource type (delete, existence check) be written once instead of per
/// repository.
pub trait Resource {
    /// Fully qualified table name, e.g. `tidepool.logo`.
    const TABLE: &'static str;
}

/// Delete a resource row by id.
///
/// # Errors
///
/// Returns `RepositoryError::NotFound` if no row had the given id.
/// Returns `RepositoryError::Database` if the query fails.
pub async fn delete_by_id<R: Resource>(pool: &PgPool, id: i32) -> Result<(), RepositoryError> {
    let sql = format!("DELETE FROM {} WHERE id = $1", R::TABLE);
    let result = sqlx::query(&sql).bind(id).execute(pool).await?;

    if result.rows_affected() == 0 {
        return Err(RepositoryError::NotFound);
    }

    Ok(())
}

/// Check whether a resource row with the given id exists.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the query fails.
pub async fn exists<R: Resource>(pool: &PgPool, id: i32) -> Result<bool, RepositoryError> {
    let sql = format!("SELECT EXISTS(SELECT 1 FROM {} WHERE id = $1)", R::TABLE);
    let present: bool = sqlx::query_scalar(&sql).bind(id).fetch_one(pool).await?;

    Ok(present)
}

/// Map a sqlx error, converting unique violations to `Conflict`.
pub(crate) fn map_unique_violation(err: sqlx::Error, message: &str) -> RepositoryError {
    if let sqlx::Error::Database(ref db_err) = err
        && db_err.is_unique_violation()
    {
        return RepositoryError::Conflict(message.to_owned());
    }
    RepositoryError::Database(err)
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
