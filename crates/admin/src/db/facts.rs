//! Fact repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use tidepool_core::{CaseStudyId, FactId, FactStatus};

use super::{RepositoryError, Resource};
use crate::models::Fact;

/// Internal row type for fact queries.
#[derive(Debug, sqlx::FromRow)]
struct FactRow {
    id: i32,
    case_study_id: Option<i32>,
    claim: String,
    status: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<FactRow> for Fact {
    type Error = RepositoryError;

    fn try_from(row: FactRow) -> Result<Self, Self::Error> {
        let status: FactStatus = row.status.parse().map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid fact status in database: {e}"))
        })?;

        Ok(Self {
            id: FactId::new(row.id),
            case_study_id: row.case_study_id.map(CaseStudyId::new),
            claim: row.claim,
            status,
            created_at: row.created_at,
        })
    }
}

impl Resource for Fact {
    const TABLE: &'static str = "tidepool.fact";
}

const FACT_COLUMNS: &str = "id, case_study_id, claim, status, created_at";

/// Repository for fact database operations.
pub struct FactRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> FactRepository<'a> {
    /// Create a new fact repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List facts, newest first, optionally filtered by status.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored status is invalid.
    pub async fn list(&self, status: Option<FactStatus>) -> Result<Vec<Fact>, RepositoryError> {
        let rows: Vec<FactRow> = if let Some(status) = status {
            sqlx::query_as(&format!(
                "SELECT {FACT_COLUMNS} FROM tidepool.fact \
                 WHERE status = $1 ORDER BY created_at DESC, id DESC"
            ))
            .bind(status.as_str())
            .fetch_all(self.pool)
            .await?
        } else {
            sqlx::query_as(&format!(
                "SELECT {FACT_COLUMNS} FROM tidepool.fact ORDER BY created_at DESC, id DESC"
            ))
            .fetch_all(self.pool)
            .await?
        };

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Get a fact by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored status is invalid.
    pub async fn get(&self, id: FactId) -> Result<Option<Fact>, RepositoryError> {
        let row: Option<FactRow> =
            sqlx::query_as(&format!("SELECT {FACT_COLUMNS} FROM tidepool.fact WHERE id = $1"))
                .bind(id.as_i32())
                .fetch_optional(self.pool)
                .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// Record a new pending fact.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn create(
        &self,
        case_study_id: Option<CaseStudyId>,
        claim: &str,
    ) -> Result<Fact, RepositoryError> {
        let row: FactRow = sqlx::query_as(&format!(
            "INSERT INTO tidepool.fact (case_study_id, claim, status) \
             VALUES ($1, $2, 'pending') RETURNING {FACT_COLUMNS}"
        ))
        .bind(case_study_id.map(|id| id.as_i32()))
        .bind(claim)
        .fetch_one(self.pool)
        .await?;

        row.try_into()
    }

    /// Set a fact's review status.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the fact doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn set_status(&self, id: FactId, status: FactStatus) -> Result<Fact, RepositoryError> {
        let row: Option<FactRow> = sqlx::query_as(&format!(
            "UPDATE tidepool.fact SET status = $1 WHERE id = $2 RETURNING {FACT_COLUMNS}"
        ))
        .bind(status.as_str())
        .bind(id.as_i32())
        .fetch_optional(self.pool)
        .await?;

        row.ok_or(RepositoryError::NotFound)?.try_into()
    }

    /// Delete a fact by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the fact doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete(&self, id: FactId) -> Result<(), RepositoryError> {
        super::delete_by_id::<Fact>(self.pool, id.as_i32()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_case_study_id_binds_as_raw_i32() {
        // The insert binds Option<CaseStudyId> as Option<i32>; pin the
        // mapping used for the bind parameter.
        let attached: Option<CaseStudyId> = Some(CaseStudyId::new(7));
        assert_eq!(attached.map(|id| id.as_i32()), Some(7));

        let detached: Option<CaseStudyId> = None;
        assert_eq!(detached.map(|id| id.as_i32()), None);
    }
}
