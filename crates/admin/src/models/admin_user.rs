//! Admin user domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use tidepool_core::{AdminUserId, Email};

// Re-export AdminRole from core for convenience
pub use tidepool_core::AdminRole;

/// An admin user.
///
/// Accounts are provisioned via the CLI; at login the external identity
/// provider asserts who the caller is and the matching row supplies the role.
#[derive(Debug, Clone, Serialize)]
pub struct AdminUser {
    /// Unique admin user ID.
    pub id: AdminUserId,
    /// Admin's email address (matched against the provider assertion).
    pub email: Email,
    /// Admin's display name.
    pub name: String,
    /// Admin's role/permission level.
    pub role: AdminRole,
    /// When the admin was created.
    pub created_at: DateTime<Utc>,
    /// When the admin was last updated.
    pub updated_at: DateTime<Utc>,
}
