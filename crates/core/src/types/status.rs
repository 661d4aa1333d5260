//! Role and status enums shared across services.
//!
//! These are stored as `TEXT` columns; repositories convert through
//! `as_str()`/`FromStr` rather than database enum types so migrations
//! stay additive.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an enum from its database representation.
#[derive(thiserror::Error, Debug, Clone)]
#[error("unknown {kind} value: {value}")]
pub struct UnknownVariant {
    /// Which enum failed to parse.
    pub kind: &'static str,
    /// The offending input.
    pub value: String,
}

/// Admin role for authorization.
///
/// Mutating operations require `Admin` or `SuperAdmin`; `Viewer` is
/// read-only and is denied by the gate with 403.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminRole {
    /// Full access, including admin-user management.
    SuperAdmin,
    /// Can manage all content resources.
    Admin,
    /// Read-only access.
    Viewer,
}

impl AdminRole {
    /// Database/string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SuperAdmin => "super_admin",
            Self::Admin => "admin",
            Self::Viewer => "viewer",
        }
    }

    /// Whether this role may mutate content resources.
    #[must_use]
    pub const fn can_write(&self) -> bool {
        matches!(self, Self::SuperAdmin | Self::Admin)
    }
}

impl fmt::Display for AdminRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdminRole {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "super_admin" => Ok(Self::SuperAdmin),
            "admin" => Ok(Self::Admin),
            "viewer" => Ok(Self::Viewer),
            other => Err(UnknownVariant {
                kind: "admin role",
                value: other.to_owned(),
            }),
        }
    }
}

/// Review status of an extracted fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactStatus {
    /// Awaiting editorial review.
    Pending,
    /// Approved for publication.
    Approved,
}

impl FactStatus {
    /// Database/string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
        }
    }
}

impl fmt::Display for FactStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FactStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            other => Err(UnknownVariant {
                kind: "fact status",
                value: other.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_role_roundtrip() {
        for role in [AdminRole::SuperAdmin, AdminRole::Admin, AdminRole::Viewer] {
            let parsed: AdminRole = role.as_str().parse().expect("roundtrip");
            assert_eq!(parsed, role);
        }
    }

    #[test]
    fn test_admin_role_unknown() {
        let err = "root".parse::<AdminRole>().expect_err("should fail");
        assert!(err.to_string().contains("root"));
    }

    #[test]
    fn test_can_write() {
        assert!(AdminRole::SuperAdmin.can_write());
        assert!(AdminRole::Admin.can_write());
        assert!(!AdminRole::Viewer.can_write());
    }

    #[test]
    fn test_fact_status_roundtrip() {
        for status in [FactStatus::Pending, FactStatus::Approved] {
            let parsed: FactStatus = status.as_str().parse().expect("roundtrip");
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&AdminRole::SuperAdmin).expect("serialize");
        assert_eq!(json, "\"super_admin\"");
        let json = serde_json::to_string(&FactStatus::Pending).expect("serialize");
        assert_eq!(json, "\"pending\"");
    }
}
