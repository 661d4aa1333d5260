//! Admin capability gate.
//!
//! The gate is the single authorization decision point: handlers extract
//! the session identity (see [`crate::middleware::auth::MaybeAdmin`]) and
//! ask the gate whether the operation may proceed. It is injected through
//! `AppState` as a trait object so handlers can be exercised with
//! allow-all/deny-all fakes.
//!
//! A denial is terminal for the request: handlers must return before
//! touching a repository.

use tidepool_core::AdminRole;

use crate::models::CurrentAdmin;

/// What kind of operation the caller wants to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Non-mutating operation; any authenticated admin may proceed.
    Read,
    /// State-mutating operation; viewers are denied.
    Write,
}

/// Outcome of a denied gate check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDenial {
    /// No admin identity in the session (401).
    Unauthenticated,
    /// Identity present but the role does not permit the operation (403).
    Forbidden,
}

/// Capability check consulted before every admin operation.
pub trait AdminGate: Send + Sync {
    /// Decide whether `identity` may perform an operation of the given kind.
    ///
    /// # Errors
    ///
    /// Returns `GateDenial::Unauthenticated` when no identity is present and
    /// `GateDenial::Forbidden` when the role does not permit the access kind.
    fn authorize(
        &self,
        identity: Option<&CurrentAdmin>,
        access: Access,
    ) -> Result<CurrentAdmin, GateDenial>;
}

/// Production gate: role-based, viewers are read-only.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoleGate;

impl AdminGate for RoleGate {
    fn authorize(
        &self,
        identity: Option<&CurrentAdmin>,
        access: Access,
    ) -> Result<CurrentAdmin, GateDenial> {
        let admin = identity.ok_or(GateDenial::Unauthenticated)?;

        match access {
            Access::Read => Ok(admin.clone()),
            Access::Write => {
                if admin.role.can_write() {
                    Ok(admin.clone())
                } else {
                    Err(GateDenial::Forbidden)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use tidepool_core::{AdminUserId, Email};

    use super::*;

    /// Gate that denies everything, for short-circuit tests.
    struct DenyAll;

    impl AdminGate for DenyAll {
        fn authorize(
            &self,
            _identity: Option<&CurrentAdmin>,
            _access: Access,
        ) -> Result<CurrentAdmin, GateDenial> {
            Err(GateDenial::Unauthenticated)
        }
    }

    fn admin_with_role(role: AdminRole) -> CurrentAdmin {
        CurrentAdmin {
            id: AdminUserId::new(1),
            email: Email::parse("editor@example.com").expect("valid email"),
            name: "Editor".to_string(),
            role,
        }
    }

    #[test]
    fn test_no_identity_is_unauthenticated() {
        let gate = RoleGate;
        assert_eq!(
            gate.authorize(None, Access::Read).unwrap_err(),
            GateDenial::Unauthenticated
        );
        assert_eq!(
            gate.authorize(None, Access::Write).unwrap_err(),
            GateDenial::Unauthenticated
        );
    }

    #[test]
    fn test_viewer_is_read_only() {
        let gate = RoleGate;
        let viewer = admin_with_role(AdminRole::Viewer);

        assert!(gate.authorize(Some(&viewer), Access::Read).is_ok());
        assert_eq!(
            gate.authorize(Some(&viewer), Access::Write).unwrap_err(),
            GateDenial::Forbidden
        );
    }

    #[test]
    fn test_admin_roles_can_write() {
        let gate = RoleGate;
        for role in [AdminRole::Admin, AdminRole::SuperAdmin] {
            let admin = admin_with_role(role);
            assert!(gate.authorize(Some(&admin), Access::Write).is_ok());
        }
    }

    #[tokio::test]
    async fn test_denied_gate_short_circuits_before_repository() {
        // Models the handler shape: gate first, repository only on Allowed.
        // The spy closure stands in for the repository mutation.
        use std::sync::atomic::{AtomicUsize, Ordering};

        let gate = DenyAll;
        let repo_calls = AtomicUsize::new(0);
        let admin = admin_with_role(AdminRole::SuperAdmin);

        let result: Result<(), GateDenial> = async {
            gate.authorize(Some(&admin), Access::Write)?;
            repo_calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
        .await;

        assert_eq!(result.unwrap_err(), GateDenial::Unauthenticated);
        assert_eq!(repo_calls.load(Ordering::SeqCst), 0, "repository must not be called");
    }
}
