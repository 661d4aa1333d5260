//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::assistant::AssistantClient;
use crate::auth::{AdminGate, RoleGate};
use crate::config::AdminConfig;
use crate::services::identity::IdentityClient;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    pool: PgPool,
    assistant: AssistantClient,
    identity: IdentityClient,
    gate: Arc<dyn AdminGate>,
}

impl AppState {
    /// Create the application state with the production gate.
    #[must_use]
    pub fn new(config: AdminConfig, pool: PgPool) -> Self {
        let assistant = AssistantClient::new(config.assistant());
        let identity = IdentityClient::new(config.identity());

        Self::with_gate(config, pool, assistant, identity, Arc::new(RoleGate))
    }

    /// Create the application state with an explicit gate (used by tests).
    #[must_use]
    pub fn with_gate(
        config: AdminConfig,
        pool: PgPool,
        assistant: AssistantClient,
        identity: IdentityClient,
        gate: Arc<dyn AdminGate>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                assistant,
                identity,
                gate,
            }),
        }
    }

    /// Get a reference to the admin configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get a reference to the content assistant client.
    #[must_use]
    pub fn assistant(&self) -> &AssistantClient {
        &self.inner.assistant
    }

    /// Get a reference to the identity provider client.
    #[must_use]
    pub fn identity(&self) -> &IdentityClient {
        &self.inner.identity
    }

    /// Get a reference to the admin capability gate.
    #[must_use]
    pub fn gate(&self) -> &dyn AdminGate {
        self.inner.gate.as_ref()
    }
}
