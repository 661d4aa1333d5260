//! Integration tests for Tidepool.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database and run migrations
//! cargo run -p tidepool-cli -- migrate
//!
//! # Start both servers
//! cargo run -p tidepool-admin
//! cargo run -p tidepool-site
//!
//! # Run integration tests
//! cargo test -p tidepool-integration-tests -- --ignored
//! ```
//!
//! # Environment Variables
//!
//! - `ADMIN_BASE_URL` - Admin server (default: <http://localhost:3001>)
//! - `SITE_BASE_URL` - Site server (default: <http://localhost:3000>)
//!
//! Tests that mutate data clean up after themselves, but assume the admin
//! server is running with an allow-all gate or a pre-seeded session; see
//! the per-file doc comments.

/// Base URL for the admin API (configurable via environment).
#[must_use]
pub fn admin_base_url() -> String {
    std::env::var("ADMIN_BASE_URL").unwrap_or_else(|_| "http://localhost:3001".to_string())
}

/// Base URL for the public site (configurable via environment).
#[must_use]
pub fn site_base_url() -> String {
    std::env::var("SITE_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}
