//! External identity provider client.
//!
//! The admin service holds no credentials of its own: at login the browser
//! presents a session token minted by the identity provider, and this
//! client asks the provider to verify it. The provider's answer is only an
//! assertion of who the caller is; the role comes from the local
//! `admin_user` table.

use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::instrument;

use tidepool_core::{Email, EmailError};

use crate::config::IdentityConfig;

/// Errors that can occur when verifying a token with the provider.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider rejected the token.
    #[error("token rejected by identity provider")]
    Rejected,

    /// The provider returned an unexpected status.
    #[error("identity provider returned status {0}")]
    Provider(u16),

    /// Failed to parse the provider's response.
    #[error("parse error: {0}")]
    Parse(String),

    /// The asserted email is not structurally valid.
    #[error("invalid email in assertion: {0}")]
    InvalidEmail(#[from] EmailError),
}

/// Who the provider says the caller is.
#[derive(Debug, Clone)]
pub struct IdentityAssertion {
    /// Verified email address.
    pub email: Email,
    /// Display name, if the provider has one.
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
struct VerifyRequest<'a> {
    token: &'a str,
}

#[derive(Debug, Deserialize)]
struct VerifyResponse {
    email: String,
    #[serde(default)]
    name: Option<String>,
}

/// Client for the external identity provider's verify endpoint.
#[derive(Clone)]
pub struct IdentityClient {
    inner: Arc<IdentityClientInner>,
}

struct IdentityClientInner {
    client: reqwest::Client,
    issuer_url: String,
}

impl IdentityClient {
    /// Create a new identity client.
    ///
    /// # Panics
    ///
    /// Panics if the API key contains invalid header characters.
    #[must_use]
    pub fn new(config: &IdentityConfig) -> Self {
        let mut headers = HeaderMap::new();
        let bearer = format!("Bearer {}", config.api_key.expose_secret());
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&bearer).expect("Invalid API key for header"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            inner: Arc::new(IdentityClientInner {
                client,
                issuer_url: config.issuer_url.clone(),
            }),
        }
    }

    /// Verify a session token with the provider.
    ///
    /// # Errors
    ///
    /// Returns `IdentityError::Rejected` if the provider does not recognize
    /// the token, and other variants for transport/parse failures.
    #[instrument(skip(self, token))]
    pub async fn verify(&self, token: &str) -> Result<IdentityAssertion, IdentityError> {
        let url = format!("{}/v1/sessions/verify", self.inner.issuer_url);

        let response = self
            .inner
            .client
            .post(&url)
            .json(&VerifyRequest { token })
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED
            || status == reqwest::StatusCode::NOT_FOUND
        {
            return Err(IdentityError::Rejected);
        }
        if !status.is_success() {
            return Err(IdentityError::Provider(status.as_u16()));
        }

        let body = response.text().await?;
        let parsed: VerifyResponse = serde_json::from_str(&body)
            .map_err(|e| IdentityError::Parse(format!("Failed to parse response: {e}")))?;

        Ok(IdentityAssertion {
            email: Email::parse(&parsed.email)?,
            name: parsed.name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_response_parsing() {
        let json = r#"{"email": "editor@example.com", "name": "Editor"}"#;
        let parsed: VerifyResponse = serde_json::from_str(json).expect("deserialize");
        assert_eq!(parsed.email, "editor@example.com");
        assert_eq!(parsed.name.as_deref(), Some("Editor"));
    }

    #[test]
    fn test_verify_response_name_optional() {
        let json = r#"{"email": "editor@example.com"}"#;
        let parsed: VerifyResponse = serde_json::from_str(json).expect("deserialize");
        assert!(parsed.name.is_none());
    }

    #[test]
    fn test_identity_client_is_clone_send_sync() {
        fn assert_clone<T: Clone>() {}
        fn assert_send_sync<T: Send + Sync>() {}
        assert_clone::<IdentityClient>();
        assert_send_sync::<IdentityClient>();
    }
}
