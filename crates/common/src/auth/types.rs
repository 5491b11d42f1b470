//! OAuth 2.0 types and structures
//!
//! Defines token, response and configuration types for the CRM's OAuth
//! endpoints.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// OAuth 2.0 access and refresh tokens with metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSet {
    /// Bearer token for API authentication
    pub access_token: String,

    /// Refresh token for obtaining new access tokens
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,

    /// Token type as reported by the provider (normally "bearer")
    pub token_type: String,

    /// Access token lifetime in seconds
    pub expires_in: i64,

    /// Absolute expiration timestamp (UTC), derived from `expires_in`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,

    /// Granted scopes (space-separated)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

impl TokenSet {
    /// Create a new `TokenSet` with calculated expiration time
    #[must_use]
    pub fn new(
        access_token: String,
        refresh_token: Option<String>,
        token_type: String,
        expires_in: i64,
        scope: Option<String>,
    ) -> Self {
        let expires_at = if expires_in > 0 {
            Some(Utc::now() + chrono::Duration::seconds(expires_in))
        } else {
            None
        };

        Self { access_token, refresh_token, token_type, expires_in, expires_at, scope }
    }
}

/// Token endpoint response (RFC 6749 §5.1)
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: Option<String>,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: i64,
    pub scope: Option<String>,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

impl From<TokenResponse> for TokenSet {
    fn from(response: TokenResponse) -> Self {
        Self::new(
            response.access_token,
            response.refresh_token,
            response.token_type,
            response.expires_in,
            response.scope,
        )
    }
}

/// OAuth configuration for a confidential client
#[derive(Debug, Clone)]
pub struct OAuthConfig {
    /// OAuth client ID
    pub client_id: String,

    /// OAuth client secret
    pub client_secret: Option<String>,

    /// Redirect URI registered with the app
    pub redirect_uri: String,

    /// Scopes to request
    pub scopes: Vec<String>,

    /// Browser consent page
    pub authorization_endpoint: String,

    /// Token exchange and refresh endpoint
    pub token_endpoint: String,
}

impl OAuthConfig {
    /// Create a new OAuth configuration
    #[must_use]
    pub fn new(
        client_id: String,
        client_secret: Option<String>,
        redirect_uri: String,
        scopes: Vec<String>,
        authorization_endpoint: String,
        token_endpoint: String,
    ) -> Self {
        Self {
            client_id,
            client_secret,
            redirect_uri,
            scopes,
            authorization_endpoint,
            token_endpoint,
        }
    }

    /// Get scopes as space-separated string
    #[must_use]
    pub fn scope_string(&self) -> String {
        self.scopes.join(" ")
    }
}

/// OAuth error response from authorization server (RFC 6749 §5.2)
///
/// HubSpot reports failures as `{status, message}`; both shapes are accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct OAuthError {
    #[serde(alias = "status")]
    pub error: String,
    #[serde(alias = "message")]
    pub error_description: Option<String>,
}

impl fmt::Display for OAuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error_description {
            Some(desc) => write!(f, "{}: {}", self.error, desc),
            None => write!(f, "{}", self.error),
        }
    }
}

impl std::error::Error for OAuthError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_response_defaults_missing_metadata() {
        let response: TokenResponse =
            serde_json::from_str(r#"{"access_token": "a", "refresh_token": "r"}"#).unwrap();
        let tokens: TokenSet = response.into();

        assert_eq!(tokens.token_type, "bearer");
        assert_eq!(tokens.expires_in, 0);
        assert!(tokens.expires_at.is_none());
    }

    #[test]
    fn expiry_is_derived_from_lifetime() {
        let tokens = TokenSet::new("a".into(), None, "bearer".into(), 1800, None);

        let remaining = (tokens.expires_at.unwrap() - Utc::now()).num_seconds();
        assert!(remaining > 1790 && remaining <= 1800);
    }

    #[test]
    fn oauth_error_accepts_hubspot_shape() {
        let error: OAuthError =
            serde_json::from_str(r#"{"status": "BAD_REFRESH_TOKEN", "message": "missing or invalid refresh token"}"#)
                .unwrap();
        assert_eq!(error.to_string(), "BAD_REFRESH_TOKEN: missing or invalid refresh token");
    }

    #[test]
    fn scope_string_is_space_separated() {
        let config = OAuthConfig::new(
            "id".into(),
            None,
            "http://localhost".into(),
            vec!["oauth".into(), "crm.objects.contacts.read".into()],
            "https://example.com/authorize".into(),
            "https://example.com/token".into(),
        );
        assert_eq!(config.scope_string(), "oauth crm.objects.contacts.read");
    }
}
