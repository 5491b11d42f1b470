//! OAuth 2.0 client implementation
//!
//! Handles the confidential-client authorization flow:
//! - Browser authorization URL building
//! - Authorization code exchange
//! - Token refresh
//!
//! Token requests are form-encoded POSTs with a fixed 10 second timeout and
//! no retries.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info, instrument};

use super::types::{OAuthConfig, OAuthError, TokenResponse, TokenSet};

const TOKEN_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Error type for OAuth client operations
#[derive(Debug, thiserror::Error)]
pub enum OAuthClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// OAuth server returned an error
    #[error("OAuth error (status {status}): {error}")]
    OAuthError { status: u16, error: OAuthError },

    /// Failed to parse response
    #[error("Parse error: {0}")]
    ParseError(String),

    /// No refresh token available
    #[error("No refresh token available")]
    NoRefreshToken,

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// OAuth 2.0 client for a confidential client (id + secret)
#[derive(Debug, Clone)]
pub struct OAuthClient {
    config: OAuthConfig,
    client: Client,
}

impl OAuthClient {
    /// Create a new OAuth client with the given configuration
    ///
    /// # Errors
    /// Returns [`OAuthClientError::ConfigError`] if the HTTP client cannot be
    /// built.
    pub fn new(config: OAuthConfig) -> Result<Self, OAuthClientError> {
        let client = Client::builder()
            .timeout(TOKEN_REQUEST_TIMEOUT)
            .build()
            .map_err(|e| OAuthClientError::ConfigError(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { config, client })
    }

    /// Generate the consent page URL the user opens in a browser.
    ///
    /// Carries `client_id`, `redirect_uri` and the space-separated `scope`.
    #[must_use]
    pub fn authorization_url(&self) -> String {
        let params = [
            ("client_id", self.config.client_id.clone()),
            ("redirect_uri", self.config.redirect_uri.clone()),
            ("scope", self.config.scope_string()),
        ];

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", self.config.authorization_endpoint, query_string)
    }

    /// Exchange an authorization code for a token pair
    ///
    /// # Errors
    /// Returns error if the exchange fails or the response cannot be parsed.
    #[instrument(skip_all)]
    pub async fn exchange_code_for_tokens(&self, code: &str) -> Result<TokenSet, OAuthClientError> {
        let mut params = vec![
            ("grant_type".to_string(), "authorization_code".to_string()),
            ("client_id".to_string(), self.config.client_id.clone()),
            ("redirect_uri".to_string(), self.config.redirect_uri.clone()),
            ("code".to_string(), code.to_string()),
        ];

        if let Some(secret) = &self.config.client_secret {
            params.insert(2, ("client_secret".to_string(), secret.clone()));
        }

        let tokens = self.token_request(&params).await?;
        info!("authorization code exchanged for tokens");
        Ok(tokens)
    }

    /// Refresh access token using refresh token
    ///
    /// Returns the new token pair; it is not stored anywhere.
    ///
    /// # Errors
    /// Returns error if no refresh token is given, the request fails, or the
    /// provider rejects the grant.
    #[instrument(skip_all)]
    pub async fn refresh_access_token(
        &self,
        refresh_token: &str,
    ) -> Result<TokenSet, OAuthClientError> {
        if refresh_token.is_empty() {
            return Err(OAuthClientError::NoRefreshToken);
        }

        let mut params = vec![
            ("grant_type".to_string(), "refresh_token".to_string()),
            ("client_id".to_string(), self.config.client_id.clone()),
        ];

        if let Some(secret) = &self.config.client_secret {
            params.push(("client_secret".to_string(), secret.clone()));
        }

        params.push(("refresh_token".to_string(), refresh_token.to_string()));

        let tokens = self.token_request(&params).await?;
        info!("access token refreshed");
        Ok(tokens)
    }

    /// Get a reference to the OAuth configuration
    #[must_use]
    pub fn config(&self) -> &OAuthConfig {
        &self.config
    }

    async fn token_request(&self, params: &[(String, String)]) -> Result<TokenSet, OAuthClientError> {
        debug!(url = %self.config.token_endpoint, "sending token request");

        let response = self.client.post(&self.config.token_endpoint).form(params).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let error = serde_json::from_str::<OAuthError>(&body).unwrap_or_else(|_| OAuthError {
                error: status.canonical_reason().unwrap_or("unknown status").to_string(),
                error_description: (!body.is_empty()).then_some(body),
            });
            return Err(OAuthClientError::OAuthError { status: status.as_u16(), error });
        }

        let token_response: TokenResponse =
            serde_json::from_str(&body).map_err(|e| OAuthClientError::ParseError(e.to_string()))?;

        Ok(token_response.into())
    }
}
