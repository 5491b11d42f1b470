//! HubSpot API client with OAuth 2.0 token management

use async_trait::async_trait;
use contactsync_common::auth::TokenSet;
use contactsync_core::ResourceGateway;
use contactsync_domain::constants::{
    HUBSPOT_API_BASE, HUBSPOT_CONNECTED_MESSAGE, HUBSPOT_CONTACTS_PATH,
};
use contactsync_domain::{HubSpotConfig, Result, SyncError};
use parking_lot::RwLock;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use tracing::{info, instrument};

use super::oauth::oauth_client;
use crate::errors::InfraError;
use crate::http::HttpClient;

/// HubSpot API client
///
/// Holds a snapshot of the credentials it was built with. The bearer header
/// is rebuilt from that snapshot on every call, so swapping in a refreshed
/// token with [`HubSpotClient::replace_credentials`] takes effect on the next
/// request.
pub struct HubSpotClient {
    http_client: HttpClient,
    base_url: String,
    credentials: RwLock<HubSpotConfig>,
}

impl HubSpotClient {
    /// Create a client from OAuth credentials.
    ///
    /// # Errors
    /// Returns `SyncError::Config` when no access token is configured.
    pub fn from_config(config: &HubSpotConfig, http_client: HttpClient) -> Result<Self> {
        config.require_access_token()?;

        Ok(Self {
            http_client,
            base_url: HUBSPOT_API_BASE.to_string(),
            credentials: RwLock::new(config.clone()),
        })
    }

    /// Point the client at a different API host (for testing)
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Copy of the credentials currently in use
    pub fn credentials(&self) -> HubSpotConfig {
        self.credentials.read().clone()
    }

    /// Swap in a new credential set (e.g. after a token refresh).
    ///
    /// # Errors
    /// Returns `SyncError::Config` when the new set has no access token; the
    /// current credentials are kept in that case.
    pub fn replace_credentials(&self, credentials: HubSpotConfig) -> Result<()> {
        credentials.require_access_token()?;
        *self.credentials.write() = credentials;
        info!("HubSpot credentials replaced");
        Ok(())
    }

    /// Exchange the configured refresh token for a new token pair.
    ///
    /// Neither this client nor any stored configuration is updated.
    ///
    /// # Errors
    /// Returns `SyncError::Config` when the client id, secret or refresh token
    /// is missing, and `SyncError::Auth` when HubSpot rejects the grant.
    #[instrument(skip(self))]
    pub async fn refresh_token(&self) -> Result<TokenSet> {
        let credentials = self.credentials();
        self.refresh_with(&credentials).await
    }

    /// New credential set carrying a freshly refreshed token pair.
    ///
    /// Persisting the result or handing it to
    /// [`HubSpotClient::replace_credentials`] is up to the caller.
    #[instrument(skip(self))]
    pub async fn refresh_credentials(&self) -> Result<HubSpotConfig> {
        let credentials = self.credentials();
        let tokens = self.refresh_with(&credentials).await?;
        Ok(credentials.with_tokens(tokens.access_token, tokens.refresh_token))
    }

    async fn refresh_with(&self, credentials: &HubSpotConfig) -> Result<TokenSet> {
        let refresh_token = credentials.require_refresh_token()?;
        let client = oauth_client(credentials, &self.base_url)?;

        let tokens = client
            .refresh_access_token(refresh_token)
            .await
            .map_err(|err| SyncError::from(InfraError::from(err)))?;

        info!(expires_in = tokens.expires_in, "HubSpot token refreshed");
        Ok(tokens)
    }

    fn headers(&self) -> Result<HeaderMap> {
        let credentials = self.credentials.read();
        let access_token = credentials.require_access_token()?;

        let mut bearer = HeaderValue::from_str(&format!("Bearer {access_token}")).map_err(|_| {
            SyncError::Config("HUBSPOT_ACCESS_TOKEN contains invalid characters".into())
        })?;
        bearer.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl ResourceGateway for HubSpotClient {
    #[instrument(skip(self, params))]
    async fn get(&self, path: &str, params: &[(&str, String)]) -> Result<Value> {
        self.http_client.get_json(&self.url(path), &self.headers()?, params).await
    }

    #[instrument(skip(self, body))]
    async fn post(&self, path: &str, body: &Value) -> Result<Value> {
        self.http_client.post_json(&self.url(path), &self.headers()?, body).await
    }

    #[instrument(skip(self, body))]
    async fn patch(&self, path: &str, body: &Value) -> Result<Value> {
        self.http_client.patch_json(&self.url(path), &self.headers()?, body).await
    }

    #[instrument(skip(self))]
    async fn delete(&self, path: &str) -> Result<Value> {
        self.http_client.delete(&self.url(path), &self.headers()?).await
    }

    async fn test_connection(&self) -> Result<String> {
        self.get(HUBSPOT_CONTACTS_PATH, &[("limit", "1".to_string())]).await?;
        Ok(HUBSPOT_CONNECTED_MESSAGE.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials(token: &str) -> HubSpotConfig {
        HubSpotConfig { access_token: Some(token.into()), ..Default::default() }
    }

    #[test]
    fn bearer_header_follows_replaced_credentials() {
        let client =
            HubSpotClient::from_config(&credentials("first"), HttpClient::new().unwrap()).unwrap();
        assert_eq!(client.headers().unwrap()[AUTHORIZATION], "Bearer first");

        client.replace_credentials(credentials("second")).unwrap();
        assert_eq!(client.headers().unwrap()[AUTHORIZATION], "Bearer second");
    }

    #[test]
    fn replacing_with_empty_token_keeps_current() {
        let client =
            HubSpotClient::from_config(&credentials("first"), HttpClient::new().unwrap()).unwrap();

        assert!(client.replace_credentials(HubSpotConfig::default()).is_err());
        assert_eq!(client.credentials().access_token.as_deref(), Some("first"));
    }

    #[test]
    fn missing_access_token_fails_at_construction() {
        let result = HubSpotClient::from_config(&HubSpotConfig::default(), HttpClient::new().unwrap());
        assert!(matches!(result, Err(SyncError::Config(_))));
    }
}
