//! OAuth settings for the HubSpot app

use contactsync_common::auth::{OAuthClient, OAuthConfig};
use contactsync_domain::constants::{
    HUBSPOT_AUTHORIZE_URL, HUBSPOT_DEFAULT_REDIRECT_URI, HUBSPOT_SCOPES, HUBSPOT_TOKEN_PATH,
};
use contactsync_domain::{HubSpotConfig, Result, SyncError};

use crate::errors::InfraError;

/// OAuth client settings for the app described by `config`.
///
/// The token endpoint lives under `api_base`; the consent page and scopes are
/// fixed. A missing redirect URI falls back to `http://localhost`.
///
/// # Errors
/// Returns `SyncError::Config` when the client id or secret is missing.
pub fn oauth_config(config: &HubSpotConfig, api_base: &str) -> Result<OAuthConfig> {
    let client_id = config.require_client_id()?;
    let client_secret = config.require_client_secret()?;
    let redirect_uri = config
        .redirect_uri
        .as_deref()
        .filter(|uri| !uri.trim().is_empty())
        .unwrap_or(HUBSPOT_DEFAULT_REDIRECT_URI);

    Ok(OAuthConfig::new(
        client_id.to_string(),
        Some(client_secret.to_string()),
        redirect_uri.to_string(),
        HUBSPOT_SCOPES.split_whitespace().map(str::to_string).collect(),
        HUBSPOT_AUTHORIZE_URL.to_string(),
        format!("{api_base}{HUBSPOT_TOKEN_PATH}"),
    ))
}

/// Token-endpoint client for the app described by `config`.
pub fn oauth_client(config: &HubSpotConfig, api_base: &str) -> Result<OAuthClient> {
    OAuthClient::new(oauth_config(config, api_base)?)
        .map_err(|err| SyncError::from(InfraError::from(err)))
}
