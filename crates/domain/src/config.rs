//! Credential configuration
//!
//! A [`Config`] is loaded once at process start and passed into adapter
//! constructors. Every value is optional on disk; adapters ask for the values
//! they need through the `require_*` accessors, which fail with
//! [`SyncError::Config`] the first time a missing credential is used.

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SyncError};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fibery: FiberyConfig,
    #[serde(default)]
    pub hubspot: HubSpotConfig,
}

/// Fibery workspace credentials
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiberyConfig {
    /// Static API token sent as `Authorization: Token <key>`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Workspace host, e.g. `acme.fibery.io`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace: Option<String>,
}

impl FiberyConfig {
    pub fn require_api_key(&self) -> Result<&str> {
        require(self.api_key.as_deref(), "FIBERY_API_KEY")
    }

    pub fn require_workspace(&self) -> Result<&str> {
        require(self.workspace.as_deref(), "FIBERY_WORKSPACE")
    }
}

/// HubSpot OAuth credentials
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HubSpotConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// Redirect URI registered with the HubSpot app (bootstrap only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_uri: Option<String>,
}

impl HubSpotConfig {
    pub fn require_access_token(&self) -> Result<&str> {
        require(self.access_token.as_deref(), "HUBSPOT_ACCESS_TOKEN")
    }

    pub fn require_client_id(&self) -> Result<&str> {
        require(self.client_id.as_deref(), "HUBSPOT_CLIENT_ID")
    }

    pub fn require_client_secret(&self) -> Result<&str> {
        require(self.client_secret.as_deref(), "HUBSPOT_CLIENT_SECRET")
    }

    pub fn require_refresh_token(&self) -> Result<&str> {
        require(self.refresh_token.as_deref(), "HUBSPOT_REFRESH_TOKEN")
    }

    /// Produce a new credential set carrying a freshly issued token pair.
    ///
    /// The receiver is left untouched. When the provider does not rotate the
    /// refresh token the previous one is kept.
    #[must_use]
    pub fn with_tokens(&self, access_token: String, refresh_token: Option<String>) -> Self {
        Self {
            access_token: Some(access_token),
            refresh_token: refresh_token.or_else(|| self.refresh_token.clone()),
            ..self.clone()
        }
    }
}

fn require<'a>(value: Option<&'a str>, name: &str) -> Result<&'a str> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(SyncError::Config(format!("{name} is not configured"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credential_fails_fast() {
        let config = FiberyConfig { api_key: None, workspace: Some("acme.fibery.io".into()) };

        assert_eq!(config.require_workspace().unwrap(), "acme.fibery.io");
        match config.require_api_key() {
            Err(SyncError::Config(msg)) => assert!(msg.contains("FIBERY_API_KEY")),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn blank_credential_counts_as_missing() {
        let config = HubSpotConfig { access_token: Some("   ".into()), ..Default::default() };
        assert!(config.require_access_token().is_err());
    }

    #[test]
    fn with_tokens_returns_new_set_and_keeps_original() {
        let original = HubSpotConfig {
            access_token: Some("old-access".into()),
            client_id: Some("client".into()),
            client_secret: Some("secret".into()),
            refresh_token: Some("old-refresh".into()),
            redirect_uri: None,
        };

        let rotated = original.with_tokens("new-access".into(), Some("new-refresh".into()));
        assert_eq!(rotated.access_token.as_deref(), Some("new-access"));
        assert_eq!(rotated.refresh_token.as_deref(), Some("new-refresh"));
        assert_eq!(rotated.client_id.as_deref(), Some("client"));
        assert_eq!(original.access_token.as_deref(), Some("old-access"));

        let kept = original.with_tokens("newer".into(), None);
        assert_eq!(kept.refresh_token.as_deref(), Some("old-refresh"));
    }

    #[test]
    fn toml_round_trip_omits_missing_values() {
        let config = Config {
            fibery: FiberyConfig { api_key: Some("key".into()), workspace: None },
            hubspot: HubSpotConfig::default(),
        };

        let text = toml::to_string(&config).unwrap();
        assert!(text.contains("api_key = \"key\""));
        assert!(!text.contains("workspace"));

        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
