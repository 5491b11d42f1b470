//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading and saving credential files.

use std::io::Write;

use contactsync_domain::{Config, FiberyConfig, HubSpotConfig};
use contactsync_infra::config;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_load_config_from_toml_file() {
    let toml_content = r#"
[fibery]
api_key = "fibery-key"
workspace = "acme.fibery.io"

[hubspot]
access_token = "access"
client_id = "client"
client_secret = "secret"
refresh_token = "refresh"
"#;

    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    temp_file.write_all(toml_content.as_bytes()).expect("Failed to write to temp file");

    let path = temp_file.path().with_extension("toml");
    std::fs::copy(temp_file.path(), &path).expect("Failed to copy file");

    let config = config::load_from_file(Some(path.clone())).expect("config loads");

    assert_eq!(config.fibery.api_key.as_deref(), Some("fibery-key"));
    assert_eq!(config.hubspot.refresh_token.as_deref(), Some("refresh"));
    assert!(config.hubspot.redirect_uri.is_none());

    std::fs::remove_file(path).ok();
}

#[test]
fn test_partial_config_is_accepted() {
    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    temp_file.write_all(br#"{"hubspot": {"access_token": "only-this"}}"#).unwrap();

    let path = temp_file.path().with_extension("json");
    std::fs::copy(temp_file.path(), &path).expect("Failed to copy file");

    let config = config::load_from_file(Some(path.clone())).expect("config loads");

    assert_eq!(config.fibery, FiberyConfig::default());
    assert_eq!(config.hubspot.access_token.as_deref(), Some("only-this"));

    std::fs::remove_file(path).ok();
}

#[test]
fn test_saved_refresh_round_trips() {
    let dir = TempDir::new().expect("temp dir");

    for name in ["contactsync.toml", "contactsync.json"] {
        let path = dir.path().join(name);
        let original = Config {
            fibery: FiberyConfig { api_key: Some("key".into()), workspace: Some("acme.fibery.io".into()) },
            hubspot: HubSpotConfig {
                access_token: Some("old".into()),
                refresh_token: Some("refresh".into()),
                ..Default::default()
            },
        };
        let refreshed = Config {
            hubspot: original.hubspot.with_tokens("new".into(), Some("rotated".into())),
            ..original.clone()
        };

        config::save_to_file(&refreshed, &path).expect("config saves");
        let loaded = config::load_from_file(Some(path)).expect("config reloads");

        assert_eq!(loaded, refreshed);
        assert_ne!(loaded, original);
    }
}

#[test]
fn test_unsupported_extension_is_rejected_on_save() {
    let dir = TempDir::new().expect("temp dir");
    let result = config::save_to_file(&Config::default(), &dir.path().join("contactsync.yaml"));
    assert!(result.is_err());
}
