//! Configuration loader
//!
//! Loads credentials from a config file and the process environment.
//!
//! ## Loading Strategy
//! 1. Probe the standard locations for a config file (optional)
//! 2. Overlay any credential set in the environment
//! 3. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `FIBERY_API_KEY`: Fibery API token
//! - `FIBERY_WORKSPACE`: Fibery workspace host (`acme.fibery.io`)
//! - `HUBSPOT_ACCESS_TOKEN`: HubSpot OAuth access token
//! - `HUBSPOT_CLIENT_ID`: HubSpot app client id
//! - `HUBSPOT_CLIENT_SECRET`: HubSpot app client secret
//! - `HUBSPOT_REFRESH_TOKEN`: HubSpot OAuth refresh token
//! - `HUBSPOT_REDIRECT_URI`: Redirect URI registered with the HubSpot app
//!
//! Empty variables are ignored.
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./contactsync.toml` or `./contactsync.json` (current working directory)
//! 2. `./config.toml` or `./config.json` (current working directory)
//! 3. The same names in the parent and grandparent directories
//! 4. Relative to executable location
//!
//! Token writes only ever touch `contactsync.{toml,json}`; a generic
//! `config.*` file is read but never rewritten.

use std::path::{Path, PathBuf};

use contactsync_domain::{Config, Result, SyncError};
use serde_json::Value as JsonValue;

const OWN_CONFIG_FILE_NAMES: [&str; 2] = ["contactsync.toml", "contactsync.json"];

const CONFIG_FILE_NAMES: [&str; 4] =
    ["contactsync.toml", "contactsync.json", "config.toml", "config.json"];

/// Load configuration: config file (when one is found) overlaid with the
/// environment.
///
/// A missing file is not an error; credentials may come from the environment
/// alone. Missing credentials are reported later by the adapter that needs
/// them.
///
/// # Errors
/// Returns `SyncError::Config` if a config file exists but cannot be read or
/// parsed.
pub fn load() -> Result<Config> {
    let mut config = match probe_config_paths() {
        Some(path) => load_from_file(Some(path))?,
        None => {
            tracing::debug!("No config file found, using environment only");
            Config::default()
        }
    };

    apply_env_overrides(&mut config);
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `SyncError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(SyncError::Config(format!("Config file not found: {}", p.display())));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            SyncError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| SyncError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Write configuration to `path`, as TOML or JSON by extension.
///
/// Used to persist a refreshed or newly issued token pair.
///
/// # Errors
/// Returns `SyncError::Config` if serialization or the write fails.
pub fn save_to_file(config: &Config, path: &Path) -> Result<()> {
    let contents = match format_of(path)? {
        Format::Toml => toml::to_string_pretty(config)
            .map_err(|e| SyncError::Config(format!("Failed to encode TOML: {}", e)))?,
        Format::Json => serde_json::to_string_pretty(config)
            .map_err(|e| SyncError::Config(format!("Failed to encode JSON: {}", e)))?,
    };

    std::fs::write(path, contents)
        .map_err(|e| SyncError::Config(format!("Failed to write config file: {}", e)))?;

    tracing::info!(path = %path.display(), "Configuration saved");
    Ok(())
}

/// Store a HubSpot token pair in the config file at `path`.
///
/// Only `hubspot.access_token` and `hubspot.refresh_token` change; every
/// other key already in the file is written back as it was. A missing file
/// is created holding just the tokens.
///
/// # Errors
/// Returns `SyncError::Config` if the file cannot be read, is not a table at
/// the top level or under `hubspot`, or cannot be written.
pub fn save_hubspot_tokens(
    path: &Path,
    access_token: Option<&str>,
    refresh_token: Option<&str>,
) -> Result<()> {
    if !path.exists() {
        let mut config = Config::default();
        config.hubspot.access_token = access_token.map(str::to_owned);
        config.hubspot.refresh_token = refresh_token.map(str::to_owned);
        return save_to_file(&config, path);
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| SyncError::Config(format!("Failed to read config file: {}", e)))?;

    let updated = match format_of(path)? {
        Format::Toml => {
            let mut document: toml::Table = toml::from_str(&contents)
                .map_err(|e| SyncError::Config(format!("Invalid TOML format: {}", e)))?;
            let toml::Value::Table(section) =
                document.entry("hubspot").or_insert_with(|| toml::Value::Table(toml::Table::new()))
            else {
                return Err(SyncError::Config("`hubspot` is not a table".to_string()));
            };
            for (key, value) in [("access_token", access_token), ("refresh_token", refresh_token)] {
                match value {
                    Some(value) => section.insert(key.to_string(), toml::Value::String(value.into())),
                    None => section.remove(key),
                };
            }
            toml::to_string_pretty(&document)
                .map_err(|e| SyncError::Config(format!("Failed to encode TOML: {}", e)))?
        }
        Format::Json => {
            let mut document: JsonValue = serde_json::from_str(&contents)
                .map_err(|e| SyncError::Config(format!("Invalid JSON format: {}", e)))?;
            let section = document
                .as_object_mut()
                .map(|root| root.entry("hubspot").or_insert_with(|| JsonValue::Object(Default::default())))
                .and_then(JsonValue::as_object_mut)
                .ok_or_else(|| SyncError::Config("`hubspot` is not an object".to_string()))?;
            for (key, value) in [("access_token", access_token), ("refresh_token", refresh_token)] {
                match value {
                    Some(value) => section.insert(key.to_string(), JsonValue::String(value.into())),
                    None => section.remove(key),
                };
            }
            serde_json::to_string_pretty(&document)
                .map_err(|e| SyncError::Config(format!("Failed to encode JSON: {}", e)))?
        }
    };

    std::fs::write(path, updated)
        .map_err(|e| SyncError::Config(format!("Failed to write config file: {}", e)))?;

    tracing::info!(path = %path.display(), "HubSpot tokens saved");
    Ok(())
}

/// Overlay credentials found in the environment onto `config`.
pub fn apply_env_overrides(config: &mut Config) {
    let fibery = &mut config.fibery;
    override_from_env(&mut fibery.api_key, "FIBERY_API_KEY");
    override_from_env(&mut fibery.workspace, "FIBERY_WORKSPACE");

    let hubspot = &mut config.hubspot;
    override_from_env(&mut hubspot.access_token, "HUBSPOT_ACCESS_TOKEN");
    override_from_env(&mut hubspot.client_id, "HUBSPOT_CLIENT_ID");
    override_from_env(&mut hubspot.client_secret, "HUBSPOT_CLIENT_SECRET");
    override_from_env(&mut hubspot.refresh_token, "HUBSPOT_REFRESH_TOKEN");
    override_from_env(&mut hubspot.redirect_uri, "HUBSPOT_REDIRECT_URI");
}

fn override_from_env(slot: &mut Option<String>, key: &str) {
    if let Some(value) = env_var(key) {
        tracing::debug!(key, "Credential taken from environment");
        *slot = Some(value);
    }
}

enum Format {
    Toml,
    Json,
}

fn format_of(path: &Path) -> Result<Format> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => Ok(Format::Toml),
        "json" => Ok(Format::Json),
        _ => Err(SyncError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    match format_of(path)? {
        Format::Toml => toml::from_str(contents)
            .map_err(|e| SyncError::Config(format!("Invalid TOML format: {}", e))),
        Format::Json => serde_json::from_str(contents)
            .map_err(|e| SyncError::Config(format!("Invalid JSON format: {}", e))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches the working directory and up to two parents, then the
/// executable's directory and its parents.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    probe_named(&CONFIG_FILE_NAMES)
}

/// Probe the same locations for a `contactsync.{toml,json}` file only.
///
/// This is the file token writes go to; generic `config.*` files are never
/// returned.
pub fn probe_owned_config_path() -> Option<PathBuf> {
    probe_named(&OWN_CONFIG_FILE_NAMES)
}

fn probe_named(names: &'static [&'static str]) -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.extend([cwd.clone(), cwd.join(".."), cwd.join("../..")]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            roots.extend([exe_dir.to_path_buf(), exe_dir.join(".."), exe_dir.join("../..")]);
        }
    }

    roots
        .iter()
        .flat_map(|root| names.iter().map(move |name| root.join(name)))
        .find(|path| path.exists())
}

/// Non-empty environment variable, if set.
fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}
