//! Subcommand implementations

pub mod auth;
pub mod check;
pub mod discover;
pub mod refresh;

use std::path::{Path, PathBuf};

use anyhow::Context;
use contactsync_domain::{Config, HubSpotConfig};
use contactsync_infra::config;

const DEFAULT_CONFIG_FILE: &str = "contactsync.toml";

/// Credentials from the probed config file and the environment.
pub(crate) fn load_config() -> anyhow::Result<Config> {
    config::load().context("failed to load configuration")
}

/// Write a new HubSpot token pair into the `contactsync` config file.
///
/// Goes to the first `contactsync.{toml,json}` found, else a new
/// `./contactsync.toml`. Returns the path written.
pub(crate) fn persist_hubspot(credentials: &HubSpotConfig) -> anyhow::Result<PathBuf> {
    let path = config::probe_owned_config_path().unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    persist_hubspot_at(&path, credentials)?;
    Ok(path)
}

/// Only the access and refresh tokens are written; client id, secret and
/// anything else in `credentials` stay out of the file.
fn persist_hubspot_at(path: &Path, credentials: &HubSpotConfig) -> anyhow::Result<()> {
    config::save_hubspot_tokens(
        path,
        credentials.access_token.as_deref(),
        credentials.refresh_token.as_deref(),
    )
    .with_context(|| format!("failed to write {}", path.display()))
}
