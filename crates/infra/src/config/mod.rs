//! Configuration loading and management
//!
//! This module provides utilities for loading credentials from files and
//! environment variables, and for writing refreshed credentials back.

pub mod loader;

// Re-export commonly used items
pub use loader::{
    apply_env_overrides, load, load_from_file, probe_config_paths, probe_owned_config_path,
    save_hubspot_tokens, save_to_file,
};
