//! # ContactSync Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - The JSON-over-HTTP transport
//! - Configuration loading and saving
//! - Fibery (command-dispatch) and HubSpot (resource-path) adapters
//!
//! ## Architecture
//! - Implements traits defined in `contactsync-core`
//! - Contains all "impure" code (network and file I/O)

pub mod config;
pub mod errors;
pub mod http;
pub mod integrations;

// Re-export commonly used items
pub use errors::InfraError;
pub use http::*;
pub use integrations::*;
