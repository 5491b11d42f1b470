//! Modular common utilities shared across ContactSync crates.
//!
//! # Feature Tiers
//!
//! Enable cargo features to opt into the tiers you need:
//! - `platform`: OAuth 2.0 authorization-code and refresh-token flows

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

// Platform tier
// -------------------------------------------------------------------
#[cfg(feature = "platform")]
pub mod auth;

#[cfg(feature = "platform")]
pub use auth::{OAuthClient, OAuthClientError, OAuthConfig, TokenSet};
