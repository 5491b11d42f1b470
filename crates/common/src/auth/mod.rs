//! OAuth 2.0 authorization-code and refresh-token flows
//!
//! Used by the CRM integration, whose access tokens are issued to a
//! confidential client (client id + secret) through the browser consent page
//! and rotated with the refresh-token grant.
//!
//! # Flow
//!
//! ```text
//! authorization_url() ──► user consents in browser ──► redirect URL
//!                                                         │
//!              extract_authorization_code(redirect URL) ◄─┘
//!                         │
//!                         ▼
//!        exchange_code_for_tokens(code) ──► TokenSet
//!                                              │
//!        refresh_access_token(refresh) ◄───────┘ (later, out of band)
//! ```
//!
//! Nothing here persists tokens. Callers decide where a new [`TokenSet`]
//! goes.
//!
//! # Module Organization
//!
//! - **[`types`]**: `TokenSet`, `TokenResponse`, `OAuthConfig`, `OAuthError`
//! - **[`client`]**: HTTP client for authorization and token exchange
//! - **[`callback`]**: Parsing the pasted redirect URL

pub mod callback;
pub mod client;
pub mod types;

// Re-export commonly used types and functions
pub use callback::extract_authorization_code;
pub use client::{OAuthClient, OAuthClientError};
pub use types::{OAuthConfig, OAuthError, TokenResponse, TokenSet};
