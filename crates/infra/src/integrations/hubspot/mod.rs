//! HubSpot CRM integration (resource-path API with OAuth2 bearer tokens)

pub mod client;
pub mod oauth;

pub use client::HubSpotClient;
pub use oauth::{oauth_client, oauth_config};
