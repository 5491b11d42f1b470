//! External service integrations

pub mod fibery;
pub mod hubspot;

pub use fibery::FiberyClient;
pub use hubspot::HubSpotClient;
