//! # ContactSync Core
//!
//! Platform-neutral façades over the two API adapters.
//!
//! This crate contains:
//! - Port interfaces (traits) for the command-dispatch and resource-path
//!   platforms
//! - `EntityService`: uniform get/create/update/delete/find over typed
//!   workspace entities
//! - `ContactService`: the same verbs over CRM contacts
//!
//! ## Architecture Principles
//! - Only depends on `contactsync-domain`
//! - No HTTP code; adapters live in `contactsync-infra`
//! - All external calls go through the traits in [`ports`]

pub mod contacts;
pub mod entities;
pub mod ports;

// Re-export specific items to avoid ambiguity
pub use contacts::ContactService;
pub use entities::EntityService;
pub use ports::{EntityGateway, ResourceGateway};
