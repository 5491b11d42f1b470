//! CRM contact façade

pub mod service;

pub use service::ContactService;
