//! Workspace entity façade

pub mod service;

pub use service::EntityService;
