//! # ContactSync Domain
//!
//! Domain types shared by every ContactSync crate.
//!
//! This crate contains:
//! - Credential configuration structures
//! - Command, query and schema types for the command-dispatch platform
//! - Contact property builders for the resource-path platform
//! - Domain error types and Result definitions
//!
//! ## Architecture
//! - No dependencies on other ContactSync crates
//! - Only external dependencies allowed
//! - Pure data structures, no I/O

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
