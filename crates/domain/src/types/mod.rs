//! Domain types and models
//!
//! Entities travel as opaque JSON maps; only the envelopes around them
//! (commands, queries, schema descriptors, contact property sets) are typed.

pub mod command;
pub mod contact;
pub mod entity;
pub mod schema;

pub use command::{Command, CommandResponse, QuerySpec};
pub use contact::NewContact;
pub use entity::{entity_id, Entity, Properties};
pub use schema::{CustomType, FieldDescriptor, Schema, SchemaSummary, TypeDescriptor, TypeMeta};
