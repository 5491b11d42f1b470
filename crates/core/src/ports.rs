//! Port interfaces for the two platform adapters
//!
//! Both ports expose one network round trip per method. Implementations
//! propagate transport and service errors unchanged.

use async_trait::async_trait;
use contactsync_domain::{Entity, QuerySpec, Result, Schema};
use serde_json::Value;

/// Command-dispatch platform (typed workspace entities)
#[async_trait]
pub trait EntityGateway: Send + Sync {
    /// Fetch the full workspace schema
    async fn schema_query(&self) -> Result<Schema>;

    /// Run an entity query and return the matching rows
    async fn entity_query(&self, query: &QuerySpec) -> Result<Vec<Entity>>;

    /// Create an entity of `entity_type`
    async fn entity_create(&self, entity_type: &str, fields: Entity) -> Result<Value>;

    /// Update entity `id`; the supplied id always wins over `fields`
    async fn entity_update(&self, entity_type: &str, id: &str, fields: Entity) -> Result<Value>;

    /// Delete entity `id`
    async fn entity_delete(&self, entity_type: &str, id: &str) -> Result<Value>;

    /// Verify credentials with a cheap call; returns a confirmation message
    async fn test_connection(&self) -> Result<String>;
}

/// Resource-path platform (REST verbs over URL paths)
#[async_trait]
pub trait ResourceGateway: Send + Sync {
    async fn get(&self, path: &str, params: &[(&str, String)]) -> Result<Value>;

    async fn post(&self, path: &str, body: &Value) -> Result<Value>;

    async fn patch(&self, path: &str, body: &Value) -> Result<Value>;

    /// Delete the resource; returns a fixed success marker
    async fn delete(&self, path: &str) -> Result<Value>;

    /// Verify credentials with a cheap call; returns a confirmation message
    async fn test_connection(&self) -> Result<String>;
}
