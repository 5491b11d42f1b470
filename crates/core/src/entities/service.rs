//! Entity service - uniform verbs over command-dispatch entities

use std::sync::Arc;

use contactsync_domain::constants::{DEFAULT_FIND_LIMIT, DEFAULT_LIST_LIMIT};
use contactsync_domain::{
    entity_id, Entity, QuerySpec, Result, SchemaSummary, TypeDescriptor,
};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::ports::EntityGateway;

/// Entity service over a command-dispatch gateway
pub struct EntityService {
    gateway: Arc<dyn EntityGateway>,
}

impl EntityService {
    /// Create a new entity service
    pub fn new(gateway: Arc<dyn EntityGateway>) -> Self {
        Self { gateway }
    }

    /// All entity types (databases) in the workspace
    pub async fn list_types(&self) -> Result<Vec<TypeDescriptor>> {
        Ok(self.gateway.schema_query().await?.types)
    }

    /// Split the schema into custom (syncable) and system types
    pub async fn discover_types(&self) -> Result<SchemaSummary> {
        let schema = self.gateway.schema_query().await?;
        Ok(SchemaSummary::from_schema(&schema))
    }

    /// Entities of `entity_type`; `limit` defaults to 100
    #[instrument(skip(self, fields))]
    pub async fn list_entities(
        &self,
        entity_type: &str,
        fields: Option<&[String]>,
        limit: Option<u32>,
    ) -> Result<Vec<Entity>> {
        let query = QuerySpec::new(entity_type, fields, limit.unwrap_or(DEFAULT_LIST_LIMIT))?;
        self.gateway.entity_query(&query).await
    }

    /// Look up an entity by internal id.
    ///
    /// This scans a single-row query rather than filtering server-side, so
    /// it only finds `id` when it happens to be the first row returned.
    /// Returns `None` when the id does not match.
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, entity_type: &str, id: &str) -> Result<Option<Entity>> {
        let query = QuerySpec::new(entity_type, None, 1)?;
        let entities = self.gateway.entity_query(&query).await?;

        Ok(entities.into_iter().find(|entity| entity_id(entity) == Some(id)))
    }

    pub async fn create(&self, entity_type: &str, fields: Entity) -> Result<Value> {
        self.gateway.entity_create(entity_type, fields).await
    }

    pub async fn update(&self, entity_type: &str, id: &str, fields: Entity) -> Result<Value> {
        self.gateway.entity_update(entity_type, id, fields).await
    }

    pub async fn delete(&self, entity_type: &str, id: &str) -> Result<Value> {
        self.gateway.entity_delete(entity_type, id).await
    }

    /// First entity whose `field_name` equals `value`.
    ///
    /// Scans at most `limit` rows (default 1000) of one query page. The
    /// searched field must be part of `fields` for a match to be possible.
    #[instrument(skip(self, value, fields))]
    pub async fn find_by_field(
        &self,
        entity_type: &str,
        field_name: &str,
        value: &Value,
        fields: Option<&[String]>,
        limit: Option<u32>,
    ) -> Result<Option<Entity>> {
        let entities = self
            .list_entities(entity_type, fields, Some(limit.unwrap_or(DEFAULT_FIND_LIMIT)))
            .await?;
        debug!(scanned = entities.len(), "scanning entities for field match");

        Ok(entities.into_iter().find(|entity| entity.get(field_name) == Some(value)))
    }

    pub async fn test_connection(&self) -> Result<String> {
        self.gateway.test_connection().await
    }
}
