//! Mock gateway implementations for testing

use std::collections::VecDeque;

use async_trait::async_trait;
use contactsync_core::{EntityGateway, ResourceGateway};
use contactsync_domain::{Entity, QuerySpec, Result as DomainResult, Schema};
use parking_lot::Mutex;
use serde_json::Value;

/// In-memory mock for `EntityGateway`.
///
/// Queries return the seeded entities truncated to the query limit.
#[derive(Default)]
pub struct MockEntityGateway {
    schema: Schema,
    entities: Vec<Entity>,
    pub queries: Mutex<Vec<QuerySpec>>,
    pub writes: Mutex<Vec<(String, String, Entity)>>,
}

impl MockEntityGateway {
    pub fn new(entities: Vec<Entity>) -> Self {
        Self { entities, ..Default::default() }
    }

    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = schema;
        self
    }

    pub fn last_query(&self) -> Option<QuerySpec> {
        self.queries.lock().last().cloned()
    }
}

#[async_trait]
impl EntityGateway for MockEntityGateway {
    async fn schema_query(&self) -> DomainResult<Schema> {
        Ok(self.schema.clone())
    }

    async fn entity_query(&self, query: &QuerySpec) -> DomainResult<Vec<Entity>> {
        self.queries.lock().push(query.clone());
        Ok(self.entities.iter().take(query.limit as usize).cloned().collect())
    }

    async fn entity_create(&self, entity_type: &str, fields: Entity) -> DomainResult<Value> {
        self.writes.lock().push(("create".into(), entity_type.into(), fields.clone()));
        Ok(Value::Object(fields))
    }

    async fn entity_update(
        &self,
        entity_type: &str,
        id: &str,
        fields: Entity,
    ) -> DomainResult<Value> {
        self.writes.lock().push((format!("update:{id}"), entity_type.into(), fields));
        Ok(serde_json::json!({"success": true}))
    }

    async fn entity_delete(&self, entity_type: &str, id: &str) -> DomainResult<Value> {
        self.writes.lock().push((format!("delete:{id}"), entity_type.into(), Entity::new()));
        Ok(serde_json::json!({"success": true}))
    }

    async fn test_connection(&self) -> DomainResult<String> {
        Ok("connected".into())
    }
}

/// A request seen by [`MockResourceGateway`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub path: String,
    pub params: Vec<(String, String)>,
    pub body: Option<Value>,
}

/// In-memory mock for `ResourceGateway`.
///
/// Replies are popped in order; once exhausted every call returns `{}`.
#[derive(Default)]
pub struct MockResourceGateway {
    replies: Mutex<VecDeque<Value>>,
    pub requests: Mutex<Vec<RecordedRequest>>,
}

impl MockResourceGateway {
    pub fn with_reply(self, reply: Value) -> Self {
        self.replies.lock().push_back(reply);
        self
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests.lock().last().cloned()
    }

    fn record(
        &self,
        method: &'static str,
        path: &str,
        params: Vec<(String, String)>,
        body: Option<Value>,
    ) -> Value {
        self.requests.lock().push(RecordedRequest { method, path: path.into(), params, body });
        self.replies.lock().pop_front().unwrap_or_else(|| serde_json::json!({}))
    }
}

#[async_trait]
impl ResourceGateway for MockResourceGateway {
    async fn get(&self, path: &str, params: &[(&str, String)]) -> DomainResult<Value> {
        let params = params.iter().map(|(k, v)| ((*k).to_string(), v.clone())).collect();
        Ok(self.record("GET", path, params, None))
    }

    async fn post(&self, path: &str, body: &Value) -> DomainResult<Value> {
        Ok(self.record("POST", path, Vec::new(), Some(body.clone())))
    }

    async fn patch(&self, path: &str, body: &Value) -> DomainResult<Value> {
        Ok(self.record("PATCH", path, Vec::new(), Some(body.clone())))
    }

    async fn delete(&self, path: &str) -> DomainResult<Value> {
        Ok(self.record("DELETE", path, Vec::new(), None))
    }

    async fn test_connection(&self) -> DomainResult<String> {
        Ok("connected".into())
    }
}
