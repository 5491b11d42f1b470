//! Command-dispatch wire types
//!
//! The command-dispatch platform accepts every operation as a tagged command
//! object POSTed to a single endpoint. Commands are sent as a one-element
//! array and answered with a parallel one-element array whose sole element
//! usually wraps the payload under `result`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::entity::Entity;
use crate::constants::{
    CMD_ENTITY_CREATE, CMD_ENTITY_DELETE, CMD_ENTITY_QUERY, CMD_ENTITY_UPDATE, CMD_SCHEMA_QUERY,
    FIBERY_ID_FIELD, FIBERY_PUBLIC_ID_FIELD,
};
use crate::errors::{Result, SyncError};

/// A single command: identifier plus argument map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    pub command: String,
    #[serde(default)]
    pub args: Map<String, Value>,
}

impl Command {
    pub fn new(command: impl Into<String>, args: Map<String, Value>) -> Self {
        Self { command: command.into(), args }
    }

    /// `fibery.schema/query` with no arguments.
    pub fn schema_query() -> Self {
        Self::new(CMD_SCHEMA_QUERY, Map::new())
    }

    /// `fibery.entity/query` with `{query: spec}`.
    pub fn entity_query(query: &QuerySpec) -> Self {
        let mut args = Map::new();
        args.insert("query".into(), query.to_value());
        Self::new(CMD_ENTITY_QUERY, args)
    }

    /// `fibery.entity/create` with `{type, entity: fields}`.
    pub fn entity_create(entity_type: &str, fields: Entity) -> Self {
        Self::new(CMD_ENTITY_CREATE, typed_args(entity_type, fields))
    }

    /// `fibery.entity/update` with `{type, entity: {fibery/id: id, ..fields}}`.
    ///
    /// The id key comes first and always carries `id`; a conflicting
    /// `fibery/id` inside `fields` is discarded.
    pub fn entity_update(entity_type: &str, id: &str, fields: Entity) -> Self {
        let mut entity = Entity::new();
        entity.insert(FIBERY_ID_FIELD.into(), Value::String(id.to_string()));
        for (key, value) in fields {
            if key != FIBERY_ID_FIELD {
                entity.insert(key, value);
            }
        }
        Self::new(CMD_ENTITY_UPDATE, typed_args(entity_type, entity))
    }

    /// `fibery.entity/delete` with `{type, entity: {fibery/id: id}}`.
    pub fn entity_delete(entity_type: &str, id: &str) -> Self {
        let mut entity = Entity::new();
        entity.insert(FIBERY_ID_FIELD.into(), Value::String(id.to_string()));
        Self::new(CMD_ENTITY_DELETE, typed_args(entity_type, entity))
    }

    /// Request body: the command wrapped in a one-element array.
    pub fn to_batch(&self) -> Value {
        Value::Array(vec![serde_json::json!({
            "command": self.command,
            "args": self.args,
        })])
    }

    /// Sole element of a one-element reply, or the reply itself when the
    /// platform elided the array.
    pub fn unwrap_reply(reply: Value) -> Value {
        match reply {
            Value::Array(mut items) if !items.is_empty() => items.swap_remove(0),
            other => other,
        }
    }
}

fn typed_args(entity_type: &str, entity: Entity) -> Map<String, Value> {
    let mut args = Map::new();
    args.insert("type".into(), Value::String(entity_type.to_string()));
    args.insert("entity".into(), Value::Object(entity));
    args
}

/// Entity query specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuerySpec {
    #[serde(rename = "q/from")]
    pub from: String,
    #[serde(rename = "q/select")]
    pub select: Vec<String>,
    #[serde(rename = "q/limit")]
    pub limit: u32,
}

impl QuerySpec {
    /// Build a query over `from` selecting `fields`.
    ///
    /// The select list always starts with `fibery/id` followed by
    /// `fibery/public-id`, each exactly once; the caller's remaining fields
    /// follow in their original order with duplicates dropped.
    ///
    /// # Errors
    /// Returns [`SyncError::InvalidInput`] when `limit` is zero.
    pub fn new(from: impl Into<String>, fields: Option<&[String]>, limit: u32) -> Result<Self> {
        if limit == 0 {
            return Err(SyncError::InvalidInput("query limit must be positive".into()));
        }

        let mut select = vec![FIBERY_ID_FIELD.to_string(), FIBERY_PUBLIC_ID_FIELD.to_string()];
        for field in fields.unwrap_or_default() {
            if !select.iter().any(|existing| existing == field) {
                select.push(field.clone());
            }
        }

        Ok(Self { from: from.into(), select, limit })
    }

    pub fn to_value(&self) -> Value {
        serde_json::json!({
            "q/from": self.from,
            "q/select": self.select,
            "q/limit": self.limit,
        })
    }
}

/// A command reply after the one normalization step.
///
/// Replies normally wrap their payload as `{"success": .., "result": ..}`;
/// some come back bare. Both shapes resolve to the payload via
/// [`CommandResponse::into_value`].
#[derive(Debug, Clone, PartialEq)]
pub enum CommandResponse {
    Enveloped(Value),
    Raw(Value),
}

impl CommandResponse {
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(mut map) => match map.remove("result") {
                Some(result) => Self::Enveloped(result),
                None => Self::Raw(Value::Object(map)),
            },
            other => Self::Raw(other),
        }
    }

    pub fn is_enveloped(&self) -> bool {
        matches!(self, Self::Enveloped(_))
    }

    pub fn into_value(self) -> Value {
        match self {
            Self::Enveloped(value) | Self::Raw(value) => value,
        }
    }
}
