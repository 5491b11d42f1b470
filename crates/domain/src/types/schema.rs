//! Workspace schema descriptors and classification

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::{DISCOVERY_FIELD_PREVIEW, FIBERY_NAMESPACE_PREFIX};

/// Workspace schema as returned by `fibery.schema/query`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(rename = "fibery/types", default)]
    pub types: Vec<TypeDescriptor>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One entity type (database) in the workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    #[serde(rename = "fibery/name", default = "unknown_name")]
    pub name: String,
    #[serde(rename = "fibery/meta", default)]
    pub meta: TypeMeta,
    #[serde(rename = "fibery/fields", default)]
    pub fields: Vec<FieldDescriptor>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Type metadata flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeMeta {
    #[serde(rename = "fibery/primitive?", default)]
    pub primitive: bool,
    #[serde(rename = "fibery/platform?", default)]
    pub platform: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One field of an entity type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    #[serde(rename = "fibery/name", default = "unknown_name")]
    pub name: String,
    #[serde(rename = "fibery/type", default = "unknown_name")]
    pub field_type: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn unknown_name() -> String {
    "Unknown".to_string()
}

impl TypeDescriptor {
    /// Platform-owned: flagged as such or living in the reserved namespace.
    pub fn is_system(&self) -> bool {
        self.meta.platform || self.name.starts_with(FIBERY_NAMESPACE_PREFIX)
    }

    /// Custom/syncable: neither primitive nor platform-owned.
    pub fn is_custom(&self) -> bool {
        !self.meta.primitive && !self.is_system()
    }
}

impl FieldDescriptor {
    pub fn is_displayable(&self) -> bool {
        !self.name.starts_with(FIBERY_NAMESPACE_PREFIX)
    }
}

/// A custom type with its fields, as reported by discovery.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomType {
    pub name: String,
    pub fields: Vec<FieldDescriptor>,
}

impl CustomType {
    /// User-facing fields among the first few declared on the type.
    pub fn displayable_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().take(DISCOVERY_FIELD_PREVIEW).filter(|field| field.is_displayable())
    }
}

/// Result of splitting a schema into custom and system types.
///
/// Primitive types are left out of both lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SchemaSummary {
    pub custom_types: Vec<CustomType>,
    pub system_types: Vec<String>,
}

impl SchemaSummary {
    pub fn from_schema(schema: &Schema) -> Self {
        let mut summary = Self::default();

        for descriptor in &schema.types {
            if descriptor.is_custom() {
                summary.custom_types.push(CustomType {
                    name: descriptor.name.clone(),
                    fields: descriptor.fields.clone(),
                });
            } else if !descriptor.meta.primitive {
                summary.system_types.push(descriptor.name.clone());
            }
        }

        summary
    }
}
