//! Entity and property maps

use serde_json::{Map, Value};

use crate::constants::FIBERY_ID_FIELD;

/// An entity as returned by either platform: field identifier to JSON value.
///
/// Insertion order is preserved.
pub type Entity = Map<String, Value>;

/// Arbitrary property set supplied by callers for create/update operations.
pub type Properties = Map<String, Value>;

/// Internal id of a command-dispatch entity, if present and a string.
pub fn entity_id(entity: &Entity) -> Option<&str> {
    entity.get(FIBERY_ID_FIELD).and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn reads_internal_id() {
        let entity: Entity = json!({"fibery/id": "abc", "Name": "Ada"})
            .as_object()
            .cloned()
            .unwrap();
        assert_eq!(entity_id(&entity), Some("abc"));

        let anonymous = Entity::new();
        assert_eq!(entity_id(&anonymous), None);
    }
}
