//! Entity façade behaviour against an in-memory gateway.

mod support;

use std::sync::Arc;

use contactsync_core::EntityService;
use contactsync_domain::{Entity, Schema, SyncError};
use serde_json::{json, Value};
use support::gateways::MockEntityGateway;

fn entity(value: Value) -> Entity {
    value.as_object().cloned().unwrap()
}

fn people() -> Vec<Entity> {
    vec![
        entity(json!({"fibery/id": "id-1", "fibery/public-id": "1", "Name": "Ada"})),
        entity(json!({"fibery/id": "id-2", "fibery/public-id": "2", "Name": "Grace"})),
        entity(json!({"fibery/id": "id-3", "fibery/public-id": "3", "Name": "Grace"})),
    ]
}

fn service(gateway: &Arc<MockEntityGateway>) -> EntityService {
    EntityService::new(gateway.clone())
}

#[tokio::test]
async fn list_entities_uses_default_limit_and_reserved_fields() {
    let gateway = Arc::new(MockEntityGateway::new(people()));

    let fields = vec!["Name".to_string()];
    let rows = service(&gateway).list_entities("People/Person", Some(&fields), None).await.unwrap();

    assert_eq!(rows.len(), 3);
    let query = gateway.last_query().unwrap();
    assert_eq!(query.from, "People/Person");
    assert_eq!(query.limit, 100);
    assert_eq!(query.select, vec!["fibery/id", "fibery/public-id", "Name"]);
}

#[tokio::test]
async fn list_entities_rejects_zero_limit() {
    let gateway = Arc::new(MockEntityGateway::new(people()));

    let result = service(&gateway).list_entities("People/Person", None, Some(0)).await;

    assert!(matches!(result, Err(SyncError::InvalidInput(_))));
    assert!(gateway.queries.lock().is_empty());
}

#[tokio::test]
async fn get_by_id_returns_first_row_when_it_matches() {
    let gateway = Arc::new(MockEntityGateway::new(people()));

    let found = service(&gateway).get_by_id("People/Person", "id-1").await.unwrap();

    assert_eq!(found.unwrap()["Name"], "Ada");
    assert_eq!(gateway.last_query().unwrap().limit, 1);
}

#[tokio::test]
async fn get_by_id_is_absent_when_not_in_scanned_row() {
    let gateway = Arc::new(MockEntityGateway::new(people()));

    let found = service(&gateway).get_by_id("People/Person", "id-3").await.unwrap();

    assert!(found.is_none());
}

#[tokio::test]
async fn find_by_field_returns_first_match() {
    let gateway = Arc::new(MockEntityGateway::new(people()));

    let fields = vec!["Name".to_string()];
    let found = service(&gateway)
        .find_by_field("People/Person", "Name", &json!("Grace"), Some(&fields), None)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(found["fibery/id"], "id-2");
    assert_eq!(gateway.last_query().unwrap().limit, 1000);
}

#[tokio::test]
async fn find_by_field_only_scans_limit_rows() {
    let gateway = Arc::new(MockEntityGateway::new(people()));

    let found = service(&gateway)
        .find_by_field("People/Person", "Name", &json!("Grace"), None, Some(1))
        .await
        .unwrap();

    assert!(found.is_none());
}

#[tokio::test]
async fn update_forwards_id_and_fields() {
    let gateway = Arc::new(MockEntityGateway::new(Vec::new()));

    service(&gateway)
        .update("People/Person", "id-9", entity(json!({"Name": "Edsger"})))
        .await
        .unwrap();

    let writes = gateway.writes.lock();
    assert_eq!(writes[0].0, "update:id-9");
    assert_eq!(writes[0].1, "People/Person");
    assert_eq!(writes[0].2["Name"], "Edsger");
}

#[tokio::test]
async fn discover_types_splits_custom_and_system() {
    let schema: Schema = serde_json::from_value(json!({
        "fibery/types": [
            {"fibery/name": "fibery/User", "fibery/meta": {"fibery/platform?": true}},
            {"fibery/name": "fibery/int", "fibery/meta": {"fibery/primitive?": true}},
            {
                "fibery/name": "Project",
                "fibery/meta": {},
                "fibery/fields": [{"fibery/name": "fibery/id"}, {"fibery/name": "Title"}]
            }
        ]
    }))
    .unwrap();
    let gateway = Arc::new(MockEntityGateway::new(Vec::new()).with_schema(schema));

    let service = service(&gateway);
    let summary = service.discover_types().await.unwrap();

    assert_eq!(summary.system_types, vec!["fibery/User"]);
    assert_eq!(summary.custom_types.len(), 1);
    assert_eq!(summary.custom_types[0].name, "Project");
    assert_eq!(service.list_types().await.unwrap().len(), 3);
}
