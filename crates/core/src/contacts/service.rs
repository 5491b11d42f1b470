//! Contact service - uniform verbs over CRM contacts

use std::sync::Arc;

use contactsync_domain::constants::{DEFAULT_LIST_LIMIT, HUBSPOT_CONTACTS_PATH};
use contactsync_domain::{NewContact, Properties, Result};
use serde_json::{json, Value};
use tracing::instrument;

use crate::ports::ResourceGateway;

/// Contact service over a resource-path gateway
pub struct ContactService {
    gateway: Arc<dyn ResourceGateway>,
}

impl ContactService {
    /// Create a new contact service
    pub fn new(gateway: Arc<dyn ResourceGateway>) -> Self {
        Self { gateway }
    }

    /// First page of contacts; `limit` defaults to 100.
    ///
    /// A response without a `results` array yields an empty list.
    #[instrument(skip(self))]
    pub async fn list_contacts(&self, limit: Option<u32>) -> Result<Vec<Value>> {
        let limit = limit.unwrap_or(DEFAULT_LIST_LIMIT);
        let mut response =
            self.gateway.get(HUBSPOT_CONTACTS_PATH, &[("limit", limit.to_string())]).await?;

        Ok(match response.get_mut("results").map(Value::take) {
            Some(Value::Array(results)) => results,
            _ => Vec::new(),
        })
    }

    pub async fn get_contact(&self, contact_id: &str) -> Result<Value> {
        self.gateway.get(&contact_path(contact_id), &[]).await
    }

    pub async fn create_contact(&self, contact: NewContact) -> Result<Value> {
        let body = json!({ "properties": contact.into_properties() });
        self.gateway.post(HUBSPOT_CONTACTS_PATH, &body).await
    }

    /// Patch arbitrary properties onto an existing contact
    pub async fn update_contact(&self, contact_id: &str, properties: Properties) -> Result<Value> {
        let body = json!({ "properties": properties });
        self.gateway.patch(&contact_path(contact_id), &body).await
    }

    pub async fn delete_contact(&self, contact_id: &str) -> Result<Value> {
        self.gateway.delete(&contact_path(contact_id)).await
    }

    pub async fn test_connection(&self) -> Result<String> {
        self.gateway.test_connection().await
    }
}

/// The id is a single path segment, percent-encoded.
fn contact_path(contact_id: &str) -> String {
    format!("{HUBSPOT_CONTACTS_PATH}/{}", urlencoding::encode(contact_id))
}
