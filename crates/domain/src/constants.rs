//! Application constants
//!
//! Centralized location for platform identifiers, reserved field names and
//! fixed protocol values.

use std::time::Duration;

// Transport
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(DEFAULT_TIMEOUT_SECS);
pub const DELETE_SUCCESS_MESSAGE: &str = "Resource deleted successfully";

// Fibery (command-dispatch platform)
pub const FIBERY_ID_FIELD: &str = "fibery/id";
pub const FIBERY_PUBLIC_ID_FIELD: &str = "fibery/public-id";
pub const FIBERY_NAMESPACE_PREFIX: &str = "fibery/";
pub const FIBERY_COMMANDS_PATH: &str = "/commands";
pub const FIBERY_CONNECTED_MESSAGE: &str = "Connected - Fibery API is working!";

pub const CMD_SCHEMA_QUERY: &str = "fibery.schema/query";
pub const CMD_ENTITY_QUERY: &str = "fibery.entity/query";
pub const CMD_ENTITY_CREATE: &str = "fibery.entity/create";
pub const CMD_ENTITY_UPDATE: &str = "fibery.entity/update";
pub const CMD_ENTITY_DELETE: &str = "fibery.entity/delete";

// Facade defaults
pub const DEFAULT_LIST_LIMIT: u32 = 100;
pub const DEFAULT_FIND_LIMIT: u32 = 1000;
/// Number of fields inspected per type when summarising a schema.
pub const DISCOVERY_FIELD_PREVIEW: usize = 10;

// HubSpot (resource-path platform)
pub const HUBSPOT_API_BASE: &str = "https://api.hubapi.com";
pub const HUBSPOT_AUTHORIZE_URL: &str = "https://app-na3.hubspot.com/oauth/authorize";
pub const HUBSPOT_TOKEN_PATH: &str = "/oauth/v1/token";
pub const HUBSPOT_CONTACTS_PATH: &str = "/crm/v3/objects/contacts";
pub const HUBSPOT_CONNECTED_MESSAGE: &str = "Connected - HubSpot API is working!";
pub const HUBSPOT_DEFAULT_REDIRECT_URI: &str = "http://localhost";
pub const HUBSPOT_SCOPES: &str = "crm.objects.companies.read crm.objects.companies.write crm.objects.contacts.read crm.objects.contacts.write oauth";
