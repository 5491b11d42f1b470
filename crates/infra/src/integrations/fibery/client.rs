//! Fibery API client: every operation is a command POSTed to `/commands`

use async_trait::async_trait;
use contactsync_core::EntityGateway;
use contactsync_domain::constants::{FIBERY_COMMANDS_PATH, FIBERY_CONNECTED_MESSAGE};
use contactsync_domain::{
    Command, CommandResponse, Entity, FiberyConfig, QuerySpec, Result, Schema, SyncError,
};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use tracing::{debug, info, instrument};
use url::Url;

use crate::errors::InfraError;
use crate::http::HttpClient;

/// Fibery API client bound to one workspace
pub struct FiberyClient {
    http_client: HttpClient,
    base_url: String,
    headers: HeaderMap,
}

impl FiberyClient {
    /// Create a client from workspace credentials.
    ///
    /// The base URL is `https://{workspace}/api`.
    ///
    /// # Errors
    /// Returns `SyncError::Config` when the API key or workspace is missing,
    /// the workspace is not a valid host, or the key cannot be used as a
    /// header value.
    pub fn from_config(config: &FiberyConfig, http_client: HttpClient) -> Result<Self> {
        let api_key = config.require_api_key()?;
        let workspace = config.require_workspace()?;

        let mut token = HeaderValue::from_str(&format!("Token {api_key}"))
            .map_err(|_| SyncError::Config("FIBERY_API_KEY contains invalid characters".into()))?;
        token.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, token);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let base_url = Url::parse(&format!("https://{workspace}/api"))
            .map_err(|err| SyncError::from(InfraError::from(err)))?;

        Ok(Self { http_client, base_url: base_url.to_string(), headers })
    }

    /// Point the client at a different API root (for testing)
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Execute one command.
    ///
    /// The command is sent as a one-element batch. A non-empty array reply is
    /// reduced to its first element; anything else is returned as received.
    #[instrument(skip_all, fields(command = %command.command))]
    pub async fn command(&self, command: &Command) -> Result<Value> {
        let url = format!("{}{}", self.base_url, FIBERY_COMMANDS_PATH);
        debug!("dispatching command");

        let reply = self.http_client.post_json(&url, &self.headers, &command.to_batch()).await?;
        Ok(Command::unwrap_reply(reply))
    }

    async fn command_result(&self, command: &Command) -> Result<Value> {
        let response = CommandResponse::from_value(self.command(command).await?);
        if !response.is_enveloped() {
            debug!("command reply carried no result envelope");
        }
        Ok(response.into_value())
    }
}

#[async_trait]
impl EntityGateway for FiberyClient {
    async fn schema_query(&self) -> Result<Schema> {
        let value = self.command_result(&Command::schema_query()).await?;
        let schema: Schema =
            serde_json::from_value(value).map_err(|err| SyncError::from(InfraError::from(err)))?;

        info!(types = schema.types.len(), "schema loaded");
        Ok(schema)
    }

    async fn entity_query(&self, query: &QuerySpec) -> Result<Vec<Entity>> {
        match self.command_result(&Command::entity_query(query)).await? {
            Value::Array(rows) => rows
                .into_iter()
                .map(|row| match row {
                    Value::Object(entity) => Ok(entity),
                    other => Err(SyncError::Decode(format!("entity row is not an object: {other}"))),
                })
                .collect(),
            other => Err(SyncError::Decode(format!("entity query returned no rows: {other}"))),
        }
    }

    async fn entity_create(&self, entity_type: &str, fields: Entity) -> Result<Value> {
        self.command(&Command::entity_create(entity_type, fields)).await
    }

    async fn entity_update(&self, entity_type: &str, id: &str, fields: Entity) -> Result<Value> {
        self.command(&Command::entity_update(entity_type, id, fields)).await
    }

    async fn entity_delete(&self, entity_type: &str, id: &str) -> Result<Value> {
        self.command(&Command::entity_delete(entity_type, id)).await
    }

    async fn test_connection(&self) -> Result<String> {
        self.command(&Command::schema_query()).await?;
        Ok(FIBERY_CONNECTED_MESSAGE.to_string())
    }
}
