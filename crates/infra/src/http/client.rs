use std::time::Duration;

use contactsync_domain::constants::{DEFAULT_TIMEOUT, DELETE_SUCCESS_MESSAGE};
use contactsync_domain::SyncError;
use reqwest::header::HeaderMap;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response};
use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::InfraError;

/// JSON-over-HTTP client with a fixed per-request timeout.
///
/// Every call is a single attempt. Non-2xx statuses are not treated as
/// failures: the service's JSON body is handed back unchanged.
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: ReqwestClient,
}

impl HttpClient {
    pub(crate) fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Client with the fixed request timeout.
    pub fn new() -> Result<Self, SyncError> {
        Self::builder().build()
    }

    /// Create a request builder using the underlying reqwest client.
    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Issue one request and decode the JSON body.
    ///
    /// Query parameters go on the URL; `body` (when present) is sent as JSON.
    pub async fn send_json(
        &self,
        method: Method,
        url: &str,
        headers: &HeaderMap,
        body: Option<&Value>,
        query: &[(&str, String)],
    ) -> Result<Value, SyncError> {
        let mut builder = self.request(method, url).headers(headers.clone());
        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = self.send(builder).await?;
        response.json::<Value>().await.map_err(|err| InfraError::from(err).into())
    }

    pub async fn get_json(
        &self,
        url: &str,
        headers: &HeaderMap,
        query: &[(&str, String)],
    ) -> Result<Value, SyncError> {
        self.send_json(Method::GET, url, headers, None, query).await
    }

    pub async fn post_json(
        &self,
        url: &str,
        headers: &HeaderMap,
        body: &Value,
    ) -> Result<Value, SyncError> {
        self.send_json(Method::POST, url, headers, Some(body), &[]).await
    }

    pub async fn patch_json(
        &self,
        url: &str,
        headers: &HeaderMap,
        body: &Value,
    ) -> Result<Value, SyncError> {
        self.send_json(Method::PATCH, url, headers, Some(body), &[]).await
    }

    /// DELETE the resource and return a fixed confirmation marker.
    ///
    /// The response body is discarded whatever the status.
    pub async fn delete(&self, url: &str, headers: &HeaderMap) -> Result<Value, SyncError> {
        let builder = self.request(Method::DELETE, url).headers(headers.clone());
        self.send(builder).await?;
        Ok(Value::String(DELETE_SUCCESS_MESSAGE.to_string()))
    }

    /// Execute the provided request builder once.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, SyncError> {
        let request = builder.build().map_err(|err| SyncError::from(InfraError::from(err)))?;

        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, url = %url.path(), "sending HTTP request");

        match self.client.execute(request).await {
            Ok(response) => {
                let status = response.status();
                if status.is_success() {
                    debug!(%method, url = %url.path(), %status, "received HTTP response");
                } else {
                    warn!(%method, url = %url.path(), %status, "service returned error status");
                }
                Ok(response)
            }
            Err(err) => {
                debug!(%method, url = %url.path(), error = %err, "HTTP request failed");
                Err(InfraError::from(err).into())
            }
        }
    }
}

/// Builder for [`HttpClient`]. The timeout is only shortened by tests.
#[derive(Debug)]
pub(crate) struct HttpClientBuilder {
    timeout: Duration,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self { timeout: DEFAULT_TIMEOUT }
    }
}

impl HttpClientBuilder {
    #[cfg(test)]
    pub(crate) fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub(crate) fn build(self) -> Result<HttpClient, SyncError> {
        let client = ReqwestClient::builder()
            .timeout(self.timeout)
            .user_agent(concat!("contactsync/", env!("CARGO_PKG_VERSION")))
            .no_proxy()
            .build()
            .map_err(|err| SyncError::from(InfraError::from(err)))?;

        Ok(HttpClient { client })
    }
}
