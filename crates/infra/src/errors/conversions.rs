//! Conversions from external infrastructure errors into domain errors.

use contactsync_common::auth::OAuthClientError;
use contactsync_domain::SyncError;
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub SyncError);

impl From<InfraError> for SyncError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<SyncError> for InfraError {
    fn from(value: SyncError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoSyncError {
    fn into_sync(self) -> SyncError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → SyncError */
/* -------------------------------------------------------------------------- */

impl IntoSyncError for HttpError {
    fn into_sync(self) -> SyncError {
        if self.is_timeout() {
            return SyncError::Network("HTTP request timed out".into());
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return SyncError::Network("HTTP connection failure".into());
        }

        if self.is_decode() {
            return SyncError::Decode(format!("response body is not valid JSON: {self}"));
        }

        if self.is_builder() {
            return SyncError::InvalidInput(format!("invalid HTTP request: {self}"));
        }

        SyncError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_sync())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → SyncError */
/* -------------------------------------------------------------------------- */

impl IntoSyncError for serde_json::Error {
    fn into_sync(self) -> SyncError {
        SyncError::Decode(self.to_string())
    }
}

impl From<serde_json::Error> for InfraError {
    fn from(value: serde_json::Error) -> Self {
        InfraError(value.into_sync())
    }
}

/* -------------------------------------------------------------------------- */
/* url::ParseError → SyncError */
/* -------------------------------------------------------------------------- */

impl IntoSyncError for url::ParseError {
    fn into_sync(self) -> SyncError {
        SyncError::Config(format!("invalid URL: {self}"))
    }
}

impl From<url::ParseError> for InfraError {
    fn from(value: url::ParseError) -> Self {
        InfraError(value.into_sync())
    }
}

/* -------------------------------------------------------------------------- */
/* OAuthClientError → SyncError */
/* -------------------------------------------------------------------------- */

impl IntoSyncError for OAuthClientError {
    fn into_sync(self) -> SyncError {
        match self {
            OAuthClientError::RequestFailed(err) => err.into_sync(),
            OAuthClientError::OAuthError { status, error } => {
                SyncError::Auth(format!("token endpoint rejected grant (HTTP {status}): {error}"))
            }
            OAuthClientError::ParseError(msg) => SyncError::Decode(msg),
            OAuthClientError::NoRefreshToken => {
                SyncError::Config("HUBSPOT_REFRESH_TOKEN is not configured".into())
            }
            OAuthClientError::ConfigError(msg) => SyncError::Config(msg),
        }
    }
}

impl From<OAuthClientError> for InfraError {
    fn from(value: OAuthClientError) -> Self {
        InfraError(value.into_sync())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use std::net::TcpListener;

    use contactsync_common::auth::OAuthError;
    use reqwest::Client;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn connection_refused_maps_to_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = Client::builder().no_proxy().build().unwrap();
        let error = client.get(format!("http://{addr}")).send().await.unwrap_err();

        let mapped: SyncError = InfraError::from(error).into();
        assert!(matches!(mapped, SyncError::Network(_)), "got {mapped:?}");
    }

    #[tokio::test]
    async fn non_json_body_maps_to_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = Client::builder().no_proxy().build().unwrap();
        let error = client
            .get(server.uri())
            .send()
            .await
            .unwrap()
            .json::<serde_json::Value>()
            .await
            .unwrap_err();

        let mapped: SyncError = InfraError::from(error).into();
        assert!(matches!(mapped, SyncError::Decode(_)), "got {mapped:?}");
    }

    #[test]
    fn rejected_grant_maps_to_auth_error() {
        let error = OAuthClientError::OAuthError {
            status: 400,
            error: OAuthError {
                error: "BAD_REFRESH_TOKEN".into(),
                error_description: Some("missing or invalid refresh token".into()),
            },
        };

        let mapped: SyncError = InfraError::from(error).into();
        match mapped {
            SyncError::Auth(msg) => {
                assert!(msg.contains("400"));
                assert!(msg.contains("BAD_REFRESH_TOKEN"));
            }
            other => panic!("expected auth error, got {:?}", other),
        }
    }

    #[test]
    fn invalid_url_maps_to_config_error() {
        let error = url::Url::parse("not a url").unwrap_err();
        let mapped: SyncError = InfraError::from(error).into();
        assert!(matches!(mapped, SyncError::Config(_)));
    }
}
