//! Typed HTTP client for the gateway API.
//!
//! Every call is (method, path, optional query, optional JSON body) with the
//! stored bearer token attached, and every response is the standard envelope.
//! The transport behind the client is swappable: demo mode dispatches straight
//! into the in-process mock registry, otherwise requests go over the wire to
//! the configured base URL.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::http::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::api::{Envelope, PageMeta};
use crate::config::config;
use crate::mock::{MockApi, MockError};
use crate::state::StateStore;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid base url: {0}")]
    BaseUrl(#[from] url::ParseError),
    #[error("{0}")]
    Api(String),
    #[error("endpoint not found: {0}")]
    UnknownEndpoint(String),
    #[error("response missing data payload")]
    MissingData,
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// One API call, transport-agnostic
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    pub bearer: Option<String>,
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<Envelope, ClientError>;
}

/// Real transport: reqwest against the configured gateway base URL
pub struct HttpTransport {
    http: reqwest::Client,
    base: Url,
}

impl HttpTransport {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        // A trailing slash makes Url::join keep the last path segment
        let base = Url::parse(&format!("{}/", base_url.trim_end_matches('/')))?;
        Ok(Self { http, base })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<Envelope, ClientError> {
        let url = self.base.join(request.path.trim_start_matches('/'))?;

        let mut builder = self.http.request(request.method, url).query(&request.query);
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        Ok(response.json::<Envelope>().await?)
    }
}

/// Demo transport: in-process dispatch into the mock registry, no network
pub struct MockTransport {
    api: Arc<MockApi>,
    store: Arc<StateStore>,
}

impl MockTransport {
    pub fn new(api: Arc<MockApi>, store: Arc<StateStore>) -> Self {
        Self { api, store }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<Envelope, ClientError> {
        let role = self.store.demo_role().await;
        let query: HashMap<String, String> = request.query.into_iter().collect();

        self.api
            .respond(&request.method, &request.path, &query, request.body.as_ref(), role)
            .await
            .map_err(|e| match e {
                MockError::UnknownEndpoint { method, path } => {
                    ClientError::UnknownEndpoint(format!("{} {}", method, path))
                }
                MockError::InvalidBody(msg) => ClientError::Api(msg),
                MockError::Serialize(e) => ClientError::Decode(e),
            })
    }
}

pub struct GatewayClient {
    transport: Arc<dyn Transport>,
    store: Arc<StateStore>,
}

impl GatewayClient {
    pub fn new(transport: Arc<dyn Transport>, store: Arc<StateStore>) -> Self {
        Self { transport, store }
    }

    /// Pick the transport from config/state: fixtures in demo mode, HTTP otherwise
    pub async fn from_config(
        mock: Arc<MockApi>,
        store: Arc<StateStore>,
    ) -> Result<Self, ClientError> {
        let cfg = config();
        let transport: Arc<dyn Transport> = if store.demo_mode().await {
            Arc::new(MockTransport::new(mock, store.clone()))
        } else {
            Arc::new(HttpTransport::new(
                &cfg.api.base_url,
                cfg.api.request_timeout_secs,
            )?)
        };
        Ok(Self::new(transport, store))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let envelope = self.dispatch(Method::GET, path, &[], None).await?;
        Self::extract(envelope)
    }

    pub async fn get_with<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ClientError> {
        let envelope = self.dispatch(Method::GET, path, query, None).await?;
        Self::extract(envelope)
    }

    /// GET a list endpoint, returning the rows plus the pagination block
    pub async fn get_paged<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<(T, Option<PageMeta>), ClientError> {
        let envelope = self.dispatch(Method::GET, path, query, None).await?;
        let meta = envelope.meta;
        Ok((Self::extract(envelope)?, meta))
    }

    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Value,
    ) -> Result<T, ClientError> {
        let envelope = self.dispatch(Method::POST, path, &[], Some(body)).await?;
        Self::extract(envelope)
    }

    pub async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Value,
    ) -> Result<T, ClientError> {
        let envelope = self.dispatch(Method::PUT, path, &[], Some(body)).await?;
        Self::extract(envelope)
    }

    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<Value>,
    ) -> Result<Envelope, ClientError> {
        if config().api.enable_request_logging {
            tracing::debug!("api request: {} {}", method, path);
        }

        let request = ApiRequest {
            method,
            path: path.to_string(),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            body,
            bearer: self.store.auth_token().await,
        };
        self.transport.send(request).await
    }

    fn extract<T: DeserializeOwned>(envelope: Envelope) -> Result<T, ClientError> {
        if !envelope.success {
            return Err(ClientError::Api(
                envelope.error.unwrap_or_else(|| "request failed".to_string()),
            ));
        }
        let data = envelope.data.ok_or(ClientError::MissingData)?;
        Ok(serde_json::from_value(data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Identity, Invoice, Preferences};
    use crate::state::ClientState;
    use crate::types::Role;
    use serde_json::json;

    fn demo_client() -> GatewayClient {
        let store = Arc::new(StateStore::in_memory(ClientState::default()));
        let transport = MockTransport::new(Arc::new(MockApi::new()), store.clone());
        GatewayClient::new(Arc::new(transport), store)
    }

    #[tokio::test]
    async fn typed_get_decodes_the_data_payload() {
        let client = demo_client();
        let me: Identity = client.get("auth/me").await.unwrap();
        assert_eq!(me.role, Role::SuperAdmin);
    }

    #[tokio::test]
    async fn paged_get_surfaces_meta() {
        let client = demo_client();
        let (rows, meta): (Vec<Invoice>, _) = client
            .get_paged("payment/invoices", &[("page", "1"), ("limit", "4")])
            .await
            .unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(meta.unwrap().limit, 4);
    }

    #[tokio::test]
    async fn put_round_trips_preferences() {
        let client = demo_client();
        let updated: Preferences = client
            .put("user/preferences", json!({ "theme": "dark" }))
            .await
            .unwrap();
        assert_eq!(updated.theme, "dark");
    }

    #[tokio::test]
    async fn unknown_endpoint_maps_to_client_error() {
        let client = demo_client();
        let err = client.get::<Identity>("nope/nothing").await.unwrap_err();
        assert!(matches!(err, ClientError::UnknownEndpoint(_)));
    }
}
