//! HTTP client implementation for the Home Assistant REST API
//!
//! Every call is a single fire-and-report request: success is strictly
//! HTTP 200, anything else surfaces as an error carrying the status code and
//! response body. Retry and backoff are deliberately absent; timeouts are
//! whatever the underlying reqwest client enforces.

use crate::client::{EntityState, HassClient};
use crate::config::ConnectionConfig;
use crate::error::{HassError, Result};
use async_trait::async_trait;
use reqwest::{header, Client, ClientBuilder, StatusCode};
use serde_json::Value;
use tracing::{debug, error, info};
use url::Url;

/// HTTP client for a Home Assistant hub
pub struct HassHttpClient {
    /// HTTP client instance with bearer auth installed as a default header
    client: Client,

    /// Base URL built from the connection config
    base_url: Url,
}

impl HassHttpClient {
    /// Create a new HTTP client from validated connection parameters
    pub fn new(config: &ConnectionConfig) -> Result<Self> {
        config.validate()?;

        let auth_header = format!("Bearer {}", config.access_token);
        let mut default_headers = header::HeaderMap::new();
        let header_value = header::HeaderValue::from_str(&auth_header)
            .map_err(|e| HassError::config(format!("Invalid access token: {e}")))?;
        default_headers.insert(header::AUTHORIZATION, header_value);
        default_headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = ClientBuilder::new()
            .default_headers(default_headers)
            .user_agent(format!("hass-point-driver/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| HassError::hub_request(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url()?,
        })
    }

    /// Build URL for an API endpoint path
    fn build_url(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| HassError::hub_request(format!("Invalid URL path {path}: {e}")))
    }
}

#[async_trait]
impl HassClient for HassHttpClient {
    async fn get_entity_state(&self, entity_id: &str) -> Result<EntityState> {
        let url = self.build_url(&format!("/api/states/{entity_id}"))?;
        debug!("Fetching entity state from {url}");

        let response = self.client.get(url).send().await.map_err(|e| {
            HassError::hub_request(format!("State request for {entity_id} failed: {e}"))
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            let msg = format!(
                "Request failed with status code {status}, entity: {entity_id}, response: {body}"
            );
            error!("{msg}");
            return Err(HassError::hub_request(msg));
        }

        let entity_state = response.json::<EntityState>().await?;
        Ok(entity_state)
    }

    async fn call_service(&self, domain: &str, service: &str, payload: Value) -> Result<()> {
        let url = self.build_url(&format!("/api/services/{domain}/{service}"))?;
        info!("Calling Home Assistant service: url={url}, payload={payload}");

        let response = self
            .client
            .post(url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                HassError::hub_request(format!("Error calling {domain}/{service}: {e}"))
            })?;

        let status = response.status();
        if status == StatusCode::OK {
            debug!("Service call {domain}/{service} succeeded");
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            let msg = format!(
                "Failed to call {domain}/{service}. Status code: {status}. Response: {body}"
            );
            error!("{msg}");
            Err(HassError::hub_request(msg))
        }
    }
}
