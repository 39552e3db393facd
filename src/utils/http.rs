//! HTTP client utilities.

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

use crate::error::DdbError;

/// Shared HTTP client with sensible defaults.
///
/// Wraps a [`reqwest::Client`] and adds status checking plus decode helpers
/// so every call site reports failures the same way.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Arc<Client>,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, DdbError> {
        Self::with_user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
    }

    /// Create a new HTTP client with a custom user agent
    pub fn with_user_agent(user_agent: &str) -> Result<Self, DdbError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| DdbError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client: Arc::new(client),
        })
    }

    /// Create from an existing reqwest Client
    pub fn from_client(client: Arc<Client>) -> Self {
        Self { client }
    }

    /// Get the underlying client
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// GET `url` and decode the JSON body into `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, DdbError> {
        let response = self.checked_get(url).await?;
        response
            .json()
            .await
            .map_err(|e| DdbError::Parse(format!("Failed to decode JSON from {}: {}", url, e)))
    }

    /// GET `url` and return the body as text.
    pub async fn get_text(&self, url: &str) -> Result<String, DdbError> {
        let response = self.checked_get(url).await?;
        Ok(response.text().await?)
    }

    /// GET `url` and return the raw body bytes.
    pub async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, DdbError> {
        let response = self.checked_get(url).await?;
        Ok(response.bytes().await?.to_vec())
    }

    async fn checked_get(&self, url: &str) -> Result<reqwest::Response, DdbError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DdbError::Network(format!("Request to {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DdbError::Api {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response)
    }
}
