//! The [`DdbClient`] handle: auth token, HTTP client and endpoint set.

use std::sync::Arc;

use crate::error::DdbError;
use crate::utils::HttpClient;

/// Base URLs of the remote services the client talks to.
///
/// Defaults point at the production DDB hosts. Overriding them is mainly
/// useful for pointing the client at a mock server in tests.
#[derive(Debug, Clone)]
pub struct Endpoints {
    /// Search and item detail API
    pub api_base: String,
    /// Portal host serving the per-object XML representation
    pub portal_base: String,
    /// IIIF image service serving thumbnails by UUID
    pub image_base: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            api_base: "https://api.deutsche-digitale-bibliothek.de".to_string(),
            portal_base: "https://www.deutsche-digitale-bibliothek.de".to_string(),
            image_base: "https://iiif.deutsche-digitale-bibliothek.de/image/2".to_string(),
        }
    }
}

/// Client for the Deutsche Digitale Bibliothek REST API.
///
/// All operations are independent single request/response cycles (or bounded
/// loops of such cycles); the client keeps no state between calls beyond the
/// connection pool, so it can be shared and cloned freely.
#[derive(Debug, Clone)]
pub struct DdbClient {
    pub(crate) http: HttpClient,
    pub(crate) api_key: String,
    pub(crate) endpoints: Endpoints,
}

impl DdbClient {
    /// Create a new client authenticating with the given API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self, DdbError> {
        Ok(Self {
            http: HttpClient::new()?,
            api_key: api_key.into(),
            endpoints: Endpoints::default(),
        })
    }

    /// Create a client against a custom endpoint set (for testing).
    pub fn with_endpoints(
        api_key: impl Into<String>,
        endpoints: Endpoints,
    ) -> Result<Self, DdbError> {
        Ok(Self {
            http: HttpClient::new()?,
            api_key: api_key.into(),
            endpoints,
        })
    }

    /// Create a client from an existing reqwest client.
    pub fn from_client(api_key: impl Into<String>, client: Arc<reqwest::Client>) -> Self {
        Self {
            http: HttpClient::from_client(client),
            api_key: api_key.into(),
            endpoints: Endpoints::default(),
        }
    }

    /// The API key this client authenticates with.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The endpoint set this client is bound to.
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = DdbClient::new("secret");
        assert!(client.is_ok());
        assert_eq!(client.unwrap().api_key(), "secret");
    }

    #[test]
    fn test_default_endpoints() {
        let endpoints = Endpoints::default();
        assert!(endpoints.api_base.starts_with("https://api."));
        assert!(endpoints.portal_base.starts_with("https://www."));
    }

    #[test]
    fn test_custom_endpoints() {
        let endpoints = Endpoints {
            api_base: "http://localhost:1234".to_string(),
            portal_base: "http://localhost:1234".to_string(),
            image_base: "http://localhost:1234".to_string(),
        };
        let client = DdbClient::with_endpoints("secret", endpoints).unwrap();
        assert_eq!(client.endpoints().api_base, "http://localhost:1234");
    }
}
