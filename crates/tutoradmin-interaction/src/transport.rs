//! Wire-level HTTP transport.
//!
//! [`HttpTransport`] is the seam between the typed client and the network.
//! It performs one exchange and reports what came back without judging the
//! status code; classification happens in [`crate::client::ApiClient`].

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, Method};
use std::time::Duration;
use tutoradmin_core::config::ClientConfig;
use tutoradmin_core::error::{AdminError, Result};

/// A fully built request: absolute URL, headers and optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl HttpRequest {
    /// Looks up a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Whatever the server answered, before status classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            content_type: None,
            body: body.into(),
        }
    }

    /// A response carrying a JSON body.
    pub fn json(status: u16, value: &serde_json::Value) -> Self {
        Self {
            status,
            content_type: Some("application/json".to_string()),
            body: value.to_string().into_bytes(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs a single HTTP exchange.
///
/// # Implementation Notes
///
/// Implementations must return `Ok` for every response that arrived, whatever
/// its status, and `AdminError::Network` when none did.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<RawResponse>;
}

/// [`HttpTransport`] backed by a pooled `reqwest::Client`.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Builds a transport with the timeouts from `config`.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Self::with_timeouts(config.timeout(), config.connect_timeout())
    }

    pub fn with_timeouts(timeout: Duration, connect_timeout: Duration) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| AdminError::config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    /// Wraps an existing client, keeping its configuration.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<RawResponse> {
        let mut builder = self.client.request(request.method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(classify_send_error)?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response
            .bytes()
            .await
            .map_err(|e| AdminError::network(format!("Failed to read response body: {}", e)))?;

        Ok(RawResponse {
            status,
            content_type,
            body: body.to_vec(),
        })
    }
}

fn classify_send_error(err: reqwest::Error) -> AdminError {
    if err.is_builder() {
        AdminError::config(format!("Invalid request: {}", err))
    } else if err.is_timeout() {
        AdminError::network(format!("Request timed out: {}", err))
    } else {
        AdminError::network(format!("Request failed: {}", err))
    }
}
