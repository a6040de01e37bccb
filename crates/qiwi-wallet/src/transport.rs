//! HTTP transport seam
//!
//! [`WalletClient`](crate::WalletClient) builds a [`ProviderRequest`] and hands
//! it to a [`Transport`]. The default [`HttpTransport`] sends it with reqwest;
//! tests substitute their own implementation.

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Client, Method};

use crate::config::WalletConfig;
use crate::error::{WalletError, WalletResult};

/// One request to the provider
#[derive(Debug, Clone)]
pub struct ProviderRequest {
    pub method: Method,
    /// Path below the provider host, starting with `/`
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: HeaderMap,
    pub body: Option<serde_json::Value>,
}

impl ProviderRequest {
    pub fn get(path: impl Into<String>, headers: HeaderMap) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            query: Vec::new(),
            headers,
            body: None,
        }
    }

    pub fn post(path: impl Into<String>, headers: HeaderMap, body: serde_json::Value) -> Self {
        Self {
            method: Method::POST,
            path: path.into(),
            query: Vec::new(),
            headers,
            body: Some(body),
        }
    }

    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }
}

/// Raw provider answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderResponse {
    pub status: u16,
    pub body: String,
}

impl ProviderResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes provider requests. Implementations must not retry.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: ProviderRequest) -> WalletResult<ProviderResponse>;

    /// Host requests are sent to, when the transport has one
    fn base_url(&self) -> Option<&str> {
        None
    }
}

/// reqwest-backed transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: String,
    client: Client,
}

impl HttpTransport {
    pub fn new(config: &WalletConfig) -> WalletResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| WalletError::Config(e.to_string()))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    fn base_url(&self) -> Option<&str> {
        Some(&self.base_url)
    }

    async fn execute(&self, request: ProviderRequest) -> WalletResult<ProviderResponse> {
        let url = format!("{}{}", self.base_url, request.path);

        let mut builder = self
            .client
            .request(request.method, &url)
            .headers(request.headers);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let resp = builder.send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;

        Ok(ProviderResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        assert!(ProviderResponse::new(200, "").is_success());
        assert!(ProviderResponse::new(204, "").is_success());
        assert!(!ProviderResponse::new(302, "").is_success());
        assert!(!ProviderResponse::new(401, "").is_success());
    }

    #[test]
    fn test_http_transport_strips_trailing_slash() {
        let mut config = WalletConfig::default();
        config.base_url = "http://localhost:9000/".to_string();
        let transport = HttpTransport::new(&config).unwrap();
        assert_eq!(transport.base_url(), "http://localhost:9000");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        let config = WalletConfig::default().base_url("http://127.0.0.1:1");
        let transport = HttpTransport::new(&config).unwrap();
        let err = transport
            .execute(ProviderRequest::get("/ping", HeaderMap::new()))
            .await
            .unwrap_err();
        assert!(matches!(err, WalletError::Transport(_)));
    }
}
