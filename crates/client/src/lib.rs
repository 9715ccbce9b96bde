//! HTTP client for the ad service.
//!
//! Thin wrapper over `reqwest` that returns the raw status and JSON body
//! so callers can inspect error envelopes as well as successes.

use std::time::Duration;

use reqwest::{Method, StatusCode, Url};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Default service address.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";

/// Client errors.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),
}

/// Status and decoded body of a service response.
#[derive(Debug, Clone)]
pub struct ClientResponse {
    pub status: StatusCode,
    /// JSON body, or `Value::Null` if the body was empty or not JSON
    pub body: Value,
}

impl ClientResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Fields sent on create and patch.
#[derive(Debug, Clone, Serialize)]
pub struct AdRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub content: String,
    pub owner: String,
}

/// Ad service client.
#[derive(Clone)]
pub struct AdClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl AdClient {
    /// Creates a new client for the service at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let base_url = parse_base_url(&base_url.into())?;

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            base_url,
            http_client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST /ads
    pub async fn create(&self, ad: &AdRequest) -> Result<ClientResponse, ClientError> {
        self.send(Method::POST, "/ads", Some(ad)).await
    }

    /// GET /ads/{id}
    pub async fn get(&self, id: i64) -> Result<ClientResponse, ClientError> {
        self.send::<()>(Method::GET, &format!("/ads/{}", id), None)
            .await
    }

    /// PATCH /ads/{id}
    pub async fn update(&self, id: i64, ad: &AdRequest) -> Result<ClientResponse, ClientError> {
        self.send(Method::PATCH, &format!("/ads/{}", id), Some(ad))
            .await
    }

    /// DELETE /ads/{id}
    pub async fn delete(&self, id: i64) -> Result<ClientResponse, ClientError> {
        self.send::<()>(Method::DELETE, &format!("/ads/{}", id), None)
            .await
    }

    /// GET /ads
    pub async fn list(&self) -> Result<ClientResponse, ClientError> {
        self.send::<()>(Method::GET, "/ads", None).await
    }

    async fn send<T: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&T>,
    ) -> Result<ClientResponse, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http_client.request(method, &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        Ok(ClientResponse { status, body })
    }
}

/// Parse and normalize a service base URL (no trailing slash).
fn parse_base_url(raw: &str) -> Result<String, ClientError> {
    let url = Url::parse(raw).map_err(|e| ClientError::InvalidBaseUrl(format!("{}: {}", raw, e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ClientError::InvalidBaseUrl(format!(
            "{}: unsupported scheme {}",
            raw,
            url.scheme()
        )));
    }
    if url.host_str().is_none() {
        return Err(ClientError::InvalidBaseUrl(format!("{}: missing host", raw)));
    }

    Ok(url.as_str().trim_end_matches('/').to_string())
}
