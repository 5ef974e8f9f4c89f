//! HTTP backend abstraction for the HATX API.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. The production implementation
//! uses reqwest. Each call is a single round trip; failures surface to the
//! caller as-is, with no retry or status-code translation.

use crate::config::HatxClientConfig;
use crate::error::{HatxError, HatxResult};
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can exchange JSON and text with the service.
///
/// This abstraction allows for dependency injection of HTTP clients,
/// making it easy to test code that depends on HTTP requests. Supply a
/// custom implementation via [`crate::HatxClient::with_backend`].
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Fetch JSON from a URL and deserialize it.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> HatxResult<T>;

    /// Fetch a raw text body from a URL.
    async fn get_text(&self, url: &Url) -> HatxResult<String>;

    /// POST a JSON body to a URL and deserialize the JSON response.
    async fn post_json<T, B>(&self, url: &Url, body: &B) -> HatxResult<T>
    where
        T: DeserializeOwned + Send,
        B: Serialize + Sync;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
///
/// Connection pooling and timeouts are reqwest's responsibility; this type
/// only maps responses to results. Non-2xx statuses become
/// [`HatxError::ApiRequestFailed`].
pub struct ReqwestBackend {
    client: reqwest::Client,
    headers: Vec<(String, String)>,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &HatxClientConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .expect("failed to create HTTP client");

        Self {
            client,
            headers: config.headers.clone(),
        }
    }

    /// Apply configured extra headers to a request.
    fn apply_headers(&self, mut request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        for (name, value) in &self.headers {
            request = request.header(name, value);
        }
        request
    }

    /// Send a request and reject non-success statuses.
    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        url: &Url,
    ) -> HatxResult<reqwest::Response> {
        let response = self.apply_headers(request).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(HatxError::ApiRequestFailed {
                status: status.as_u16(),
                url: url.to_string(),
            })
        }
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> HatxResult<T> {
        let response = self.send(self.client.get(url.as_str()), url).await?;
        let data: T = response.json().await?;
        Ok(data)
    }

    async fn get_text(&self, url: &Url) -> HatxResult<String> {
        let response = self.send(self.client.get(url.as_str()), url).await?;
        Ok(response.text().await?)
    }

    async fn post_json<T, B>(&self, url: &Url, body: &B) -> HatxResult<T>
    where
        T: DeserializeOwned + Send,
        B: Serialize + Sync,
    {
        let request = self.client.post(url.as_str()).json(body);
        let response = self.send(request, url).await?;
        let data: T = response.json().await?;
        Ok(data)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
