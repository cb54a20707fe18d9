// Book Client - Catalog form controller for the books REST API
// Copyright (C) 2025 Book Client contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.


//! HTTP client for the books API
//!
//! This module provides a thin wrapper over `reqwest::Client`:
//! - Base URL management
//! - Default headers (User-Agent, Accept)
//! - JSON request/response handling
//! - Mapping of statuses and transport failures onto [`BookClientError`]
//!
//! # Failure Policy
//! Every call is a single attempt. There is no retry, no backoff and no token handling.
//! Any non-2xx status is an error regardless of class, and the error body is kept only
//! as diagnostic text.

use crate::error::{BookClientError, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Default API location when nothing is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable overriding the base URL
pub const BASE_URL_ENV: &str = "BOOK_API_BASE_URL";

/// Environment variable overriding the timeout, in whole seconds
pub const TIMEOUT_ENV: &str = "BOOK_API_TIMEOUT_SECS";

/// Configuration for BooksClient
/// Provides a builder pattern for client customization
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("book-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Builder seeded with this configuration, for layering overrides on top
    pub fn to_builder(&self) -> ClientConfigBuilder {
        ClientConfigBuilder {
            config: self.clone(),
        }
    }

    /// Defaults overlaid with `BOOK_API_BASE_URL` and `BOOK_API_TIMEOUT_SECS`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(base_url) = lookup(BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            builder = builder.base_url(base_url.trim());
        }

        if let Some(raw) = lookup(TIMEOUT_ENV).filter(|v| !v.trim().is_empty()) {
            let secs = raw.trim().parse::<u64>().map_err(|e| {
                BookClientError::invalid_config(format!("{}={:?}: {}", TIMEOUT_ENV, raw, e))
            })?;
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(builder.build())
    }
}

/// Builder for ClientConfig
#[derive(Debug)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl Default for ClientConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
        }
    }

    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    pub fn build(self) -> ClientConfig {
        self.config
    }
}

/// HTTP client for the books API
///
/// # Example
/// ```rust,no_run
/// use book_client::api::{BooksApi, BooksClient};
///
/// # async fn example() -> book_client::error::Result<()> {
/// let client = BooksClient::new("http://localhost:8080")?;
/// let books = client.list_books().await?;
/// println!("{} books", books.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct BooksClient {
    /// Underlying HTTP client
    client: Client,
    /// API base URL without trailing slash (e.g., http://localhost:8080)
    base_url: String,
}

impl BooksClient {
    /// Create a client for the given base URL with default settings
    pub fn new<S: Into<String>>(base_url: S) -> Result<Self> {
        Self::with_config(ClientConfig::builder().base_url(base_url).build())
    }

    /// Create a client with custom configuration
    ///
    /// # Errors
    /// Returns error if the base URL is not an http(s) URL or the HTTP client cannot be built
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let parsed = Url::parse(&config.base_url).map_err(|e| {
            BookClientError::invalid_config(format!("base URL {:?}: {}", config.base_url, e))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(BookClientError::invalid_config(format!(
                "base URL {:?} must use http or https",
                config.base_url
            )));
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent).map_err(|e| {
                BookClientError::invalid_config(format!("Invalid user agent: {}", e))
            })?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Get the API base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Perform a GET request and decode the JSON response
    pub async fn get<T>(&self, endpoint: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self.send(Method::GET, endpoint, None::<&()>).await?;
        self.decode(response).await
    }

    /// Perform a POST request with a JSON body
    pub async fn post<T, B>(&self, endpoint: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let response = self.send(Method::POST, endpoint, Some(body)).await?;
        self.decode(response).await
    }

    /// Perform a PUT request with a JSON body
    pub async fn put<T, B>(&self, endpoint: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let response = self.send(Method::PUT, endpoint, Some(body)).await?;
        self.decode(response).await
    }

    /// Perform a DELETE request; any response body is ignored
    pub async fn delete(&self, endpoint: &str) -> Result<()> {
        self.send(Method::DELETE, endpoint, None::<&()>).await?;
        Ok(())
    }

    /// Send one request and reject non-success statuses
    async fn send<B>(&self, method: Method, endpoint: &str, body: Option<&B>) -> Result<Response>
    where
        B: Serialize,
    {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(%method, endpoint, "sending books API request");

        let mut request = self.client.request(method, &url);
        if let Some(b) = body {
            request = request.json(b);
        }

        let response = request
            .send()
            .await
            .map_err(|e| BookClientError::network_error(format!("Request to {} failed: {}", endpoint, e)))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();
        Err(BookClientError::api_failed(
            if error_body.is_empty() {
                status.to_string()
            } else {
                format!("{}: {}", status, error_body)
            },
            Some(status.as_u16()),
            Some(endpoint.to_string()),
        ))
    }

    /// Decode a successful JSON response
    async fn decode<T>(&self, response: Response) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        let endpoint = response.url().path().to_string();

        let response_text = response.text().await.map_err(|e| BookClientError::ApiRequestFailed {
            message: format!("Failed to read response body: {}", e),
            status_code: Some(status.as_u16()),
            endpoint: Some(endpoint.clone()),
        })?;

        serde_json::from_str::<T>(&response_text).map_err(|e| BookClientError::InvalidApiResponse {
            message: format!("{} at line {} col {} ({})", e, e.line(), e.column(), endpoint),
            response_body: Some(response_text),
        })
    }
}
