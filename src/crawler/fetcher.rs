//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler:
//! - Building the HTTP client from the configured timeout, TLS mode and user agent
//! - HEAD requests to check Content-Type
//! - GET requests to fetch page content
//!
//! There is no retry logic. A failed request prunes the branch it belongs to.

use crate::config::HttpConfig;
use crate::KrawlError;
use reqwest::{header::CONTENT_TYPE, redirect::Policy, Client};
use std::time::Duration;

/// MIME type of the only pages the crawler descends into
pub const HTML_CONTENT_TYPE: &str = "text/html";

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The HTTP configuration (timeout, TLS verification, user agent)
///
/// # Example
///
/// ```no_run
/// use krawler::config::HttpConfig;
/// use krawler::crawler::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_secs))
        .redirect(Policy::limited(10))
        .danger_accept_invalid_certs(config.insecure)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Returns the primary token of a Content-Type header value
///
/// `text/html; charset=utf-8` becomes `text/html`.
pub fn primary_mime_type(header: &str) -> String {
    header
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase()
}

/// HEAD/GET capability used by the traversal engine
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Creates a fetcher from the HTTP configuration
    pub fn new(config: &HttpConfig) -> Result<Self, KrawlError> {
        Ok(Self {
            client: build_http_client(config)?,
        })
    }

    /// Wraps an already configured client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Sends a HEAD request and returns the primary MIME type of the response
    ///
    /// A response without a Content-Type header yields an empty string.
    pub async fn content_type(&self, url: &str) -> Result<String, KrawlError> {
        let response = self
            .client
            .head(url)
            .send()
            .await
            .map_err(|source| transport(url, source))?;

        tracing::trace!("HEAD {} -> {}", url, response.status());

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(primary_mime_type)
            .unwrap_or_default();

        Ok(content_type)
    }

    /// Sends a GET request and returns the decoded body
    pub async fn fetch_body(&self, url: &str) -> Result<String, KrawlError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| transport(url, source))?;

        tracing::trace!("GET {} -> {}", url, response.status());

        response.text().await.map_err(|source| transport(url, source))
    }
}

fn transport(url: &str, source: reqwest::Error) -> KrawlError {
    KrawlError::Transport {
        url: url.to_string(),
        source,
    }
}
