//! Krawler: a scope-bounded web crawler
//!
//! This crate walks a site depth-first from a root page, following only links
//! that stay on the root's registrable domain and subdomain, extracts the
//! visible text of every HTML page it visits, and emits a trace of the crawl
//! as a plain-text stream or as a structured JSON/YAML document.

pub mod config;
pub mod crawler;
pub mod output;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for Krawler operations
#[derive(Debug, Error)]
pub enum KrawlError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] UrlError),

    #[error("Request to {url} failed: {source}")]
    Transport { url: String, source: reqwest::Error },

    #[error("Supplied link is not an html document (expected text/html, got {content_type}): {url}")]
    UnsupportedContentType { url: String, content_type: String },

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL '{url}': {source}")]
    Parse {
        url: String,
        source: ::url::ParseError,
    },

    #[error("Missing domain in URL: {0}")]
    MissingDomain(String),
}

/// Result type alias for Krawler operations
pub type Result<T> = std::result::Result<T, KrawlError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{CrawlOptions, Crawler, Fetcher};
pub use output::{OutputFormat, PageRecord, ResultSink};
pub use state::{PageState, VisitedSet};
pub use crate::url::{canonicalize, in_scope, CanonicalUrl, CrawlScope};
