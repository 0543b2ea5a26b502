use crate::output::OutputFormat;
use serde::Deserialize;

/// Main configuration structure for Krawler
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub crawler: CrawlerConfig,
    pub http: HttpConfig,
    pub output: OutputConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Maximum depth to crawl (0 = unbounded, 1 = root only)
    #[serde(rename = "max-depth")]
    pub max_depth: u32,

    /// Include each page's MIME type in its record
    #[serde(rename = "include-mime")]
    pub include_mime: bool,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            include_mime: false,
        }
    }
}

/// HTTP transport configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Seconds to wait for a response before giving up on a link
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Accept self-signed, expired and otherwise invalid certificates
    pub insecure: bool,

    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 3,
            insecure: false,
            user_agent: format!("krawler/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Encoding of the crawl result
    pub format: OutputFormat,

    /// File to write to; standard error when absent
    pub path: Option<String>,
}
