//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching (HEAD content check, GET body)
//! - HTML tokenizing and visible-text extraction
//! - Link discovery
//! - Depth-first traversal coordination

mod coordinator;
mod extract;
mod fetcher;
mod parser;

pub use coordinator::{CrawlOptions, CrawlTask, Crawler};
pub use extract::{extract_text, tokenize, PageToken};
pub use fetcher::{build_http_client, primary_mime_type, Fetcher, HTML_CONTENT_TYPE};
pub use parser::{extract_hrefs, is_crawlable_scheme};

use crate::config::Config;
use crate::output::{CrawlStats, ResultSink};
use crate::KrawlError;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Build the HTTP client
/// 2. Canonicalize the root and derive the crawl scope
/// 3. Check that the root is an HTML page
/// 4. Traverse the site depth-first, recording each page into `sink`
/// 5. Finalize the sink
///
/// # Arguments
///
/// * `root` - The URL to start from
/// * `config` - The crawler configuration
/// * `sink` - Where page records go
///
/// # Returns
///
/// * `Ok(CrawlStats)` - Crawl completed
/// * `Err(KrawlError)` - The root could not be crawled or the output could not be written
pub async fn crawl<S: ResultSink>(root: &str, config: &Config, sink: S) -> Result<CrawlStats, KrawlError> {
    let fetcher = Fetcher::new(&config.http)?;
    let options = CrawlOptions {
        max_depth: config.crawler.max_depth,
        include_mime: config.crawler.include_mime,
    };

    let mut crawler = Crawler::new(root, fetcher, options, sink)?;
    crawler.run().await
}
