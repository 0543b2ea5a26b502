//! Crawler coordinator - the traversal engine
//!
//! This module contains the crawl loop that ties the pieces together:
//! - Canonicalizing the root and fixing the crawl scope
//! - Checking the root page before anything is recorded
//! - Walking every URL through its per-page state machine
//! - Discovering in-scope links and descending depth-first
//! - Handing records to the result sink
//!
//! Exactly one request is in flight at any time. Depth-first recursion is
//! expressed as a LIFO stack of [`CrawlTask`]s: children are pushed in reverse
//! document order, so pages are visited in the same pre-order, link-order
//! sequence a recursive walk would produce.

use crate::crawler::extract::{extract_text, tokenize};
use crate::crawler::fetcher::{Fetcher, HTML_CONTENT_TYPE};
use crate::crawler::parser::{extract_hrefs, is_crawlable_scheme};
use crate::output::{CrawlStats, PageRecord, ResultSink, ROOT_PARENT};
use crate::state::{PageState, VisitedSet};
use crate::url::{canonicalize, in_scope, CanonicalUrl, CrawlScope};
use crate::{KrawlError, UrlError};

/// Traversal settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrawlOptions {
    /// Deepest level to record; 0 = unbounded, 1 = root only
    pub max_depth: u32,

    /// Record each page's MIME type
    pub include_mime: bool,
}

impl Default for CrawlOptions {
    fn default() -> Self {
        Self {
            max_depth: 3,
            include_mime: false,
        }
    }
}

/// One unit of work: a URL waiting to be visited
#[derive(Debug, Clone)]
pub struct CrawlTask {
    pub url: CanonicalUrl,
    pub parent: String,
    pub depth: u32,
}

/// Main traversal engine
///
/// Owns everything that lives for exactly one crawl: the scope derived from
/// the root, the visited registry, the sink and the statistics.
pub struct Crawler<S: ResultSink> {
    fetcher: Fetcher,
    options: CrawlOptions,
    root: CanonicalUrl,
    scope: CrawlScope,
    visited: VisitedSet,
    sink: S,
    stats: CrawlStats,
}

impl<S: ResultSink> Crawler<S> {
    /// Creates a crawler for `root`
    ///
    /// The root is canonicalized and its scope derived here, before any
    /// request is made.
    ///
    /// # Returns
    ///
    /// * `Ok(Crawler)` - Ready to run
    /// * `Err(KrawlError::InvalidUrl)` - The root is not a URL or has no host
    pub fn new(root: &str, fetcher: Fetcher, options: CrawlOptions, sink: S) -> Result<Self, KrawlError> {
        let root = canonicalize(root, None)?;
        let scope = CrawlScope::from_url(root.as_url())
            .ok_or_else(|| UrlError::MissingDomain(root.to_string()))?;

        tracing::debug!(
            "Crawl scope: domain '{}', subdomain '{}'",
            scope.registrable_domain,
            scope.subdomain
        );

        Ok(Self {
            fetcher,
            options,
            root,
            scope,
            visited: VisitedSet::new(),
            sink,
            stats: CrawlStats::new(),
        })
    }

    pub fn root(&self) -> &CanonicalUrl {
        &self.root
    }

    pub fn scope(&self) -> &CrawlScope {
        &self.scope
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    pub fn stats(&self) -> &CrawlStats {
        &self.stats
    }

    /// Verifies that the root can be crawled at all
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The root answered a HEAD request with `text/html`
    /// * `Err(KrawlError::Transport)` - The root could not be reached
    /// * `Err(KrawlError::UnsupportedContentType)` - The root is not an HTML page
    pub async fn check_root(&self) -> Result<(), KrawlError> {
        let content_type = self.fetcher.content_type(self.root.as_str()).await?;
        if content_type != HTML_CONTENT_TYPE {
            return Err(KrawlError::UnsupportedContentType {
                url: self.root.to_string(),
                content_type,
            });
        }
        Ok(())
    }

    /// Runs the whole crawl
    ///
    /// Root failures are returned before anything is recorded. Failures on any
    /// other page only prune that page's branch. Once the traversal is done the
    /// sink is finalized; a finalize error is returned after the statistics are
    /// complete.
    pub async fn run(&mut self) -> Result<CrawlStats, KrawlError> {
        self.stats = CrawlStats::new();
        self.check_root().await?;

        tracing::info!(
            "Starting crawl of {} (max depth {})",
            self.root,
            self.options.max_depth
        );

        let mut stack = vec![CrawlTask {
            url: self.root.clone(),
            parent: ROOT_PARENT.to_string(),
            depth: 1,
        }];

        while let Some(task) = stack.pop() {
            let children = self.visit(task).await;
            stack.extend(children.into_iter().rev());
        }

        self.stats.finish();
        self.sink.finalize()?;

        Ok(self.stats.clone())
    }

    /// Walks one URL through its state machine
    ///
    /// Returns the tasks for the in-scope links of the page, in document order.
    async fn visit(&mut self, task: CrawlTask) -> Vec<CrawlTask> {
        let mut state = PageState::Canonicalized;

        if !self.visited.mark_if_new(&task.url) {
            tracing::trace!("Already visited {}", task.url);
            self.finish(task.url.as_str(), state, PageState::DedupedSkip);
            return Vec::new();
        }

        let content_type = match self.fetcher.content_type(task.url.as_str()).await {
            Ok(content_type) => content_type,
            Err(e) => {
                tracing::warn!("Error performing HEAD request on {}: {}", task.url, e);
                self.finish(task.url.as_str(), state, PageState::TransportFailed);
                return Vec::new();
            }
        };
        state = self.advance(task.url.as_str(), state, PageState::Checked);

        if content_type != HTML_CONTENT_TYPE {
            tracing::debug!("Skipping {} ({})", task.url, content_type);
            self.finish(task.url.as_str(), state, PageState::NonHtmlSkip);
            return Vec::new();
        }
        state = self.advance(task.url.as_str(), state, PageState::Html);

        // Directory form anchors relative links; it is a distinct key, so claim it too
        let page_url = task.url.with_trailing_slash();
        if page_url != task.url && !self.visited.mark_if_new(&page_url) {
            tracing::trace!("Already visited {}", page_url);
            self.finish(page_url.as_str(), state, PageState::DedupedSkip);
            return Vec::new();
        }

        let body = match self.fetcher.fetch_body(page_url.as_str()).await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("Error fetching {}: {}", page_url, e);
                self.finish(page_url.as_str(), state, PageState::TransportFailed);
                return Vec::new();
            }
        };
        state = self.advance(page_url.as_str(), state, PageState::Fetched);

        let content = extract_text(tokenize(&body));
        state = self.advance(page_url.as_str(), state, PageState::Extracted);

        let record = PageRecord {
            url: page_url.to_string(),
            parent_url: task.parent,
            content_type: if self.options.include_mime {
                content_type
            } else {
                String::new()
            },
            depth: task.depth,
            content: content.trim_end_matches('\n').to_string(),
        };
        if let Err(e) = self.sink.record(record) {
            tracing::warn!("Error writing record for {}: {}", page_url, e);
        }
        state = self.advance(page_url.as_str(), state, PageState::Recorded);

        if self.at_depth_limit(task.depth) {
            self.finish(page_url.as_str(), state, PageState::LeafAtDepthLimit);
            return Vec::new();
        }

        let children: Vec<CrawlTask> = self
            .discover_links(&body, &page_url)
            .into_iter()
            .map(|url| CrawlTask {
                url,
                parent: page_url.to_string(),
                depth: task.depth + 1,
            })
            .collect();

        self.finish(page_url.as_str(), state, PageState::Expanded);
        children
    }

    /// Resolves every anchor on the page and keeps the in-scope ones
    ///
    /// Links equal to the page itself are dropped. Order and duplicates are
    /// preserved; duplicates are deduped when they are visited.
    fn discover_links(&mut self, body: &str, page_url: &CanonicalUrl) -> Vec<CanonicalUrl> {
        let mut links = Vec::new();

        for href in extract_hrefs(body) {
            let link = match canonicalize(&href, Some(page_url)) {
                Ok(link) => link,
                Err(e) => {
                    tracing::warn!("Error parsing found URL {}: {}", href, e);
                    self.stats.record(PageState::RejectedInvalid);
                    continue;
                }
            };

            if !is_crawlable_scheme(link.as_url().scheme())
                || !in_scope(&link, &self.scope)
                || &link == page_url
            {
                continue;
            }

            if let Err(e) = self.sink.link_discovered(link.as_str()) {
                tracing::warn!("Error writing discovered link {}: {}", link, e);
            }
            self.stats.links_discovered += 1;
            links.push(link);
        }

        links
    }

    fn at_depth_limit(&self, depth: u32) -> bool {
        self.options.max_depth != 0 && depth == self.options.max_depth
    }

    fn advance(&self, url: &str, from: PageState, to: PageState) -> PageState {
        debug_assert!(
            from.can_transition_to(to),
            "illegal page state transition {} -> {}",
            from,
            to
        );
        tracing::trace!("{}: {} -> {}", url, from, to);
        to
    }

    fn finish(&mut self, url: &str, from: PageState, terminal: PageState) {
        let terminal = self.advance(url, from, terminal);
        self.stats.record(terminal);
    }
}
