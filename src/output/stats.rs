//! Crawl statistics
//!
//! Counts the terminal state of every URL the traversal touched so a run can
//! be summarized once it finishes.

use crate::state::PageState;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Crawl statistics summary
#[derive(Debug, Clone)]
pub struct CrawlStats {
    /// When the traversal started
    pub started_at: DateTime<Utc>,

    /// When the traversal finished
    pub finished_at: Option<DateTime<Utc>>,

    /// Count of URLs by terminal state
    pub pages_by_state: HashMap<PageState, u64>,

    /// Number of in-scope links collected across all pages
    pub links_discovered: u64,
}

impl CrawlStats {
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            finished_at: None,
            pages_by_state: HashMap::new(),
            links_discovered: 0,
        }
    }

    /// Counts one URL ending in `state`
    pub fn record(&mut self, state: PageState) {
        *self.pages_by_state.entry(state).or_insert(0) += 1;
    }

    pub fn count(&self, state: PageState) -> u64 {
        self.pages_by_state.get(&state).copied().unwrap_or(0)
    }

    /// Number of URLs that reached a terminal state
    pub fn total(&self) -> u64 {
        self.pages_by_state.values().sum()
    }

    /// Number of pages that produced a record
    pub fn pages_recorded(&self) -> u64 {
        self.count(PageState::LeafAtDepthLimit) + self.count(PageState::Expanded)
    }

    /// Number of URLs pruned before producing a record
    pub fn pages_pruned(&self) -> u64 {
        self.pages_by_state
            .iter()
            .filter(|(state, _)| state.is_pruned())
            .map(|(_, count)| count)
            .sum()
    }

    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    pub fn duration_seconds(&self) -> Option<i64> {
        self.finished_at
            .map(|finished| (finished - self.started_at).num_seconds())
    }
}

impl Default for CrawlStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Logs statistics in a formatted manner
pub fn log_statistics(stats: &CrawlStats) {
    tracing::info!(
        "Crawl finished: {} pages recorded, {} pruned, {} links discovered",
        stats.pages_recorded(),
        stats.pages_pruned(),
        stats.links_discovered
    );

    for state in PageState::terminal_states() {
        let count = stats.count(state);
        if count > 0 {
            tracing::info!("  {}: {}", state, count);
        }
    }

    if let Some(seconds) = stats.duration_seconds() {
        tracing::info!("Elapsed: {}s", seconds);
    }
}
