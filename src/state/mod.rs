//! State module for tracking crawl progress
//!
//! # Components
//!
//! - `PageState`: Tracks a single URL through the traversal (canonicalized, checked, fetched, recorded, ...)
//! - `VisitedSet`: Remembers which canonical URLs the crawl has already claimed

mod page_state;
mod visited;

// Re-export main types
pub use page_state::PageState;
pub use visited::VisitedSet;
