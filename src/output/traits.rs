//! Result sink trait and record types
//!
//! This module defines the trait interface for result sinks and the
//! per-page record they receive.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Parent link recorded for the root page
pub const ROOT_PARENT: &str = "--";

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to encode YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// One visited page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRecord {
    /// Canonical URL of the page
    pub url: String,

    /// Canonical URL of the page that linked here, or [`ROOT_PARENT`]
    pub parent_url: String,

    /// Primary MIME type; empty unless MIME mode is enabled
    pub content_type: String,

    /// Link hops from the root, the root being depth 1
    pub depth: u32,

    /// Visible text of the page
    pub content: String,
}

/// Serialized shape of a record: `{depth, newLink: {link, parentLink, contentType?, content}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordEntry {
    pub depth: u32,
    #[serde(rename = "newLink")]
    pub new_link: LinkInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkInfo {
    pub link: String,
    #[serde(rename = "parentLink")]
    pub parent_link: String,
    #[serde(
        rename = "contentType",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub content_type: String,
    pub content: String,
}

impl From<&PageRecord> for RecordEntry {
    fn from(record: &PageRecord) -> Self {
        Self {
            depth: record.depth,
            new_link: LinkInfo {
                link: record.url.clone(),
                parent_link: record.parent_url.clone(),
                content_type: record.content_type.clone(),
                content: record.content.clone(),
            },
        }
    }
}

/// Trait for result sinks
///
/// The traversal engine hands every visited page to a sink and knows nothing
/// about how it is written. Sinks are driven from a single task.
pub trait ResultSink {
    /// Records a visited page
    fn record(&mut self, record: PageRecord) -> OutputResult<()>;

    /// Notes an in-scope link collected on the current page
    fn link_discovered(&mut self, _link: &str) -> OutputResult<()> {
        Ok(())
    }

    /// Finishes the output, writing anything still buffered
    fn finalize(&mut self) -> OutputResult<()>;
}

impl<S: ResultSink + ?Sized> ResultSink for Box<S> {
    fn record(&mut self, record: PageRecord) -> OutputResult<()> {
        (**self).record(record)
    }

    fn link_discovered(&mut self, link: &str) -> OutputResult<()> {
        (**self).link_discovered(link)
    }

    fn finalize(&mut self) -> OutputResult<()> {
        (**self).finalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(content_type: &str) -> PageRecord {
        PageRecord {
            url: "http://example.com/".to_string(),
            parent_url: ROOT_PARENT.to_string(),
            content_type: content_type.to_string(),
            depth: 1,
            content: "Hello".to_string(),
        }
    }

    #[test]
    fn test_entry_shape() {
        let entry = RecordEntry::from(&record("text/html"));
        let value = serde_json::to_value(&entry).unwrap();

        assert_eq!(value["depth"], 1);
        assert_eq!(value["newLink"]["link"], "http://example.com/");
        assert_eq!(value["newLink"]["parentLink"], "--");
        assert_eq!(value["newLink"]["contentType"], "text/html");
        assert_eq!(value["newLink"]["content"], "Hello");
    }

    #[test]
    fn test_empty_content_type_omitted() {
        let entry = RecordEntry::from(&record(""));
        let value = serde_json::to_value(&entry).unwrap();

        assert!(value["newLink"].get("contentType").is_none());
    }

    struct CountingSink(usize);

    impl ResultSink for CountingSink {
        fn record(&mut self, _record: PageRecord) -> OutputResult<()> {
            self.0 += 1;
            Ok(())
        }

        fn finalize(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn test_boxed_sink_forwards() {
        let mut sink: Box<CountingSink> = Box::new(CountingSink(0));
        sink.record(record("")).unwrap();
        sink.link_discovered("http://example.com/a").unwrap();
        sink.finalize().unwrap();
        assert_eq!(sink.0, 1);
    }
}
