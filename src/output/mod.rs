//! Output module for writing crawl results
//!
//! This module handles:
//! - Streaming a human-readable trace as pages are visited
//! - Buffering records and encoding them as JSON or YAML at the end of a run
//! - Recording crawl statistics

pub mod stats;
mod structured;
mod trace;
mod traits;

pub use stats::{log_statistics, CrawlStats};
pub use structured::StructuredSink;
pub use trace::TraceSink;
pub use traits::{
    LinkInfo, OutputError, OutputResult, PageRecord, RecordEntry, ResultSink, ROOT_PARENT,
};

use serde::Deserialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Output encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Separator-delimited text blocks, streamed as pages are visited
    #[default]
    Plain,
    /// One JSON array written at the end of the crawl
    Json,
    /// One YAML sequence written at the end of the crawl
    Yaml,
}

impl OutputFormat {
    /// Parses a format name case-insensitively
    ///
    /// Returns `None` for anything other than `plain`, `json` or `yaml`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "plain" => Some(Self::Plain),
            "json" => Some(Self::Json),
            "yaml" => Some(Self::Yaml),
            _ => None,
        }
    }

    pub fn is_structured(&self) -> bool {
        !matches!(self, Self::Plain)
    }
}

/// Opens the sink for `format`, writing to `path` or to standard error
///
/// An existing file at `path` is truncated. The plain trace goes to the file
/// unbuffered so every block is on disk as soon as it is written. JSON sent to
/// standard error is pretty-printed; JSON written to a file is compact.
pub fn open_sink(format: OutputFormat, path: Option<&Path>) -> OutputResult<Box<dyn ResultSink>> {
    let (writer, to_terminal): (Box<dyn Write>, bool) = match path {
        Some(path) if format.is_structured() => {
            (Box::new(BufWriter::new(File::create(path)?)), false)
        }
        Some(path) => (Box::new(File::create(path)?), false),
        None => (Box::new(io::stderr()), true),
    };

    let sink: Box<dyn ResultSink> = match format {
        OutputFormat::Plain => Box::new(TraceSink::new(writer)),
        OutputFormat::Json | OutputFormat::Yaml => {
            Box::new(StructuredSink::new(format, writer, to_terminal))
        }
    };

    Ok(sink)
}
