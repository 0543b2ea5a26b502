//! Structured JSON/YAML output
//!
//! Records are buffered in visit order and encoded as a single document
//! when the crawl finishes.

use crate::output::traits::{OutputResult, PageRecord, RecordEntry, ResultSink};
use crate::output::OutputFormat;
use std::io::Write;

/// Buffers records and writes them as one JSON or YAML document
pub struct StructuredSink<W: Write> {
    format: OutputFormat,
    pretty: bool,
    writer: W,
    records: Vec<PageRecord>,
}

impl<W: Write> StructuredSink<W> {
    /// Creates a sink writing `format` to `writer`
    ///
    /// `pretty` only affects JSON, which is indented with two spaces when set.
    pub fn new(format: OutputFormat, writer: W, pretty: bool) -> Self {
        Self {
            format,
            pretty,
            writer,
            records: Vec::new(),
        }
    }

    /// Records collected so far, in visit order
    pub fn records(&self) -> &[PageRecord] {
        &self.records
    }

    /// Encodes all collected records
    ///
    /// `Plain` has no structured encoding and falls back to JSON.
    pub fn encode(&self) -> OutputResult<Vec<u8>> {
        let entries: Vec<RecordEntry> = self.records.iter().map(RecordEntry::from).collect();

        let bytes = match self.format {
            OutputFormat::Yaml => serde_yaml::to_string(&entries)?.into_bytes(),
            OutputFormat::Json | OutputFormat::Plain if self.pretty => {
                serde_json::to_vec_pretty(&entries)?
            }
            OutputFormat::Json | OutputFormat::Plain => serde_json::to_vec(&entries)?,
        };

        Ok(bytes)
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<W: Write> ResultSink for StructuredSink<W> {
    fn record(&mut self, record: PageRecord) -> OutputResult<()> {
        self.records.push(record);
        Ok(())
    }

    fn finalize(&mut self) -> OutputResult<()> {
        let bytes = self.encode()?;
        self.writer.write_all(&bytes)?;
        if !bytes.ends_with(b"\n") {
            self.writer.write_all(b"\n")?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
