//! Human-readable crawl trace
//!
//! Every record is written the moment it is produced, so a long crawl can be
//! followed live and nothing is lost if the run is interrupted.

use crate::output::traits::{OutputResult, PageRecord, ResultSink};
use std::io::Write;

const SEPARATOR: &str = "--------------------------";

/// Streams records as separator-delimited text blocks
pub struct TraceSink<W: Write> {
    writer: W,
}

impl<W: Write> TraceSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<W: Write> ResultSink for TraceSink<W> {
    fn record(&mut self, record: PageRecord) -> OutputResult<()> {
        writeln!(self.writer, "{}", SEPARATOR)?;
        writeln!(self.writer, "URL: {}", record.url)?;
        writeln!(self.writer, "Parent Link: {}", record.parent_url)?;
        if !record.content_type.is_empty() {
            writeln!(self.writer, "Content-Type: {}", record.content_type)?;
        }
        writeln!(self.writer, "Depth: {}", record.depth)?;
        writeln!(self.writer, "{}", SEPARATOR)?;
        writeln!(self.writer, "{}", record.content)?;
        writeln!(self.writer, "{}", SEPARATOR)?;
        Ok(())
    }

    fn link_discovered(&mut self, link: &str) -> OutputResult<()> {
        writeln!(self.writer, "> Found new link: {}", link)?;
        Ok(())
    }

    fn finalize(&mut self) -> OutputResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}
