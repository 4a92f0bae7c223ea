//! Report sinks.
//!
//! Computation stays pure; the finished report text is handed to a sink.
//! The real utilities use [`FileSink`] with a fixed file name in the
//! current working directory; tests use [`BufferSink`].

use std::fs;
use std::path::{Path, PathBuf};

use textkit_model::ReportError;

pub trait ReportSink {
    fn write_report(&mut self, report: &str) -> Result<(), ReportError>;
}

/// Writes the report to a fixed-name UTF-8 file, overwriting any
/// previous run's output. Last writer wins; no locking.
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    /// Sink for a fixed file name resolved against the current
    /// working directory.
    pub fn fixed(name: &str) -> Self {
        Self {
            path: PathBuf::from(name),
        }
    }

    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportSink for FileSink {
    fn write_report(&mut self, report: &str) -> Result<(), ReportError> {
        fs::write(&self.path, report).map_err(|source| ReportError {
            path: self.path.clone(),
            source,
        })
    }
}

/// In-memory sink; each write replaces the previous contents.
#[derive(Debug, Default)]
pub struct BufferSink {
    pub contents: String,
}

impl ReportSink for BufferSink {
    fn write_report(&mut self, report: &str) -> Result<(), ReportError> {
        self.contents = report.to_string();
        Ok(())
    }
}
