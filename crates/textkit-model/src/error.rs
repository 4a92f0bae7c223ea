use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading and tokenizing an input file.
///
/// The variants mirror the distinct user-facing messages each utility
/// reports: missing file, permission, decoding, and generic I/O are kept
/// separate so the word-count utility can name the exact cause, and
/// `InvalidNumber` carries the fail-fast path of the statistics utility.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("the file '{path}' was not found")]
    NotFound { path: PathBuf },
    #[error("permission denied to read the file '{path}'")]
    PermissionDenied { path: PathBuf },
    #[error("the file '{path}' contains bytes that cannot be decoded as UTF-8")]
    Decode { path: PathBuf },
    #[error("an i/o error occurred while reading the file '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("line {line}: '{value}' passed the numeric filter but could not be parsed")]
    InvalidNumber { line: usize, value: String },
}

/// Failure to persist a finished report through a sink.
#[derive(Debug, Error)]
#[error("failed to write report '{path}': {source}")]
pub struct ReportError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

pub type Result<T> = std::result::Result<T, IngestError>;
