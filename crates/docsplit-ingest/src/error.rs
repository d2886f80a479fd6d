//! Error types for page content extraction.

use std::path::PathBuf;

use docsplit_model::ModelError;
use thiserror::Error;

/// Errors that can occur while reading a source document.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The file extension has no extractor.
    #[error("unsupported document format for {path} (expected .txt or .json)")]
    UnsupportedFormat { path: PathBuf },

    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse page records in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Page records are not numbered `0..n` in order.
    #[error("invalid page numbering in {path}: {source}")]
    PageIndex {
        path: PathBuf,
        #[source]
        source: ModelError,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;
