//! Reads source files into documents, dispatching on extension.

use std::path::Path;

use docsplit_model::Document;
use tracing::{debug, info_span};

use crate::error::{IngestError, Result};
use crate::json::{JsonPagesError, parse_json_pages};
use crate::text::parse_text_pages;

/// Source formats with an extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// Form-feed separated text dump (`.txt`).
    Text,
    /// JSON page records (`.json`).
    Json,
}

impl DocumentFormat {
    /// Detects the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("txt") {
            Some(Self::Text)
        } else if ext.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else {
            None
        }
    }
}

/// Reads `path` into a document.
///
/// # Errors
///
/// Fails on an unsupported extension, an unreadable file, malformed JSON or
/// page records that are not numbered `0..n`.
pub fn read_document(path: &Path) -> Result<Document> {
    let span = info_span!("read_document", path = %path.display());
    let _guard = span.enter();

    let format = DocumentFormat::from_path(path).ok_or_else(|| IngestError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let text = std::fs::read_to_string(path).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let document = match format {
        DocumentFormat::Text => parse_text_pages(&text),
        DocumentFormat::Json => parse_json_pages(&text).map_err(|e| match e {
            JsonPagesError::Parse(source) => IngestError::Json {
                path: path.to_path_buf(),
                source,
            },
            JsonPagesError::Pages(source) => IngestError::PageIndex {
                path: path.to_path_buf(),
                source,
            },
        })?,
    };

    debug!(pages = document.len(), ?format, "document read");
    Ok(document)
}
