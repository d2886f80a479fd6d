//! Page and document types consumed by segmentation.
//!
//! A [`Document`] is the fully materialized output of page extraction: every
//! page is present, in order, with indices `0..n`. Segmentation never mutates
//! pages; exporters look pages up again by index to recover the original
//! resource for a section.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// A single page of extracted text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Zero-based position of the page in the source document.
    pub index: usize,
    /// Text lines in reading order.
    #[serde(default)]
    pub lines: Vec<String>,
}

impl Page {
    pub fn new(index: usize, lines: Vec<String>) -> Self {
        Self { index, lines }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// An ordered, gap-free sequence of pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pages: Vec<Page>,
}

impl Document {
    /// Builds a document from pages that are already numbered.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::PageIndex`] unless the page at position `i`
    /// carries index `i` for every page.
    pub fn from_pages(pages: Vec<Page>) -> Result<Self> {
        for (position, page) in pages.iter().enumerate() {
            if page.index != position {
                return Err(ModelError::PageIndex {
                    position,
                    found: page.index,
                });
            }
        }
        Ok(Self { pages })
    }

    /// Builds a document by numbering the given line lists in order.
    pub fn from_lines<I, L, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let pages = pages
            .into_iter()
            .enumerate()
            .map(|(index, lines)| Page::new(index, lines.into_iter().map(Into::into).collect()))
            .collect();
        Self { pages }
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn into_pages(self) -> Vec<Page> {
        self.pages
    }
}
