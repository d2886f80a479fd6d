//! Per-section writers.

use std::io::Write;
use std::path::Path;

use docsplit_model::{Document, Page, Section};

use crate::common::{create_file, write_json};
use crate::error::{OutputError, Result};

/// Writes one section of a document to a file.
pub trait SectionExporter: Send + Sync {
    /// File extension, without the dot.
    fn extension(&self) -> &'static str;

    /// Writes `section` to `path`.
    fn write(&self, section: &Section, document: &Document, path: &Path) -> Result<()>;
}

/// Heading, a blank line, then the section's lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextExporter;

impl SectionExporter for TextExporter {
    fn extension(&self) -> &'static str {
        "txt"
    }

    fn write(&self, section: &Section, _document: &Document, path: &Path) -> Result<()> {
        let io_err = |e| OutputError::Write {
            path: path.to_path_buf(),
            source: e,
        };
        let mut writer = create_file(path)?;
        writeln!(writer, "{}", section.heading).map_err(io_err)?;
        writeln!(writer).map_err(io_err)?;
        for line in &section.content {
            writeln!(writer, "{line}").map_err(io_err)?;
        }
        writer.flush().map_err(io_err)
    }
}

/// The section's original pages as JSON page records.
///
/// Pages are renumbered from 0 so the file reads back as a document of its
/// own.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageSubsetExporter;

impl PageSubsetExporter {
    /// The section's pages taken from `document`, renumbered from 0.
    ///
    /// # Errors
    ///
    /// Returns [`OutputError::MissingPage`] when the section names a page the
    /// document does not have.
    pub fn subset(section: &Section, document: &Document) -> Result<Vec<Page>> {
        section
            .pages
            .iter()
            .enumerate()
            .map(|(position, &index)| {
                document
                    .page(index)
                    .map(|page| Page::new(position, page.lines.clone()))
                    .ok_or_else(|| OutputError::MissingPage {
                        heading: section.heading.clone(),
                        index,
                    })
            })
            .collect()
    }
}

impl SectionExporter for PageSubsetExporter {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn write(&self, section: &Section, document: &Document, path: &Path) -> Result<()> {
        let pages = Self::subset(section, document)?;
        write_json(path, &pages)
    }
}
