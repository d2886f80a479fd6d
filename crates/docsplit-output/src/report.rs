//! JSON report describing how a document was split.

use std::path::Path;

use docsplit_model::{MatchKind, Section};
use serde::Serialize;

use crate::common::{ensure_parent_dir, write_json};
use crate::error::Result;

/// The report written by [`write_section_report`].
#[derive(Debug, Clone, Serialize)]
pub struct SectionReport {
    pub source: Option<String>,
    pub page_count: usize,
    pub sections: Vec<SectionReportEntry>,
}

/// One section without its content.
#[derive(Debug, Clone, Serialize)]
pub struct SectionReportEntry {
    pub heading: String,
    pub start_page: usize,
    pub end_page: usize,
    pub pages: Vec<usize>,
    pub confidence: f64,
    pub match_kind: MatchKind,
}

impl From<&Section> for SectionReportEntry {
    fn from(section: &Section) -> Self {
        Self {
            heading: section.heading.clone(),
            start_page: section.start_page,
            end_page: section.end_page,
            pages: section.pages.clone(),
            confidence: section.confidence,
            match_kind: section.match_kind,
        }
    }
}

impl SectionReport {
    pub fn new(source: Option<&Path>, page_count: usize, sections: &[Section]) -> Self {
        Self {
            source: source.map(|p| p.display().to_string()),
            page_count,
            sections: sections.iter().map(SectionReportEntry::from).collect(),
        }
    }
}

/// Writes the section report as pretty JSON, creating parent directories.
///
/// # Errors
///
/// Returns [`crate::OutputError::CreateDir`] when the parent directory cannot
/// be created and [`crate::OutputError::Write`] or
/// [`crate::OutputError::Json`] when the file cannot be written.
pub fn write_section_report(path: &Path, report: &SectionReport) -> Result<()> {
    ensure_parent_dir(path)?;
    write_json(path, report)
}
