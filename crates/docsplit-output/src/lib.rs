//! Section export.
//!
//! - **Text**: heading, blank line, then the section's lines
//! - **Page subset**: the section's pages as JSON page records
//! - **Report**: every section's page range, confidence and match kind

mod common;
pub mod error;
mod export;
mod exporter;
mod report;

pub use common::safe_heading;
pub use error::{OutputError, Result};
pub use export::{ExportFailure, ExportSummary, ExportedSection, export_sections};
pub use exporter::{PageSubsetExporter, SectionExporter, TextExporter};
pub use report::{SectionReport, SectionReportEntry, write_section_report};
