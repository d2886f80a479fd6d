//! Writes every section of a segmented document to its own file.

use std::path::{Path, PathBuf};

use docsplit_model::{Document, Section};
use tracing::{debug, info, info_span, warn};

use crate::common::{FileNamer, ensure_output_dir};
use crate::error::Result;
use crate::exporter::SectionExporter;

/// A section written to disk.
#[derive(Debug, Clone)]
pub struct ExportedSection {
    pub heading: String,
    pub path: PathBuf,
}

/// A section that could not be written.
#[derive(Debug, Clone)]
pub struct ExportFailure {
    pub heading: String,
    pub path: PathBuf,
    pub error: String,
}

/// Outcome of [`export_sections`].
#[derive(Debug, Clone, Default)]
pub struct ExportSummary {
    pub written: Vec<ExportedSection>,
    pub failures: Vec<ExportFailure>,
}

impl ExportSummary {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Exports each section to `output_dir` as `{base_name}_{heading}.{ext}`.
///
/// A section that fails to write is recorded in the summary and the rest are
/// still exported.
///
/// # Errors
///
/// Fails only when the output directory cannot be created.
pub fn export_sections(
    document: &Document,
    sections: &[Section],
    output_dir: &Path,
    base_name: &str,
    exporter: &dyn SectionExporter,
) -> Result<ExportSummary> {
    let span = info_span!(
        "export_sections",
        dir = %output_dir.display(),
        format = exporter.extension()
    );
    let _guard = span.enter();

    let dir = ensure_output_dir(output_dir)?;
    let mut namer = FileNamer::default();
    let mut summary = ExportSummary::default();

    for section in sections {
        let path = dir.join(namer.name(base_name, &section.heading, exporter.extension()));
        match exporter.write(section, document, &path) {
            Ok(()) => {
                debug!(heading = %section.heading, path = %path.display(), "section exported");
                summary.written.push(ExportedSection {
                    heading: section.heading.clone(),
                    path,
                });
            }
            Err(error) => {
                warn!(heading = %section.heading, %error, "section export failed");
                summary.failures.push(ExportFailure {
                    heading: section.heading.clone(),
                    path,
                    error: error.to_string(),
                });
            }
        }
    }

    info!(
        written = summary.written.len(),
        failed = summary.failures.len(),
        "export complete"
    );
    Ok(summary)
}
