//! The split pipeline: read, segment, export, report.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use docsplit_core::{Segmentation, Segmenter};
use docsplit_ingest::read_document;
use docsplit_output::{
    ExportSummary, PageSubsetExporter, SectionExporter, SectionReport, TextExporter,
    export_sections, write_section_report,
};
use tracing::{info, info_span};

use crate::config::{AppConfig, OptionOverrides};

/// How sections are written to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// One text file per section.
    #[default]
    Text,
    /// One JSON page-record file per section.
    Pages,
    /// No section files.
    None,
}

impl ExportFormat {
    fn exporter(self) -> Option<Box<dyn SectionExporter>> {
        match self {
            Self::Text => Some(Box::new(TextExporter)),
            Self::Pages => Some(Box::new(PageSubsetExporter)),
            Self::None => None,
        }
    }
}

/// Inputs for one split run.
#[derive(Debug, Clone, Default)]
pub struct SplitRequest {
    pub input: PathBuf,
    /// Defaults to a directory named after the input, next to it.
    pub output_dir: Option<PathBuf>,
    pub format: ExportFormat,
    pub report: Option<PathBuf>,
    pub dry_run: bool,
    pub overrides: OptionOverrides,
}

/// Everything a split run produced.
#[derive(Debug)]
pub struct SplitOutcome {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub segmentation: Segmentation,
    /// `None` on a dry run or when no section files were requested.
    pub export: Option<ExportSummary>,
    pub report: Option<PathBuf>,
}

impl SplitOutcome {
    pub fn has_errors(&self) -> bool {
        self.export.as_ref().is_some_and(|summary| !summary.is_complete())
    }
}

/// Splits one document according to `config` and `request`.
///
/// # Errors
///
/// Fails when the vocabulary or overridden options are invalid, when the
/// input cannot be read, or when the output directory or report cannot be
/// written. A single section that fails to export is recorded in the
/// outcome's summary instead.
pub fn split_document(config: &AppConfig, request: &SplitRequest) -> Result<SplitOutcome> {
    let input = &request.input;
    let span = info_span!("split", input = %input.display());
    let _guard = span.enter();

    let vocabulary = config.vocabulary().context("build heading vocabulary")?;
    let options = config.options_with(&request.overrides);
    let segmenter =
        Segmenter::from_vocabulary(vocabulary, options).context("configure segmentation")?;

    let document =
        read_document(input).with_context(|| format!("read {}", input.display()))?;
    let segmentation = segmenter.segment(&document);

    let base_name = base_name(input);
    let output_dir = request
        .output_dir
        .clone()
        .unwrap_or_else(|| input.with_file_name(&base_name));

    let export = match request.format.exporter() {
        Some(exporter) if !request.dry_run => Some(
            export_sections(
                &document,
                segmentation.sections(),
                &output_dir,
                &base_name,
                exporter.as_ref(),
            )
            .with_context(|| format!("export sections to {}", output_dir.display()))?,
        ),
        _ => None,
    };

    let report = match &request.report {
        Some(path) if !request.dry_run => {
            let report =
                SectionReport::new(Some(input), document.len(), segmentation.sections());
            write_section_report(path, &report)
                .with_context(|| format!("write report {}", path.display()))?;
            Some(path.clone())
        }
        _ => None,
    };

    info!(
        pages = document.len(),
        sections = segmentation.sections().len(),
        dry_run = request.dry_run,
        "split complete"
    );

    Ok(SplitOutcome {
        input: input.clone(),
        output_dir,
        segmentation,
        export,
        report,
    })
}

/// File stem used to name the output directory and section files.
pub fn base_name(input: &Path) -> String {
    input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| "document".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_name_uses_file_stem() {
        assert_eq!(base_name(Path::new("/tmp/shipment 7.txt")), "shipment 7");
        assert_eq!(base_name(Path::new("pages.json")), "pages");
        assert_eq!(base_name(Path::new("/")), "document");
    }
}
