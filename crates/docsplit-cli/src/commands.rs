use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};
use docsplit_cli::config::{AppConfig, OptionOverrides};
use docsplit_cli::pipeline::{ExportFormat, SplitOutcome, SplitRequest, split_document};
use docsplit_match::HeadingMatcher;

use crate::cli::{ExportFormatArg, MatchArgs, SplitArgs};
use crate::summary::{apply_table_style, confidence_cell, dim_cell, header_cell, kind_cell};

pub fn run_split(args: &SplitArgs, config_path: Option<&Path>) -> Result<SplitOutcome> {
    let config = load_config(config_path)?;
    let request = SplitRequest {
        input: args.input.clone(),
        output_dir: args.output_dir.clone(),
        format: match args.format {
            ExportFormatArg::Text => ExportFormat::Text,
            ExportFormatArg::Pages => ExportFormat::Pages,
            ExportFormatArg::None => ExportFormat::None,
        },
        report: args.report.clone(),
        dry_run: args.dry_run,
        overrides: OptionOverrides {
            min_confidence: args.min_confidence,
            fuzzy_threshold: args.fuzzy_threshold,
            heading_lines_scanned: args.heading_lines,
        },
    };
    split_document(&config, &request)
}

pub fn run_headings(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let vocabulary = config.vocabulary().context("build heading vocabulary")?;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Heading"),
        header_cell("Variations"),
        header_cell("Patterns"),
    ]);
    apply_table_style(&mut table);
    for entry in vocabulary.entries() {
        table.add_row(vec![
            Cell::new(entry.name()),
            Cell::new(entry.variations().join("\n")),
            Cell::new(entry.patterns().len()),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_match(args: &MatchArgs, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let vocabulary = config.vocabulary().context("build heading vocabulary")?;
    let matcher = HeadingMatcher::new(vocabulary);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Text"),
        header_cell("Heading"),
        header_cell("Confidence"),
        header_cell("Kind"),
    ]);
    apply_table_style(&mut table);
    for text in &args.texts {
        let hit = matcher.find(text);
        let row = match hit.heading.as_deref() {
            Some(heading) => vec![
                Cell::new(text),
                Cell::new(heading),
                confidence_cell(hit.confidence),
                kind_cell(hit.kind),
            ],
            None => vec![Cell::new(text), dim_cell("-"), dim_cell("-"), dim_cell("-")],
        };
        table.add_row(row);
    }
    println!("{table}");
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    AppConfig::load(path).context("load configuration")
}
