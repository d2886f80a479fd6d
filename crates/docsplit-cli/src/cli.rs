//! CLI argument definitions for docsplit.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "docsplit",
    version,
    about = "Split page-structured documents into sections by heading",
    long_about = "Split page-structured documents into sections by heading.\n\n\
                  Headings are recognised by exact name, derived patterns, then fuzzy\n\
                  similarity. Pages that match no heading go to an \"Others\" section."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file (default: ./docsplit.toml when present).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Split a document into one file per section.
    Split(SplitArgs),

    /// List the heading vocabulary.
    Headings,

    /// Show which heading each text would match.
    Match(MatchArgs),
}

#[derive(Parser)]
pub struct SplitArgs {
    /// Document to split (.txt with form-feed page breaks, or .json page records).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output directory for section files (default: <INPUT stem> next to the input).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Section file format.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: ExportFormatArg,

    /// Also write a JSON report of all sections.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Segment and summarize without writing any files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Minimum confidence for exact or pattern headings (0-100).
    #[arg(long = "min-confidence", value_name = "SCORE")]
    pub min_confidence: Option<f64>,

    /// Minimum fuzzy similarity to open a section (0-100).
    #[arg(long = "fuzzy-threshold", value_name = "SCORE")]
    pub fuzzy_threshold: Option<f64>,

    /// Leading lines of each page searched for exact or pattern headings.
    #[arg(long = "heading-lines", value_name = "N")]
    pub heading_lines: Option<usize>,
}

#[derive(Parser)]
pub struct MatchArgs {
    /// Text fragments to match.
    #[arg(value_name = "TEXT", required = true)]
    pub texts: Vec<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportFormatArg {
    /// One text file per section.
    Text,
    /// One JSON page-record file per section.
    Pages,
    /// Do not write section files.
    None,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
