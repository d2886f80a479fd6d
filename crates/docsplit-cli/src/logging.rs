//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! # Log Levels
//!
//! - `warn`: sections that failed to export
//! - `info`: run summaries (pages read, sections found, files written)
//! - `debug`: opened sections, loaded config, vocabulary size
//! - `trace`: every heading candidate considered by the matcher
//!
//! # Usage
//!
//! ```ignore
//! use docsplit_cli::logging::{init_logging, LogConfig};
//!
//! let config = LogConfig {
//!     level_filter: LevelFilter::DEBUG,
//!     ..LogConfig::default()
//! };
//! init_logging(&config)?;
//! ```

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Crates whose events follow the configured level; others stay at `warn`.
const CRATES: &[&str] = &[
    "docsplit",
    "docsplit_cli",
    "docsplit_core",
    "docsplit_ingest",
    "docsplit_match",
    "docsplit_model",
    "docsplit_output",
    "docsplit_vocab",
];

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level_filter: LevelFilter,
    /// Let `RUST_LOG` replace the configured level when set.
    pub use_env_filter: bool,
    pub with_timestamps: bool,
    /// Include the module path in each event.
    pub with_target: bool,
    /// Emit span close events (json only).
    pub with_spans: bool,
    pub with_ansi: bool,
    pub format: LogFormat,
    /// Write to this file instead of stderr.
    pub log_file: Option<PathBuf>,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable format with colors.
    #[default]
    Pretty,
    /// Single-line format.
    Compact,
    /// JSON lines for machine parsing.
    Json,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            use_env_filter: true,
            with_timestamps: false,
            with_target: false,
            with_spans: true,
            with_ansi: true,
            format: LogFormat::default(),
            log_file: None,
        }
    }
}

/// Installs the global subscriber. Call once at startup.
///
/// Events go to `config.log_file` when set, appended to any existing
/// contents, and to stderr otherwise.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    let writer = match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        None => BoxMakeWriter::new(io::stderr),
    };
    tracing_subscriber::registry()
        .with(log_layer(config, writer))
        .init();
    Ok(())
}

/// The formatting layer selected by `config`, behind its level filter.
fn log_layer<W>(config: &LogConfig, writer: W) -> impl Layer<Registry> + Send + Sync + 'static
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .with_writer(writer)
        .with_target(config.with_target)
        .with_ansi(config.with_ansi && config.format != LogFormat::Json);
    let span_events = if config.with_spans {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    // JSON lines always carry a timestamp.
    let formatted: Box<dyn Layer<Registry> + Send + Sync> = match (config.format, config.with_timestamps) {
        (LogFormat::Json, _) => layer.json().with_span_events(span_events).boxed(),
        (LogFormat::Compact, true) => layer.compact().boxed(),
        (LogFormat::Compact, false) => layer.compact().without_time().boxed(),
        (LogFormat::Pretty, true) => layer.boxed(),
        (LogFormat::Pretty, false) => layer.without_time().boxed(),
    };
    formatted.with_filter(build_env_filter(config))
}

fn build_env_filter(config: &LogConfig) -> EnvFilter {
    let fallback = || EnvFilter::new(default_directives(config.level_filter));
    if config.use_env_filter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback())
    } else {
        fallback()
    }
}

/// `warn` globally, `level` for the docsplit crates.
fn default_directives(level: LevelFilter) -> String {
    let level = level.to_string().to_lowercase();
    let mut directives = vec!["warn".to_string()];
    directives.extend(CRATES.iter().map(|krate| format!("{krate}={level}")));
    directives.join(",")
}
