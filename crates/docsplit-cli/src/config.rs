//! `docsplit.toml` configuration.
//!
//! ```toml
//! [segmentation]
//! min_confidence = 80.0
//! fuzzy_threshold = 80.0
//! heading_lines_scanned = 5
//!
//! [[headings]]
//! name = "Commercial Invoice"
//! variations = ["Commercial Invoice", "Invoice"]
//! ```
//!
//! Every key is optional. Without `[[headings]]` the built-in catalog is used.

use std::path::{Path, PathBuf};

use docsplit_model::SegmentationOptions;
use docsplit_vocab::{HeadingDefinition, Vocabulary, VocabularyError, default_vocabulary};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "docsplit.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Vocabulary(#[from] VocabularyError),
}

/// Settings read from `docsplit.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub segmentation: SegmentationOptions,
    pub headings: Vec<HeadingDefinition>,
}

impl AppConfig {
    /// Loads `path`, or `./docsplit.toml` when present, or the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when an explicit path, or a present
    /// `./docsplit.toml`, cannot be read and [`ConfigError::Toml`] when its
    /// contents do not parse.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::from_file(fallback)
                } else {
                    debug!("no config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Reads and parses one config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read and
    /// [`ConfigError::Toml`] when it is not a valid config.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config = Self::from_toml(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })?;
        debug!(path = %path.display(), headings = config.headings.len(), "config loaded");
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns the TOML error for malformed input or unknown keys.
    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// The configured headings, or the built-in catalog when none are given.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Vocabulary`] when a configured heading is
    /// rejected, such as a repeated or reserved name.
    pub fn vocabulary(&self) -> Result<Vocabulary, ConfigError> {
        let vocabulary = if self.headings.is_empty() {
            default_vocabulary()?
        } else {
            Vocabulary::from_definitions(self.headings.iter().cloned())?
        };
        Ok(vocabulary)
    }

    /// Segmentation options with command-line overrides applied.
    pub fn options_with(&self, overrides: &OptionOverrides) -> SegmentationOptions {
        let mut options = self.segmentation;
        if let Some(value) = overrides.min_confidence {
            options.min_confidence = value;
        }
        if let Some(value) = overrides.fuzzy_threshold {
            options.fuzzy_threshold = value;
        }
        if let Some(value) = overrides.heading_lines_scanned {
            options.heading_lines_scanned = value;
        }
        options
    }
}

/// Option values given on the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionOverrides {
    pub min_confidence: Option<f64>,
    pub fuzzy_threshold: Option<f64>,
    pub heading_lines_scanned: Option<usize>,
}
