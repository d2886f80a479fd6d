//! Tuning options for segmentation.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

pub const DEFAULT_MIN_CONFIDENCE: f64 = 80.0;
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 80.0;
pub const DEFAULT_HEADING_LINES_SCANNED: usize = 5;

/// Options controlling the two segmentation passes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SegmentationOptions {
    /// Minimum confidence (0-100) for an exact or pattern match to open a
    /// section in the strict pass.
    pub min_confidence: f64,
    /// Minimum fuzzy confidence (0-100) to open a section in the fuzzy pass.
    pub fuzzy_threshold: f64,
    /// Leading lines of each page inspected by the strict pass.
    pub heading_lines_scanned: usize,
}

impl Default for SegmentationOptions {
    fn default() -> Self {
        Self {
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            heading_lines_scanned: DEFAULT_HEADING_LINES_SCANNED,
        }
    }
}

impl SegmentationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_min_confidence(mut self, value: f64) -> Self {
        self.min_confidence = value;
        self
    }

    #[must_use]
    pub fn with_fuzzy_threshold(mut self, value: f64) -> Self {
        self.fuzzy_threshold = value;
        self
    }

    #[must_use]
    pub fn with_heading_lines_scanned(mut self, value: usize) -> Self {
        self.heading_lines_scanned = value;
        self
    }

    /// Checks that thresholds lie in `0..=100` and at least one heading line
    /// is scanned.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidOption`] naming the first bad option.
    pub fn validate(&self) -> Result<()> {
        check_score("min_confidence", self.min_confidence)?;
        check_score("fuzzy_threshold", self.fuzzy_threshold)?;
        if self.heading_lines_scanned == 0 {
            return Err(ModelError::InvalidOption {
                option: "heading_lines_scanned",
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

fn check_score(option: &'static str, value: f64) -> Result<()> {
    if (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(ModelError::InvalidOption {
            option,
            message: format!("{value} is outside 0..=100"),
        })
    }
}
