//! Errors raised while setting up segmentation.

use docsplit_model::ModelError;
use thiserror::Error;

/// Segmentation itself never fails; only construction can.
#[derive(Debug, Error)]
pub enum SegmentError {
    #[error("invalid segmentation options: {0}")]
    Options(#[from] ModelError),
}

pub type Result<T> = std::result::Result<T, SegmentError>;
