//! Shared types for heading-based document splitting.
//!
//! Pages flow in as a [`Document`], segmentation produces [`Section`]s, and
//! [`SegmentationOptions`] carries the thresholds that govern both passes.

pub mod error;
pub mod options;
pub mod page;
pub mod section;

pub use error::{ModelError, Result};
pub use options::SegmentationOptions;
pub use page::{Document, Page};
pub use section::{
    EXACT_CONFIDENCE, HeadingMatch, MatchKind, OTHERS_HEADING, PATTERN_CONFIDENCE, Section,
};
