//! Two-pass heading segmentation.
//!
//! A [`Segmenter`] assigns every page of a [`docsplit_model::Document`] to
//! exactly one section:
//!
//! 1. **Strict pass** - exact or pattern matches in the first lines of a page
//!    open sections; following pages extend them.
//! 2. **Fuzzy pass** - pages left unclaimed are revisited on their own and the
//!    best fuzzy match anywhere on a page may open a section.
//! 3. **Residual** - whatever is still unclaimed goes to a single "Others"
//!    section placed last.

mod error;
mod passes;
mod segmenter;

pub use error::{Result, SegmentError};
pub use segmenter::{Segmentation, Segmenter};
