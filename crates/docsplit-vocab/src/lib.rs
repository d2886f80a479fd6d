//! Heading vocabulary for document splitting.
//!
//! # Features
//!
//! - **Normalization**: [`normalize`] canonicalizes text for comparison
//! - **Pattern derivation**: literal, whitespace-flexible and case variants
//!   per variation, compiled once with word-boundary anchoring
//! - **Vocabulary**: an immutable, ordered heading catalog built through
//!   [`VocabularyBuilder`]
//! - **Default catalog**: the trade-document headings in [`default_vocabulary`]
//!
//! # Example
//!
//! ```ignore
//! use docsplit_vocab::Vocabulary;
//!
//! let vocabulary = Vocabulary::builder()
//!     .heading("Commercial Invoice", ["Commercial Invoice", "Invoice"])
//!     .build()?;
//! ```

mod catalog;
mod error;
mod normalize;
mod patterns;
mod vocabulary;

pub use catalog::{default_definitions, default_vocabulary};
pub use error::{Result, VocabularyError};
pub use normalize::normalize;
pub use patterns::{HeadingPattern, derive_patterns};
pub use vocabulary::{HeadingDefinition, Vocabulary, VocabularyBuilder, VocabularyEntry};
