//! Vocabulary construction errors.
//!
//! All of these are configuration errors: they surface when the vocabulary is
//! built at startup, never while matching.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VocabularyError {
    #[error("heading #{position} has an empty canonical name")]
    EmptyName { position: usize },

    #[error("heading name '{name}' is reserved for unmatched pages")]
    ReservedName { name: String },

    #[error("duplicate heading '{name}'")]
    DuplicateName { name: String },

    #[error("heading '{name}' has no variations")]
    NoVariations { name: String },

    #[error("heading '{name}' has an empty variation at position {position}")]
    EmptyVariation { name: String, position: usize },

    #[error("heading '{name}': pattern '{pattern}' does not compile: {source}")]
    Pattern {
        name: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

pub type Result<T> = std::result::Result<T, VocabularyError>;
