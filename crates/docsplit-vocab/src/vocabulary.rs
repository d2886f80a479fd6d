//! Immutable heading catalog.
//!
//! A [`Vocabulary`] maps each canonical heading to its known variations and
//! the patterns derived from them. It is built once through
//! [`VocabularyBuilder`] and never changes afterwards; iteration order is the
//! order headings were added, which decides ties during pattern matching.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, VocabularyError};
use crate::normalize::normalize;
use crate::patterns::{HeadingPattern, derive_patterns};

/// Heading name reserved for the catch-all section.
const RESERVED_NAME: &str = "Others";

/// A heading as written in configuration: a canonical name and its variations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingDefinition {
    pub name: String,
    #[serde(default)]
    pub variations: Vec<String>,
}

impl HeadingDefinition {
    pub fn new<I, S>(name: impl Into<String>, variations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            variations: variations.into_iter().map(Into::into).collect(),
        }
    }
}

/// A canonical heading with everything the matcher needs precomputed.
#[derive(Debug, Clone)]
pub struct VocabularyEntry {
    name: String,
    normalized_name: String,
    variations: Vec<String>,
    normalized_variations: Vec<String>,
    patterns: Vec<HeadingPattern>,
}

impl VocabularyEntry {
    fn build(definition: HeadingDefinition) -> Result<Self> {
        let name = definition.name.trim().to_string();
        let normalized_name = normalize(&name);

        if definition.variations.is_empty() {
            return Err(VocabularyError::NoVariations { name });
        }

        let mut variations = Vec::with_capacity(definition.variations.len());
        let mut normalized_variations = Vec::with_capacity(definition.variations.len());
        let mut patterns = Vec::new();
        let mut seen_patterns = BTreeSet::new();

        for (position, variation) in definition.variations.into_iter().enumerate() {
            let variation = variation.trim().to_string();
            if variation.is_empty() {
                return Err(VocabularyError::EmptyVariation { name, position });
            }
            for source in derive_patterns(&variation) {
                if !seen_patterns.insert(source.clone()) {
                    continue;
                }
                let pattern = HeadingPattern::compile(source.clone()).map_err(|source_err| {
                    VocabularyError::Pattern {
                        name: name.clone(),
                        pattern: source,
                        source: source_err,
                    }
                })?;
                patterns.push(pattern);
            }
            normalized_variations.push(normalize(&variation));
            variations.push(variation);
        }

        Ok(Self {
            name,
            normalized_name,
            variations,
            normalized_variations,
            patterns,
        })
    }

    /// Canonical heading name as configured (trimmed).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn normalized_name(&self) -> &str {
        &self.normalized_name
    }

    pub fn variations(&self) -> &[String] {
        &self.variations
    }

    /// Variations after [`normalize`], parallel to [`Self::variations`].
    pub fn normalized_variations(&self) -> &[String] {
        &self.normalized_variations
    }

    pub fn patterns(&self) -> &[HeadingPattern] {
        &self.patterns
    }

    /// True when any derived pattern occurs in `text` on word boundaries.
    pub fn matches_pattern(&self, text: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(text))
    }
}

/// The immutable heading catalog.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    entries: Vec<VocabularyEntry>,
}

impl Vocabulary {
    pub fn builder() -> VocabularyBuilder {
        VocabularyBuilder::new()
    }

    /// Builds a vocabulary from configuration definitions, in order.
    ///
    /// # Errors
    ///
    /// Returns the first [`VocabularyError`] found in the definitions.
    pub fn from_definitions(definitions: impl IntoIterator<Item = HeadingDefinition>) -> Result<Self> {
        definitions
            .into_iter()
            .fold(VocabularyBuilder::new(), VocabularyBuilder::definition)
            .build()
    }

    pub fn entries(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<&VocabularyEntry> {
        let key = normalize(name);
        self.entries.iter().find(|e| e.normalized_name == key)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(VocabularyEntry::name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn pattern_count(&self) -> usize {
        self.entries.iter().map(|e| e.patterns.len()).sum()
    }
}

/// Collects heading definitions and validates them into a [`Vocabulary`].
#[derive(Debug, Clone, Default)]
pub struct VocabularyBuilder {
    definitions: Vec<HeadingDefinition>,
}

impl VocabularyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a heading with its variations.
    #[must_use]
    pub fn heading<I, S>(self, name: impl Into<String>, variations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.definition(HeadingDefinition::new(name, variations))
    }

    #[must_use]
    pub fn definition(mut self, definition: HeadingDefinition) -> Self {
        self.definitions.push(definition);
        self
    }

    /// Validates every definition and derives its patterns.
    ///
    /// # Errors
    ///
    /// Fails on an empty, reserved or duplicate canonical name, a heading
    /// without variations, a blank variation, or a pattern that does not
    /// compile.
    pub fn build(self) -> Result<Vocabulary> {
        let mut seen = BTreeSet::new();
        let mut entries = Vec::with_capacity(self.definitions.len());

        for (position, definition) in self.definitions.into_iter().enumerate() {
            let name = definition.name.trim();
            if name.is_empty() {
                return Err(VocabularyError::EmptyName { position });
            }
            let key = normalize(name);
            if key == normalize(RESERVED_NAME) {
                return Err(VocabularyError::ReservedName {
                    name: name.to_string(),
                });
            }
            if !seen.insert(key) {
                return Err(VocabularyError::DuplicateName {
                    name: name.to_string(),
                });
            }
            entries.push(VocabularyEntry::build(definition)?);
        }

        let vocabulary = Vocabulary { entries };
        debug!(
            headings = vocabulary.len(),
            patterns = vocabulary.pattern_count(),
            "vocabulary built"
        );
        Ok(vocabulary)
    }
}
