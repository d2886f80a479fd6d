//! Pattern derivation for heading variations.

use regex::Regex;

/// A derived pattern and its compiled, word-bounded, case-insensitive regex.
#[derive(Debug, Clone)]
pub struct HeadingPattern {
    source: String,
    regex: Regex,
}

impl HeadingPattern {
    /// Compiles `source` as `(?i)\b{source}\b`.
    pub(crate) fn compile(source: String) -> Result<Self, regex::Error> {
        let regex = Regex::new(&format!(r"(?i)\b{source}\b"))?;
        Ok(Self { source, regex })
    }

    /// The pattern text before word-boundary anchoring.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// Derives the match patterns for one variation, in a fixed order:
/// the escaped literal, the words joined by `.*`, the words joined by `\s*`,
/// then the upper- and lower-cased literals. Duplicates are dropped.
pub fn derive_patterns(variation: &str) -> Vec<String> {
    let variation = variation.trim();
    let words: Vec<String> = variation.split_whitespace().map(regex::escape).collect();
    let candidates = [
        regex::escape(variation),
        words.join(".*"),
        words.join(r"\s*"),
        regex::escape(&variation.to_uppercase()),
        regex::escape(&variation.to_lowercase()),
    ];

    let mut patterns: Vec<String> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if !patterns.contains(&candidate) {
            patterns.push(candidate);
        }
    }
    patterns
}
