//! Heading matcher built from an ordered list of strategies.

use docsplit_model::HeadingMatch;
use docsplit_vocab::Vocabulary;
use tracing::trace;

use crate::strategy::{Candidate, ExactStrategy, FuzzyStrategy, MatchStrategy, PatternStrategy};

/// Finds the best canonical heading for a line of text.
///
/// Strategies run in order and the first one returning a match wins. The
/// default order is exact, pattern, fuzzy.
///
/// # Example
///
/// ```ignore
/// use docsplit_match::HeadingMatcher;
/// use docsplit_vocab::default_vocabulary;
///
/// let matcher = HeadingMatcher::new(default_vocabulary()?);
/// let hit = matcher.find("COMMERCIAL INVOICE");
/// assert_eq!(hit.heading.as_deref(), Some("Commercial Invoice"));
/// ```
pub struct HeadingMatcher {
    vocabulary: Vocabulary,
    strategies: Vec<Box<dyn MatchStrategy>>,
}

impl HeadingMatcher {
    /// Creates a matcher with the standard exact, pattern, fuzzy order.
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self::with_strategies(vocabulary, default_strategies())
    }

    /// Creates a matcher with a custom strategy order.
    pub fn with_strategies(vocabulary: Vocabulary, strategies: Vec<Box<dyn MatchStrategy>>) -> Self {
        Self {
            vocabulary,
            strategies,
        }
    }

    /// Appends a strategy after the existing ones.
    #[must_use]
    pub fn add_strategy(mut self, strategy: Box<dyn MatchStrategy>) -> Self {
        self.strategies.push(strategy);
        self
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Matches one line of text.
    ///
    /// Returns [`HeadingMatch::none`] when no strategy produced a candidate.
    pub fn find(&self, text: &str) -> HeadingMatch {
        let candidate = Candidate::new(text);
        for strategy in &self.strategies {
            if let Some(hit) = strategy.evaluate(&candidate, &self.vocabulary) {
                trace!(
                    strategy = strategy.name(),
                    heading = hit.heading.as_deref().unwrap_or_default(),
                    confidence = hit.confidence,
                    "heading candidate"
                );
                return hit;
            }
        }
        HeadingMatch::none()
    }
}

impl std::fmt::Debug for HeadingMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeadingMatcher")
            .field("headings", &self.vocabulary.len())
            .field("strategies", &self.strategy_names())
            .finish()
    }
}

fn default_strategies() -> Vec<Box<dyn MatchStrategy>> {
    vec![
        Box::new(ExactStrategy),
        Box::new(PatternStrategy),
        Box::new(FuzzyStrategy),
    ]
}

#[cfg(test)]
mod tests {
    use docsplit_model::MatchKind;

    use super::*;

    fn matcher() -> HeadingMatcher {
        let vocabulary = Vocabulary::builder()
            .heading("Packing List", ["Packing List"])
            .build()
            .expect("build vocabulary");
        HeadingMatcher::new(vocabulary)
    }

    #[test]
    fn default_order_is_exact_pattern_fuzzy() {
        assert_eq!(matcher().strategy_names(), vec!["exact", "pattern", "fuzzy"]);
    }

    #[test]
    fn exact_on_later_heading_beats_pattern_on_earlier() {
        let vocabulary = Vocabulary::builder()
            .heading("Invoice Copy", ["Invoice"])
            .heading("Invoice", ["Invoice"])
            .build()
            .expect("build vocabulary");
        let hit = HeadingMatcher::new(vocabulary).find("INVOICE");
        assert_eq!(hit.heading.as_deref(), Some("Invoice"));
        assert_eq!(hit.kind, MatchKind::Exact);
        assert_eq!(hit.confidence, 100.0);
    }

    #[test]
    fn empty_text_yields_no_candidate() {
        let hit = matcher().find("");
        assert_eq!(hit, HeadingMatch::none());
    }

    #[test]
    fn custom_strategy_order_is_respected() {
        let vocabulary = Vocabulary::builder()
            .heading("Packing List", ["Packing List"])
            .build()
            .expect("build vocabulary");
        let fuzzy_only = HeadingMatcher::with_strategies(vocabulary, vec![Box::new(FuzzyStrategy)]);
        let hit = fuzzy_only.find("Packing List");
        assert_eq!(hit.kind, MatchKind::Fuzzy);
        assert_eq!(hit.confidence, 100.0);
    }
}
