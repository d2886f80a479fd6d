//! Match strategies evaluated in order by the heading matcher.
//!
//! # Standard Order
//!
//! 1. **ExactStrategy** - normalized text equals a canonical name
//! 2. **PatternStrategy** - a derived pattern occurs on word boundaries
//! 3. **FuzzyStrategy** - best partial similarity against any variation
//!
//! Each strategy looks at the whole vocabulary before the next one runs, so an
//! exact hit on a later heading beats a pattern hit on an earlier one.

use docsplit_model::{EXACT_CONFIDENCE, HeadingMatch, MatchKind, PATTERN_CONFIDENCE};
use docsplit_vocab::{Vocabulary, normalize};

use crate::score::partial_ratio;

/// A line of text prepared for matching.
#[derive(Debug, Clone)]
pub struct Candidate<'a> {
    /// The text as extracted from the page.
    pub raw: &'a str,
    /// The text after normalization.
    pub normalized: String,
}

impl<'a> Candidate<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self {
            raw,
            normalized: normalize(raw),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.normalized.is_empty()
    }
}

/// One way of recognising a heading in a line of text.
///
/// Returning `None` hands the candidate to the next strategy.
pub trait MatchStrategy: Send + Sync {
    /// Short name for logging.
    fn name(&self) -> &'static str;

    /// Evaluates the candidate against the vocabulary.
    fn evaluate(&self, candidate: &Candidate<'_>, vocabulary: &Vocabulary) -> Option<HeadingMatch>;
}

/// Normalized text equal to a canonical name.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactStrategy;

impl MatchStrategy for ExactStrategy {
    fn name(&self) -> &'static str {
        "exact"
    }

    fn evaluate(&self, candidate: &Candidate<'_>, vocabulary: &Vocabulary) -> Option<HeadingMatch> {
        if candidate.is_blank() {
            return None;
        }
        vocabulary
            .entries()
            .iter()
            .find(|entry| entry.normalized_name() == candidate.normalized)
            .map(|entry| HeadingMatch::new(entry.name(), EXACT_CONFIDENCE, MatchKind::Exact))
    }
}

/// Any derived pattern found in the raw text, case-insensitively, on word
/// boundaries. The first heading in vocabulary order wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternStrategy;

impl MatchStrategy for PatternStrategy {
    fn name(&self) -> &'static str {
        "pattern"
    }

    fn evaluate(&self, candidate: &Candidate<'_>, vocabulary: &Vocabulary) -> Option<HeadingMatch> {
        if candidate.is_blank() {
            return None;
        }
        vocabulary
            .entries()
            .iter()
            .find(|entry| entry.matches_pattern(candidate.raw))
            .map(|entry| HeadingMatch::new(entry.name(), PATTERN_CONFIDENCE, MatchKind::Pattern))
    }
}

/// Highest partial similarity over every (heading, variation) pair.
///
/// The score is reported even when low; callers apply thresholds. Ties keep
/// the first pair in vocabulary order. No word-boundary check is made.
#[derive(Debug, Clone, Copy, Default)]
pub struct FuzzyStrategy;

impl MatchStrategy for FuzzyStrategy {
    fn name(&self) -> &'static str {
        "fuzzy"
    }

    fn evaluate(&self, candidate: &Candidate<'_>, vocabulary: &Vocabulary) -> Option<HeadingMatch> {
        if candidate.is_blank() {
            return None;
        }
        let mut best: Option<(&str, f64)> = None;
        for entry in vocabulary.entries() {
            for variation in entry.normalized_variations() {
                let score = partial_ratio(&candidate.normalized, variation);
                let best_score = best.map_or(0.0, |(_, s)| s);
                if score > best_score {
                    best = Some((entry.name(), score));
                }
            }
        }
        best.map(|(name, score)| HeadingMatch::new(name, score, MatchKind::Fuzzy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocabulary() -> Vocabulary {
        Vocabulary::builder()
            .heading("Certificate of Origin", ["Certificate of Origin", "Origin Certificate"])
            .heading("Commercial Invoice", ["Commercial Invoice"])
            .build()
            .expect("build vocabulary")
    }

    #[test]
    fn exact_requires_whole_normalized_line() {
        let vocab = vocabulary();
        let hit = ExactStrategy
            .evaluate(&Candidate::new("  commercial   INVOICE "), &vocab)
            .expect("exact hit");
        assert_eq!(hit.heading.as_deref(), Some("Commercial Invoice"));
        assert_eq!(hit.confidence, 100.0);
        assert_eq!(hit.kind, MatchKind::Exact);

        assert!(
            ExactStrategy
                .evaluate(&Candidate::new("Commercial Invoice No. 1"), &vocab)
                .is_none()
        );
    }

    #[test]
    fn exact_matches_canonical_name_not_variations() {
        let vocab = vocabulary();
        assert!(
            ExactStrategy
                .evaluate(&Candidate::new("Origin Certificate"), &vocab)
                .is_none()
        );
    }

    #[test]
    fn pattern_finds_variation_inside_line() {
        let vocab = vocabulary();
        let hit = PatternStrategy
            .evaluate(&Candidate::new("Attached: origin certificate (copy)"), &vocab)
            .expect("pattern hit");
        assert_eq!(hit.heading.as_deref(), Some("Certificate of Origin"));
        assert_eq!(hit.confidence, 95.0);
        assert_eq!(hit.kind, MatchKind::Pattern);
    }

    #[test]
    fn pattern_honours_word_boundaries() {
        let vocab = vocabulary();
        assert!(
            PatternStrategy
                .evaluate(&Candidate::new("XCommercial InvoiceX"), &vocab)
                .is_none()
        );
    }

    #[test]
    fn pattern_prefers_earlier_heading() {
        let vocab = vocabulary();
        let hit = PatternStrategy
            .evaluate(
                &Candidate::new("Commercial Invoice and Certificate of Origin"),
                &vocab,
            )
            .expect("pattern hit");
        assert_eq!(hit.heading.as_deref(), Some("Certificate of Origin"));
    }

    #[test]
    fn fuzzy_reports_best_score_below_threshold() {
        let vocab = vocabulary();
        // Only the C is shared; the tightest window holding one is the "CE"
        // tail of COMMERCIAL INVOICE: 2 * 1 / (7 + 2).
        let hit = FuzzyStrategy
            .evaluate(&Candidate::new("cxxxxxx"), &vocab)
            .expect("fuzzy hit");
        assert_eq!(hit.heading.as_deref(), Some("Commercial Invoice"));
        assert_eq!(hit.confidence, 22.0);
        assert_eq!(hit.kind, MatchKind::Fuzzy);

        assert!(FuzzyStrategy.evaluate(&Candidate::new("zzz"), &vocab).is_none());
    }

    #[test]
    fn fuzzy_ignores_word_boundaries() {
        let vocab = vocabulary();
        let hit = FuzzyStrategy
            .evaluate(&Candidate::new("XCommercial InvoiceX"), &vocab)
            .expect("fuzzy hit");
        assert_eq!(hit.heading.as_deref(), Some("Commercial Invoice"));
        assert_eq!(hit.confidence, 100.0);
        assert_eq!(hit.kind, MatchKind::Fuzzy);
    }

    #[test]
    fn blank_candidates_never_match() {
        let vocab = vocabulary();
        let blank = Candidate::new("   ");
        assert!(ExactStrategy.evaluate(&blank, &vocab).is_none());
        assert!(PatternStrategy.evaluate(&blank, &vocab).is_none());
        assert!(FuzzyStrategy.evaluate(&blank, &vocab).is_none());
    }
}
