use docsplit_match::{Candidate, HeadingMatcher, MatchStrategy, partial_ratio};
use docsplit_model::{HeadingMatch, MatchKind};
use docsplit_vocab::{Vocabulary, default_vocabulary};
use proptest::prelude::*;

fn default_matcher() -> HeadingMatcher {
    HeadingMatcher::new(default_vocabulary().expect("default vocabulary"))
}

#[test]
fn exact_canonical_name() {
    let hit = default_matcher().find("  Commercial   Invoice ");
    assert_eq!(hit.heading.as_deref(), Some("Commercial Invoice"));
    assert_eq!(hit.confidence, 100.0);
    assert_eq!(hit.kind, MatchKind::Exact);
}

#[test]
fn pattern_inside_longer_line() {
    let hit = default_matcher().find("ORIGINAL BILL OF LADING - NON NEGOTIABLE");
    assert_eq!(hit.heading.as_deref(), Some("Bill of Lading"));
    assert_eq!(hit.confidence, 95.0);
    assert_eq!(hit.kind, MatchKind::Pattern);
}

#[test]
fn variation_matches_as_pattern() {
    let hit = default_matcher().find("Chemical Analysis Report dated 2024-03-01");
    assert_eq!(
        hit.heading.as_deref(),
        Some("Certificate of Chemical Analysis Report")
    );
    assert_eq!(hit.kind, MatchKind::Pattern);
}

#[test]
fn pattern_tries_headings_in_vocabulary_order() {
    // A variation of the first heading: a pattern hit, not an exact one.
    let hit = default_matcher().find("self declaration certificate");
    assert_eq!(
        hit.heading.as_deref(),
        Some("Self Declaration Cum Undertaking Certificate")
    );
    assert_eq!(hit.kind, MatchKind::Pattern);
}

#[test]
fn misspelled_heading_falls_through_to_fuzzy() {
    let hit = default_matcher().find("PACKNG LIST");
    assert_eq!(hit.heading.as_deref(), Some("Packing List"));
    assert_eq!(hit.kind, MatchKind::Fuzzy);
    assert!(hit.confidence >= 80.0, "got {}", hit.confidence);
    assert!(hit.confidence < 100.0);
}

#[test]
fn word_boundaries_apply_to_patterns_but_not_fuzzy() {
    let hit = default_matcher().find("Form 90");
    assert_eq!(hit.kind, MatchKind::Fuzzy);
    assert_eq!(hit.heading.as_deref(), Some("Form 9"));
    assert_eq!(hit.confidence, 100.0);
}

#[test]
fn blank_text_has_no_candidate() {
    assert_eq!(default_matcher().find(" \t "), HeadingMatch::none());
}

#[test]
fn empty_vocabulary_has_no_candidate() {
    let matcher = HeadingMatcher::new(Vocabulary::builder().build().expect("build"));
    let hit = matcher.find("Commercial Invoice");
    assert!(!hit.is_candidate());
    assert_eq!(hit.kind, MatchKind::Fuzzy);
}

struct PrefixStrategy;

impl MatchStrategy for PrefixStrategy {
    fn name(&self) -> &'static str {
        "prefix"
    }

    fn evaluate(&self, candidate: &Candidate<'_>, vocabulary: &Vocabulary) -> Option<HeadingMatch> {
        if !candidate.normalized.starts_with("SECTION:") {
            return None;
        }
        vocabulary
            .entries()
            .first()
            .map(|entry| HeadingMatch::new(entry.name(), 50.0, MatchKind::Pattern))
    }
}

#[test]
fn appended_strategy_only_runs_when_earlier_ones_miss() {
    let vocabulary = Vocabulary::builder()
        .heading("Insurance Policy", ["Insurance Policy"])
        .build()
        .expect("build");
    let matcher = HeadingMatcher::with_strategies(vocabulary, Vec::new())
        .add_strategy(Box::new(docsplit_match::ExactStrategy))
        .add_strategy(Box::new(PrefixStrategy));
    assert_eq!(matcher.strategy_names(), vec!["exact", "prefix"]);

    let exact = matcher.find("insurance policy");
    assert_eq!(exact.confidence, 100.0);

    let prefixed = matcher.find("section: anything");
    assert_eq!(prefixed.heading.as_deref(), Some("Insurance Policy"));
    assert_eq!(prefixed.confidence, 50.0);

    assert!(!matcher.find("unrelated").is_candidate());
}

proptest! {
    #[test]
    fn partial_ratio_is_bounded_and_symmetric(a in "[A-Z ]{0,24}", b in "[A-Z ]{0,24}") {
        let forward = partial_ratio(&a, &b);
        prop_assert!((0.0..=100.0).contains(&forward));
        prop_assert_eq!(forward.fract(), 0.0);
        if a.chars().count() != b.chars().count() {
            prop_assert_eq!(forward, partial_ratio(&b, &a));
        }
    }

    #[test]
    fn matching_is_deterministic(text in "[A-Za-z0-9 .-]{0,40}") {
        let matcher = default_matcher();
        prop_assert_eq!(matcher.find(&text), matcher.find(&text));
    }

    #[test]
    fn canonical_names_always_match_exactly(index in 0usize..12, pad in " {0,3}") {
        let vocabulary = default_vocabulary().expect("default vocabulary");
        let name = vocabulary.entries()[index].name().to_string();
        let matcher = HeadingMatcher::new(vocabulary);
        let hit = matcher.find(&format!("{pad}{}{pad}", name.to_lowercase()));
        prop_assert_eq!(hit.heading.as_deref(), Some(name.as_str()));
        prop_assert_eq!(hit.kind, MatchKind::Exact);
    }
}
