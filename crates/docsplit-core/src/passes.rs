//! The two segmentation passes.
//!
//! The strict pass walks every page and only accepts exact or pattern
//! matches found in the first few lines. The fuzzy pass then walks the pages
//! the strict pass left unclaimed, in their own fresh context, and accepts
//! the best fuzzy match anywhere on the page.

use std::collections::BTreeSet;

use docsplit_match::HeadingMatcher;
use docsplit_model::{Document, HeadingMatch, MatchKind, Page, Section, SegmentationOptions};
use tracing::debug;

/// Sections produced by one pass and the pages they cover.
#[derive(Debug, Default)]
pub(crate) struct PassOutcome {
    pub sections: Vec<Section>,
    pub claimed: BTreeSet<usize>,
}

/// Tracks the open section while a pass walks its pages.
#[derive(Default)]
struct SectionCursor {
    outcome: PassOutcome,
    current: Option<Section>,
}

impl SectionCursor {
    fn open(&mut self, heading: String, confidence: f64, kind: MatchKind, page: &Page) {
        debug!(
            page = page.index,
            heading = %heading,
            confidence,
            kind = %kind,
            "section opened"
        );
        if let Some(done) = self.current.take() {
            self.outcome.sections.push(done);
        }
        self.current = Some(Section::open(heading, confidence, kind, page));
        self.outcome.claimed.insert(page.index);
    }

    /// Extends the open section; a page before any heading stays unclaimed.
    fn extend(&mut self, page: &Page) {
        if let Some(section) = self.current.as_mut() {
            section.push_page(page);
            self.outcome.claimed.insert(page.index);
        }
    }

    fn finish(mut self) -> PassOutcome {
        self.outcome.sections.extend(self.current.take());
        self.outcome
    }
}

/// First pass: exact or pattern matches within the scanned lines.
pub(crate) fn strict_pass(
    matcher: &HeadingMatcher,
    options: &SegmentationOptions,
    document: &Document,
) -> PassOutcome {
    let mut cursor = SectionCursor::default();
    for page in document.pages() {
        match strict_heading(matcher, options, page) {
            Some((heading, confidence, kind)) => cursor.open(heading, confidence, kind, page),
            None => cursor.extend(page),
        }
    }
    cursor.finish()
}

/// Second pass over `domain`, the pages the strict pass did not claim.
pub(crate) fn fuzzy_pass(
    matcher: &HeadingMatcher,
    options: &SegmentationOptions,
    document: &Document,
    domain: &[usize],
) -> PassOutcome {
    let mut cursor = SectionCursor::default();
    for page in domain.iter().filter_map(|&index| document.page(index)) {
        match best_fuzzy(matcher, page) {
            Some((heading, confidence)) if confidence >= options.fuzzy_threshold => {
                cursor.open(heading, confidence, MatchKind::Fuzzy, page);
            }
            _ => cursor.extend(page),
        }
    }
    cursor.finish()
}

/// The first acceptable non-fuzzy match among the page's leading lines.
fn strict_heading(
    matcher: &HeadingMatcher,
    options: &SegmentationOptions,
    page: &Page,
) -> Option<(String, f64, MatchKind)> {
    page.lines
        .iter()
        .take(options.heading_lines_scanned)
        .find_map(|line| {
            let HeadingMatch {
                heading: Some(heading),
                confidence,
                kind,
            } = matcher.find(line)
            else {
                return None;
            };
            (!kind.is_fuzzy() && confidence >= options.min_confidence)
                .then_some((heading, confidence, kind))
        })
}

/// The highest-scoring fuzzy match over every line of the page.
///
/// Lines whose best match is exact or pattern are ignored here. Ties keep the
/// earliest line.
fn best_fuzzy(matcher: &HeadingMatcher, page: &Page) -> Option<(String, f64)> {
    let mut best: Option<(String, f64)> = None;
    for line in &page.lines {
        let hit = matcher.find(line);
        if !hit.kind.is_fuzzy() {
            continue;
        }
        let Some(heading) = hit.heading else {
            continue;
        };
        if hit.confidence > best.as_ref().map_or(0.0, |(_, score)| *score) {
            best = Some((heading, hit.confidence));
        }
    }
    best
}
