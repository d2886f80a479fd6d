//! Section and heading-match types produced by segmentation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::page::Page;

/// Heading assigned to pages that no vocabulary entry claimed.
pub const OTHERS_HEADING: &str = "Others";

/// Confidence reported for an exact canonical-name match.
pub const EXACT_CONFIDENCE: f64 = 100.0;

/// Confidence reported for a derived-pattern match.
pub const PATTERN_CONFIDENCE: f64 = 95.0;

/// How a heading was recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    /// Normalized text equals the canonical name.
    Exact,
    /// A derived pattern matched on word boundaries.
    Pattern,
    /// Partial similarity against a variation.
    Fuzzy,
}

impl MatchKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Pattern => "pattern",
            Self::Fuzzy => "fuzzy",
        }
    }

    pub fn is_fuzzy(self) -> bool {
        matches!(self, Self::Fuzzy)
    }
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of matching one text fragment against the vocabulary.
///
/// A `None` heading means "no candidate" whatever the confidence says.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadingMatch {
    pub heading: Option<String>,
    pub confidence: f64,
    pub kind: MatchKind,
}

impl HeadingMatch {
    pub fn new(heading: impl Into<String>, confidence: f64, kind: MatchKind) -> Self {
        Self {
            heading: Some(heading.into()),
            confidence,
            kind,
        }
    }

    /// The empty result: no heading, zero confidence, fuzzy kind.
    pub fn none() -> Self {
        Self {
            heading: None,
            confidence: 0.0,
            kind: MatchKind::Fuzzy,
        }
    }

    pub fn is_candidate(&self) -> bool {
        self.heading.is_some()
    }
}

/// A run of pages attributed to one heading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Canonical heading, or [`OTHERS_HEADING`].
    pub heading: String,
    /// Page indices in ascending order.
    pub pages: Vec<usize>,
    /// Lines of every page, in page order.
    pub content: Vec<String>,
    /// Confidence of the match that opened the section.
    pub confidence: f64,
    pub start_page: usize,
    pub end_page: usize,
    pub match_kind: MatchKind,
}

impl Section {
    /// Opens a section whose first page is `page`.
    pub fn open(heading: impl Into<String>, confidence: f64, kind: MatchKind, page: &Page) -> Self {
        Self {
            heading: heading.into(),
            pages: vec![page.index],
            content: page.lines.clone(),
            confidence,
            start_page: page.index,
            end_page: page.index,
            match_kind: kind,
        }
    }

    /// Appends a following page to the section.
    pub fn push_page(&mut self, page: &Page) {
        debug_assert!(
            page.index > self.end_page,
            "pages must be appended in ascending order"
        );
        self.pages.push(page.index);
        self.content.extend(page.lines.iter().cloned());
        self.end_page = page.index;
    }

    /// Collects unclaimed pages into the catch-all section.
    ///
    /// Returns `None` when there are no pages to collect.
    pub fn others<'a>(pages: impl IntoIterator<Item = &'a Page>) -> Option<Self> {
        let mut pages = pages.into_iter();
        let first = pages.next()?;
        let mut section = Self::open(OTHERS_HEADING, EXACT_CONFIDENCE, MatchKind::Exact, first);
        for page in pages {
            section.push_page(page);
        }
        Some(section)
    }

    pub fn is_others(&self) -> bool {
        self.heading == OTHERS_HEADING
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// True when `pages` is a gap-free ascending run.
    pub fn is_contiguous(&self) -> bool {
        self.pages.windows(2).all(|w| w[1] == w[0] + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(index: usize, lines: &[&str]) -> Page {
        Page::new(index, lines.iter().map(|l| (*l).to_string()).collect())
    }

    #[test]
    fn open_and_extend_track_range_and_content() {
        let mut section = Section::open(
            "Packing List",
            EXACT_CONFIDENCE,
            MatchKind::Exact,
            &page(2, &["Packing List"]),
        );
        section.push_page(&page(3, &["row 1", "row 2"]));

        assert_eq!(section.pages, vec![2, 3]);
        assert_eq!(section.start_page, 2);
        assert_eq!(section.end_page, 3);
        assert_eq!(section.content, vec!["Packing List", "row 1", "row 2"]);
        assert!(section.is_contiguous());
        assert!(!section.is_others());
    }

    #[test]
    fn others_allows_gaps() {
        let pages = [page(0, &["a"]), page(4, &["b"])];
        let section = Section::others(pages.iter()).expect("others section");
        assert!(section.is_others());
        assert_eq!(section.pages, vec![0, 4]);
        assert_eq!(section.confidence, 100.0);
        assert_eq!(section.match_kind, MatchKind::Exact);
        assert!(!section.is_contiguous());
    }

    #[test]
    fn others_of_nothing_is_none() {
        assert!(Section::others(std::iter::empty()).is_none());
    }

    #[test]
    fn match_kind_serializes_lowercase() {
        let json = serde_json::to_string(&MatchKind::Pattern).unwrap();
        assert_eq!(json, "\"pattern\"");
        assert_eq!(MatchKind::Fuzzy.to_string(), "fuzzy");
    }

    #[test]
    fn none_match_is_not_a_candidate() {
        let none = HeadingMatch::none();
        assert!(!none.is_candidate());
        assert_eq!(none.kind, MatchKind::Fuzzy);
        assert_eq!(none.confidence, 0.0);
    }
}
