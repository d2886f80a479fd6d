//! Document segmentation into headed sections.

use std::collections::BTreeSet;

use docsplit_match::HeadingMatcher;
use docsplit_model::{Document, Section, SegmentationOptions};
use docsplit_vocab::Vocabulary;
use serde::Serialize;
use tracing::{info, info_span};

use crate::error::Result;
use crate::passes::{fuzzy_pass, strict_pass};

/// Splits documents into sections using a heading matcher.
///
/// # Example
///
/// ```ignore
/// use docsplit_core::Segmenter;
/// use docsplit_model::{Document, SegmentationOptions};
/// use docsplit_vocab::default_vocabulary;
///
/// let segmenter = Segmenter::from_vocabulary(default_vocabulary()?, SegmentationOptions::default())?;
/// let result = segmenter.segment(&Document::from_lines([vec!["Packing List"]]));
/// assert_eq!(result.sections()[0].heading, "Packing List");
/// ```
#[derive(Debug)]
pub struct Segmenter {
    matcher: HeadingMatcher,
    options: SegmentationOptions,
}

impl Segmenter {
    /// Creates a segmenter after validating `options`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SegmentError::Options`] when a threshold is outside
    /// `0..=100` or no heading lines would be scanned.
    pub fn new(matcher: HeadingMatcher, options: SegmentationOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { matcher, options })
    }

    /// Creates a segmenter using the standard matcher over `vocabulary`.
    ///
    /// # Errors
    ///
    /// Same as [`Segmenter::new`].
    pub fn from_vocabulary(vocabulary: Vocabulary, options: SegmentationOptions) -> Result<Self> {
        Self::new(HeadingMatcher::new(vocabulary), options)
    }

    pub fn matcher(&self) -> &HeadingMatcher {
        &self.matcher
    }

    pub fn options(&self) -> &SegmentationOptions {
        &self.options
    }

    /// Splits `document` into sections.
    ///
    /// Every page ends up in exactly one section. Matched sections are ordered
    /// by their first page; unclaimed pages form a trailing "Others" section.
    pub fn segment(&self, document: &Document) -> Segmentation {
        let span = info_span!("segment", pages = document.len());
        let _guard = span.enter();

        let strict = strict_pass(&self.matcher, &self.options, document);
        let unclaimed: Vec<usize> = document
            .pages()
            .iter()
            .map(|page| page.index)
            .filter(|index| !strict.claimed.contains(index))
            .collect();
        let fuzzy = fuzzy_pass(&self.matcher, &self.options, document, &unclaimed);

        let claimed: BTreeSet<usize> = strict.claimed.union(&fuzzy.claimed).copied().collect();
        let strict_sections = strict.sections.len();
        let fuzzy_sections = fuzzy.sections.len();

        let mut sections = strict.sections;
        sections.extend(fuzzy.sections);
        sections.sort_by_key(|section| section.start_page);

        let residual = Section::others(
            document
                .pages()
                .iter()
                .filter(|page| !claimed.contains(&page.index)),
        );
        let unmatched_pages = residual.as_ref().map_or(0, Section::page_count);
        sections.extend(residual);

        info!(
            sections = sections.len(),
            strict = strict_sections,
            fuzzy = fuzzy_sections,
            unmatched_pages,
            "segmentation complete"
        );

        Segmentation {
            page_count: document.len(),
            sections,
        }
    }
}

/// The sections of one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segmentation {
    page_count: usize,
    sections: Vec<Section>,
}

impl Segmentation {
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn into_sections(self) -> Vec<Section> {
        self.sections
    }

    /// Number of pages in the segmented document.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Sections attributed to a vocabulary heading.
    pub fn matched(&self) -> impl Iterator<Item = &Section> + '_ {
        self.sections.iter().filter(|section| !section.is_others())
    }

    /// The catch-all section, when any page went unclaimed.
    pub fn others(&self) -> Option<&Section> {
        self.sections.iter().find(|section| section.is_others())
    }

    /// The section holding page `index`.
    pub fn section_for_page(&self, index: usize) -> Option<&Section> {
        self.sections
            .iter()
            .find(|section| section.pages.contains(&index))
    }

    /// Canonical headings of the matched sections, in section order.
    pub fn headings(&self) -> Vec<&str> {
        self.matched().map(|section| section.heading.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use docsplit_model::ModelError;

    use super::*;
    use crate::error::SegmentError;

    #[test]
    fn segmenter_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Segmenter>();
    }

    #[test]
    fn rejects_invalid_options() {
        let options = SegmentationOptions::default().with_heading_lines_scanned(0);
        let err = Segmenter::from_vocabulary(Vocabulary::default(), options).unwrap_err();
        assert!(matches!(
            err,
            SegmentError::Options(ModelError::InvalidOption { .. })
        ));
    }

    #[test]
    fn empty_vocabulary_puts_everything_in_others() {
        let segmenter =
            Segmenter::from_vocabulary(Vocabulary::default(), SegmentationOptions::default())
                .expect("segmenter");
        let result = segmenter.segment(&Document::from_lines([vec!["Packing List"], vec![]]));
        assert_eq!(result.sections().len(), 1);
        assert_eq!(result.others().map(|s| s.pages.clone()), Some(vec![0, 1]));
        assert!(result.headings().is_empty());
    }

    #[test]
    fn serializes_sections_with_lowercase_kind() {
        let vocabulary = Vocabulary::builder()
            .heading("Form 9", ["Form 9"])
            .build()
            .expect("vocabulary");
        let segmenter = Segmenter::from_vocabulary(vocabulary, SegmentationOptions::default())
            .expect("segmenter");
        let result = segmenter.segment(&Document::from_lines([vec!["form 9"]]));
        let json = serde_json::to_value(&result).expect("serialize");
        assert_eq!(json["page_count"], 1);
        assert_eq!(json["sections"][0]["heading"], "Form 9");
        assert_eq!(json["sections"][0]["match_kind"], "exact");
    }
}
