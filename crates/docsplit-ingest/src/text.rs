//! Plain-text page dumps.
//!
//! Text extracted from a PDF marks page breaks with a form feed. Each page's
//! lines are trimmed and blank lines are dropped.

use docsplit_model::Document;

/// Page break emitted by PDF-to-text tools.
pub const PAGE_BREAK: char = '\u{000C}';

/// Splits one page of text into trimmed, non-blank lines.
pub fn split_page_text(text: &str) -> Vec<String> {
    clean_lines(text.lines())
}

/// Trims each line and drops the blank ones.
pub(crate) fn clean_lines<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| {
            let line = line.as_ref().trim();
            (!line.is_empty()).then(|| line.to_string())
        })
        .collect()
}

/// Builds a document from a form-feed separated text dump.
///
/// A trailing page break does not add an empty final page; empty text yields
/// an empty document.
pub fn parse_text_pages(text: &str) -> Document {
    if text.is_empty() {
        return Document::default();
    }
    let text = text.strip_suffix(PAGE_BREAK).unwrap_or(text);
    Document::from_lines(text.split(PAGE_BREAK).map(split_page_text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_lines_and_drops_blanks() {
        let lines = split_page_text("  Packing List \r\n\n\t \n Carton 1\n");
        assert_eq!(lines, vec!["Packing List", "Carton 1"]);
    }

    #[test]
    fn form_feed_separates_pages() {
        let document = parse_text_pages("Commercial Invoice\n\u{c}\n\u{c}Packing List\n\u{c}");
        assert_eq!(document.len(), 3);
        assert_eq!(document.pages()[0].lines, vec!["Commercial Invoice"]);
        assert!(document.pages()[1].is_empty());
        assert_eq!(document.pages()[2].lines, vec!["Packing List"]);
        assert_eq!(document.pages()[2].index, 2);
    }

    #[test]
    fn empty_text_has_no_pages() {
        assert!(parse_text_pages("").is_empty());
        assert_eq!(parse_text_pages("\n").len(), 1);
    }
}
