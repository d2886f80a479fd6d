//! JSON page records.
//!
//! Each record carries its page index, text lines and optionally the tables
//! found on the page. Table rows are flattened into extra lines after the
//! text so headings inside tables can still be matched.

use docsplit_model::{Document, ModelError, Page};
use serde::Deserialize;

use crate::text::clean_lines;

/// Separator placed between the cells of a flattened table row.
pub const CELL_SEPARATOR: &str = " | ";

/// A page as stored in a JSON page-record file.
#[derive(Debug, Clone, Deserialize)]
pub struct PageRecord {
    pub index: usize,
    #[serde(default)]
    pub lines: Vec<String>,
    /// Tables as rows of cells; a missing cell is `null`.
    #[serde(default)]
    pub tables: Vec<Vec<Vec<Option<String>>>>,
}

impl PageRecord {
    /// The page's lines followed by one line per table row, trimmed and with
    /// blank lines dropped.
    pub fn into_page(self) -> Page {
        let rows = self
            .tables
            .iter()
            .flatten()
            .map(Vec::as_slice)
            .map(table_row_line);
        Page::new(self.index, clean_lines(self.lines.into_iter().chain(rows)))
    }
}

/// Joins the cells of a table row; missing cells render empty.
pub fn table_row_line(row: &[Option<String>]) -> String {
    row.iter()
        .map(|cell| cell.as_deref().unwrap_or_default())
        .collect::<Vec<_>>()
        .join(CELL_SEPARATOR)
}

/// Parses page records and validates their numbering.
pub(crate) fn parse_json_pages(text: &str) -> Result<Document, JsonPagesError> {
    let records: Vec<PageRecord> = serde_json::from_str(text).map_err(JsonPagesError::Parse)?;
    let pages = records.into_iter().map(PageRecord::into_page).collect();
    Document::from_pages(pages).map_err(JsonPagesError::Pages)
}

/// Path-free failure, given a path by the reader.
#[derive(Debug)]
pub(crate) enum JsonPagesError {
    Parse(serde_json::Error),
    Pages(ModelError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_rows_join_cells_with_separator() {
        let row = vec![Some("Item".to_string()), None, Some("Qty".to_string())];
        assert_eq!(table_row_line(&row), "Item |  | Qty");
    }

    #[test]
    fn tables_follow_text_lines() {
        let document = parse_json_pages(
            r#"[
                {"index": 0, "lines": ["Packing List"], "tables": [[["Carton", "Weight"], ["1", null]]]},
                {"index": 1}
            ]"#,
        )
        .expect("parse pages");
        assert_eq!(
            document.pages()[0].lines,
            vec!["Packing List", "Carton | Weight", "1 |"]
        );
        assert!(document.pages()[1].is_empty());
    }

    #[test]
    fn blank_lines_do_not_count_toward_leading_lines() {
        let document = parse_json_pages(
            r#"[{"index": 0, "lines": ["", "  ", "", "   ", "", "  Packing List "], "tables": [[[null], [" ", null]]]}]"#,
        )
        .expect("parse pages");
        assert_eq!(document.pages()[0].lines, vec!["Packing List", "|"]);
    }

    #[test]
    fn rejects_out_of_order_indices() {
        let err = parse_json_pages(r#"[{"index": 1, "lines": []}]"#).unwrap_err();
        assert!(matches!(err, JsonPagesError::Pages(ModelError::PageIndex { .. })));
    }

    #[test]
    fn rejects_malformed_records() {
        let err = parse_json_pages(r#"[{"lines": ["x"]}]"#).unwrap_err();
        assert!(matches!(err, JsonPagesError::Parse(_)));
    }
}
