//! Page content extraction.
//!
//! Turns source files into a [`docsplit_model::Document`]:
//!
//! - `.txt` dumps with form-feed page breaks
//! - `.json` page records with optional tables

pub mod error;
mod json;
mod reader;
mod text;

pub use error::{IngestError, Result};
pub use json::{CELL_SEPARATOR, PageRecord, table_row_line};
pub use reader::{DocumentFormat, read_document};
pub use text::{PAGE_BREAK, parse_text_pages, split_page_text};
