//! Tests for reading source documents from disk.

use std::fs;
use std::path::PathBuf;

use docsplit_ingest::{DocumentFormat, IngestError, read_document};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn reads_text_dump_pages() {
    let dir = TempDir::new().expect("temp dir");
    let path = write(
        &dir,
        "shipment.txt",
        "COMMERCIAL INVOICE\nInvoice No. 42\n\u{c}  Packing List  \n\n",
    );

    let document = read_document(&path).expect("read text");
    assert_eq!(document.len(), 2);
    assert_eq!(
        document.pages()[0].lines,
        vec!["COMMERCIAL INVOICE", "Invoice No. 42"]
    );
    assert_eq!(document.pages()[1].lines, vec!["Packing List"]);
}

#[test]
fn reads_json_page_records_with_tables() {
    let dir = TempDir::new().expect("temp dir");
    let path = write(
        &dir,
        "shipment.JSON",
        r#"[
            {"index": 0, "lines": ["Bill of Lading"]},
            {"index": 1, "lines": [], "tables": [[["Form 9", null, "signed"]]]}
        ]"#,
    );

    let document = read_document(&path).expect("read json");
    assert_eq!(document.len(), 2);
    assert_eq!(document.pages()[1].lines, vec!["Form 9 |  | signed"]);
}

#[test]
fn rejects_unsupported_extension() {
    let dir = TempDir::new().expect("temp dir");
    let path = write(&dir, "shipment.pdf", "%PDF-1.7");
    let err = read_document(&path).unwrap_err();
    assert!(matches!(err, IngestError::UnsupportedFormat { .. }));
    assert_eq!(DocumentFormat::from_path(&path), None);
}

#[test]
fn reports_missing_file() {
    let dir = TempDir::new().expect("temp dir");
    let err = read_document(&dir.path().join("missing.txt")).unwrap_err();
    assert!(matches!(err, IngestError::FileRead { .. }));
}

#[test]
fn reports_malformed_json_and_index_gaps() {
    let dir = TempDir::new().expect("temp dir");

    let malformed = write(&dir, "bad.json", "{not json");
    assert!(matches!(
        read_document(&malformed).unwrap_err(),
        IngestError::Json { .. }
    ));

    let gap = write(
        &dir,
        "gap.json",
        r#"[{"index": 0, "lines": []}, {"index": 2, "lines": []}]"#,
    );
    let err = read_document(&gap).unwrap_err();
    assert!(matches!(err, IngestError::PageIndex { .. }));
    assert!(err.to_string().contains("gap.json"));
}
