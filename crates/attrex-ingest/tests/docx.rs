//! Package-level ingestion tests against real files on disk.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use zip::write::SimpleFileOptions;

use attrex_ingest::{IngestError, read_document_tables};

fn write_docx(dir: &Path, name: &str, document_xml: &str) -> PathBuf {
    let path = dir.join(name);
    let file = File::create(&path).unwrap();
    let mut package = zip::ZipWriter::new(file);
    let options = SimpleFileOptions::default();
    package
        .start_file("[Content_Types].xml", options)
        .unwrap();
    package.write_all(b"<Types/>").unwrap();
    package.start_file("word/document.xml", options).unwrap();
    package.write_all(document_xml.as_bytes()).unwrap();
    package.finish().unwrap();
    path
}

fn document_with_table() -> String {
    "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
     <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
     <w:body>\
     <w:tbl>\
     <w:tr>\
     <w:tc><w:p><w:r><w:t>Attribute Name</w:t></w:r></w:p></w:tc>\
     <w:tc><w:p><w:r><w:t>Occurs in</w:t></w:r></w:p></w:tc>\
     <w:tc><w:p><w:r><w:t>Short Name</w:t></w:r></w:p></w:tc>\
     </w:tr>\
     <w:tr>\
     <w:tc><w:p><w:r><w:t>aLabel</w:t></w:r></w:p></w:tc>\
     <w:tc><w:p><w:r><w:t>cse, ae</w:t></w:r></w:p></w:tc>\
     <w:tc><w:p><w:r><w:t>lbl</w:t></w:r></w:p></w:tc>\
     </w:tr>\
     </w:tbl>\
     </w:body></w:document>"
        .to_string()
}

#[test]
fn reads_tables_from_a_docx_package() {
    let dir = TempDir::new().unwrap();
    let path = write_docx(dir.path(), "TS-0004-test.docx", &document_with_table());
    let tables = read_document_tables(&path).unwrap();
    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].rows.len(), 2);
    assert_eq!(tables[0].rows[1].cells, vec!["aLabel", "cse, ae", "lbl"]);
}

#[test]
fn missing_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let result = read_document_tables(&dir.path().join("absent.docx"));
    assert!(matches!(result, Err(IngestError::MissingFile { .. })));
}

#[test]
fn directory_is_not_a_file() {
    let dir = TempDir::new().unwrap();
    let result = read_document_tables(dir.path());
    assert!(matches!(result, Err(IngestError::NotAFile { .. })));
}

#[test]
fn plain_file_is_not_a_package() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("not-a-docx.docx");
    std::fs::write(&path, "just some text").unwrap();
    let result = read_document_tables(&path);
    assert!(matches!(result, Err(IngestError::UnsupportedFormat { .. })));
}

#[test]
fn package_without_document_body_is_unsupported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.docx");
    let file = File::create(&path).unwrap();
    let mut package = zip::ZipWriter::new(file);
    package
        .start_file("[Content_Types].xml", SimpleFileOptions::default())
        .unwrap();
    package.write_all(b"<Types/>").unwrap();
    package.finish().unwrap();

    let result = read_document_tables(&path);
    assert!(matches!(result, Err(IngestError::UnsupportedFormat { .. })));
}
