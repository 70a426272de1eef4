//! Table extraction from .docx packages.
//!
//! A .docx file is a ZIP archive whose body lives in `word/document.xml`.
//! Only top-level body tables are extracted (tables nested inside a cell
//! are skipped entirely); cell text is the concatenation of the cell's
//! paragraphs joined with `\n`, with tabs and breaks mapped to `\t`/`\n`.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::Event;
use tracing::debug;
use zip::ZipArchive;

use attrex_model::{DocRow, DocTable};

use crate::error::{IngestError, Result};

/// Identifier under which a document is aggregated and reported: the
/// path's file stem, falling back to the full file name.
pub fn document_id(path: &Path) -> String {
    path.file_stem()
        .or_else(|| path.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Open a .docx package and extract all of its top-level tables.
pub fn read_document_tables(path: &Path) -> Result<Vec<DocTable>> {
    if !path.exists() {
        return Err(IngestError::MissingFile {
            path: path.to_path_buf(),
        });
    }
    if !path.is_file() {
        return Err(IngestError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let mut archive = ZipArchive::new(file).map_err(|e| IngestError::UnsupportedFormat {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut xml = String::new();
    {
        let mut entry =
            archive
                .by_name("word/document.xml")
                .map_err(|_| IngestError::UnsupportedFormat {
                    path: path.to_path_buf(),
                    reason: "package has no word/document.xml".to_string(),
                })?;
        entry
            .read_to_string(&mut xml)
            .map_err(|source| IngestError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
    }

    let tables = parse_tables(&xml).map_err(|message| IngestError::Parse {
        path: path.to_path_buf(),
        message,
    })?;
    debug!(
        document = %path.display(),
        table_count = tables.len(),
        "extracted tables"
    );
    Ok(tables)
}

/// Event-driven scan of the document body for `w:tbl` elements.
fn parse_tables(xml: &str) -> std::result::Result<Vec<DocTable>, String> {
    let mut reader = Reader::from_str(xml);
    let mut tables: Vec<DocTable> = Vec::new();
    let mut rows: Vec<DocRow> = Vec::new();
    let mut cells: Vec<String> = Vec::new();
    let mut cell: Option<String> = None;
    let mut table_depth = 0usize;
    let mut paragraphs = 0usize;
    let mut in_text = false;

    loop {
        match reader.read_event().map_err(|e| e.to_string())? {
            Event::Eof => break,
            Event::Start(e) => match e.name().as_ref() {
                b"w:tbl" => {
                    table_depth += 1;
                    if table_depth == 1 {
                        rows = Vec::new();
                    }
                }
                b"w:tr" if table_depth == 1 => cells = Vec::new(),
                b"w:tc" if table_depth == 1 => {
                    cell = Some(String::new());
                    paragraphs = 0;
                }
                b"w:p" if table_depth == 1 => {
                    if let Some(buffer) = cell.as_mut() {
                        if paragraphs > 0 {
                            buffer.push('\n');
                        }
                        paragraphs += 1;
                    }
                }
                b"w:t" if table_depth == 1 && cell.is_some() => in_text = true,
                _ => {}
            },
            Event::End(e) => match e.name().as_ref() {
                b"w:tbl" => {
                    if table_depth == 1 {
                        tables.push(DocTable::new(std::mem::take(&mut rows)));
                    }
                    table_depth = table_depth.saturating_sub(1);
                }
                b"w:tr" if table_depth == 1 => {
                    rows.push(DocRow::new(std::mem::take(&mut cells)));
                }
                b"w:tc" if table_depth == 1 => {
                    if let Some(text) = cell.take() {
                        cells.push(text);
                    }
                }
                b"w:t" => in_text = false,
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:p" if table_depth == 1 => {
                    if let Some(buffer) = cell.as_mut() {
                        if paragraphs > 0 {
                            buffer.push('\n');
                        }
                        paragraphs += 1;
                    }
                }
                b"w:tab" if table_depth == 1 => {
                    if let Some(buffer) = cell.as_mut() {
                        buffer.push('\t');
                    }
                }
                b"w:br" | b"w:cr" if table_depth == 1 => {
                    if let Some(buffer) = cell.as_mut() {
                        buffer.push('\n');
                    }
                }
                _ => {}
            },
            Event::Text(t) => {
                if in_text && table_depth == 1 {
                    if let Some(buffer) = cell.as_mut() {
                        let text = t.decode().map_err(|e| e.to_string())?;
                        buffer.push_str(&text);
                    }
                }
            }
            // Entity references inside text arrive as their own events.
            Event::GeneralRef(r) => {
                if in_text && table_depth == 1 {
                    if let Some(buffer) = cell.as_mut() {
                        if let Some(ch) = resolve_reference(&r) {
                            buffer.push(ch);
                        }
                    }
                }
            }
            _ => {}
        }
    }

    Ok(tables)
}

/// Resolve a general entity reference to its character: the five
/// predefined XML entities plus numeric character references.
fn resolve_reference(raw: &[u8]) -> Option<char> {
    match raw {
        b"amp" => Some('&'),
        b"lt" => Some('<'),
        b"gt" => Some('>'),
        b"apos" => Some('\''),
        b"quot" => Some('"'),
        _ => {
            let digits = raw.strip_prefix(b"#")?;
            let code = if let Some(hex) = digits.strip_prefix(b"x").or_else(|| digits.strip_prefix(b"X")) {
                u32::from_str_radix(std::str::from_utf8(hex).ok()?, 16).ok()?
            } else {
                std::str::from_utf8(digits).ok()?.parse().ok()?
            };
            char::from_u32(code)
        }
    }
}
