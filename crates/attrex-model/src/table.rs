//! Neutral table shape handed over by the document reader.

/// A single table row: the plain text of each cell, in column order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DocRow {
    pub cells: Vec<String>,
}

impl DocRow {
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }
}

/// A 2D grid of text cells as extracted from a document.
///
/// Row 0 is the header row by convention; the matcher decides whether the
/// table is a recognized attribute table at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DocTable {
    pub rows: Vec<DocRow>,
}

impl DocTable {
    pub fn new(rows: Vec<DocRow>) -> Self {
        Self { rows }
    }

    /// The header row, if the table has any rows at all.
    pub fn header(&self) -> Option<&DocRow> {
        self.rows.first()
    }

    /// Data rows (everything below the header).
    pub fn data_rows(&self) -> &[DocRow] {
        if self.rows.is_empty() {
            &[]
        } else {
            &self.rows[1..]
        }
    }
}

/// Convenience constructor for tests and fixtures.
pub fn table_from_text(rows: &[&[&str]]) -> DocTable {
    DocTable::new(
        rows.iter()
            .map(|cells| DocRow::new(cells.iter().map(|c| (*c).to_string()).collect()))
            .collect(),
    )
}
