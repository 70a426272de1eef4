//! Attribute records and merge-on-shortname aggregation.

use std::collections::{BTreeMap, BTreeSet};

use crate::catalog::AttributeTable;
use crate::normalize::{normalize_attribute, normalize_shortname, split_occurs_in};
use crate::progress::ExtractProgress;
use crate::table::DocTable;

/// Sentinel stored in `occurs_in` when a layout has no "Occurs in" column.
pub const OCCURS_IN_NONE: &str = "n/a";

/// One aggregated attribute, keyed by its normalized shortname.
///
/// Set-valued fields use `BTreeSet` so membership is order-independent
/// while serialization is always sorted, making repeated runs
/// byte-identical. The occurrence count is informational and not part of
/// the JSON record.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Attribute {
    pub shortname: String,
    /// Long name as first encountered; never overwritten on merge.
    pub attribute: String,
    #[serde(skip_serializing)]
    pub occurrences: usize,
    #[serde(rename = "occursIn")]
    pub occurs_in: BTreeSet<String>,
    pub categories: BTreeSet<String>,
    pub documents: BTreeSet<String>,
}

/// Aggregation state across all processed tables and documents.
#[derive(Debug, Default)]
pub struct AttributeSet {
    entries: BTreeMap<String, Attribute>,
    processed_rows: usize,
}

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Aggregate every data row of a matched table.
    ///
    /// Rows are skipped independently of each other: an editorial
    /// `Note:` row, a row with the wrong cell count, or a row whose
    /// shortname normalizes to empty never terminates the scan of the
    /// rows below it.
    pub fn ingest_table(
        &mut self,
        table: &DocTable,
        layout: &AttributeTable,
        document: &str,
        progress: &mut dyn ExtractProgress,
    ) {
        let expected = layout.column_count();
        for row in table.data_rows() {
            if row.cells.len() != expected {
                continue;
            }
            let Some(first) = row.cells.first() else {
                continue;
            };
            if first.to_lowercase().starts_with("note:") {
                continue;
            }

            let shortname = normalize_shortname(&row.cells[layout.shortname]);
            if shortname.is_empty() {
                continue;
            }
            let attribute = normalize_attribute(&row.cells[layout.attribute]);
            let occurs_in = match layout.occurs_in {
                Some(index) => split_occurs_in(&row.cells[index]),
                None => vec![OCCURS_IN_NONE.to_string()],
            };

            self.merge(shortname, attribute, occurs_in, layout, document);
            self.processed_rows += 1;
            progress.row_ingested();
        }
    }

    fn merge(
        &mut self,
        shortname: String,
        attribute: String,
        occurs_in: Vec<String>,
        layout: &AttributeTable,
        document: &str,
    ) {
        let entry = self
            .entries
            .entry(shortname.clone())
            .or_insert_with(|| Attribute {
                shortname,
                attribute,
                occurrences: 0,
                occurs_in: BTreeSet::new(),
                categories: BTreeSet::new(),
                documents: BTreeSet::new(),
            });
        entry.occurs_in.extend(occurs_in);
        entry.categories.insert(layout.category.clone());
        entry.documents.insert(document.to_string());
        entry.occurrences += 1;
    }

    /// Number of distinct shortnames.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, shortname: &str) -> Option<&Attribute> {
        self.entries.get(shortname)
    }

    /// All records, sorted by shortname.
    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.entries.values()
    }

    /// Records defined more than once, sorted by shortname.
    pub fn duplicates(&self) -> impl Iterator<Item = &Attribute> {
        self.entries.values().filter(|a| a.occurrences > 1)
    }

    /// Shortnames encountered in more than one matched row. The issuing
    /// specifications are expected to allocate shortnames uniquely, so a
    /// non-zero count is noteworthy but not an error.
    pub fn duplicate_count(&self) -> usize {
        self.duplicates().count()
    }

    /// Total matched rows aggregated across all tables and documents.
    pub fn processed_rows(&self) -> usize {
        self.processed_rows
    }
}
