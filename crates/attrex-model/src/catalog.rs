//! Catalog of recognized attribute table layouts.
//!
//! The oneM2M specification documents carry their shortname definitions in
//! tables with a handful of fixed header layouts. Each catalog entry
//! records one layout: the exact header labels, which columns hold the
//! attribute name, shortname and "Occurs in" context, which document
//! series the layout belongs to, and the category label to attach to every
//! matched row.
//!
//! The catalog is an ordered rule table matched by linear scan with
//! first-match-wins; declaration order is significant because some
//! documents reuse identical header text for different semantic tables,
//! disambiguated only by document prefix.
//!
//! These definitions may need to be updated and extended when new tables
//! are added to the specification documents.

use std::sync::LazyLock;

use crate::table::DocTable;

/// One recognized table layout.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AttributeTable {
    /// Expected header labels, compared exactly, position for position.
    pub headers: Vec<String>,
    /// Column index of the long attribute name.
    pub attribute: usize,
    /// Column index of the shortname.
    pub shortname: usize,
    /// Column index of the "Occurs in" cell, if the layout has one.
    pub occurs_in: Option<usize>,
    /// Case-insensitive prefix the document identifier must start with.
    pub document_prefix: String,
    /// Category label attached to every row matched by this layout.
    pub category: String,
}

impl AttributeTable {
    pub fn new(
        headers: &[&str],
        attribute: usize,
        shortname: usize,
        occurs_in: Option<usize>,
        document_prefix: &str,
        category: &str,
    ) -> Self {
        Self {
            headers: headers.iter().map(|h| (*h).to_string()).collect(),
            attribute,
            shortname,
            occurs_in,
            document_prefix: document_prefix.to_string(),
            category: category.to_string(),
        }
    }

    /// Number of columns a row must have to belong to this layout.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// True when the table's header row matches this layout exactly and
    /// the document identifier carries this layout's prefix.
    fn matches(&self, table: &DocTable, document: &str) -> bool {
        let Some(header) = table.header() else {
            return false;
        };
        if header.cells.len() != self.headers.len() {
            return false;
        }
        let prefix_ok = document
            .to_lowercase()
            .starts_with(&self.document_prefix.to_lowercase());
        prefix_ok
            && self
                .headers
                .iter()
                .zip(&header.cells)
                .all(|(expected, cell)| expected == cell)
    }
}

static CATALOG: LazyLock<Vec<AttributeTable>> = LazyLock::new(|| {
    vec![
        // TS-0004
        AttributeTable::new(
            &["Parameter Name", "XSD long name", "Occurs in", "Short Name"],
            1,
            3,
            Some(2),
            "ts-0004",
            "Primitive Parameters",
        ),
        AttributeTable::new(
            &["Root Element Name", "Occurs in", "Short Name"],
            0,
            2,
            Some(1),
            "ts-0004",
            "Primitive Root Elements",
        ),
        AttributeTable::new(
            &["Attribute Name", "Occurs in", "Short Name"],
            0,
            2,
            Some(1),
            "ts-0004",
            "Resource Attributes",
        ),
        AttributeTable::new(
            &["Resource Type Name", "Short Name"],
            0,
            1,
            None,
            "ts-0004",
            "Resource Types",
        ),
        AttributeTable::new(
            &["Member Name", "Occurs in", "Short Name"],
            0,
            2,
            Some(1),
            "ts-0004",
            "Complex Data Types",
        ),
        AttributeTable::new(
            &["Member Name", "Short Name"],
            0,
            1,
            None,
            "ts-0004",
            "Trigger Payload Fields",
        ),
        // TS-0023
        AttributeTable::new(
            &["Argument Name", "Occurs in", "Short Name"],
            0,
            2,
            Some(1),
            "ts-0023",
            "Action Arguments",
        ),
        AttributeTable::new(
            &["Returned Value Name", "Occurs in", "Short Name"],
            0,
            2,
            Some(1),
            "ts-0023",
            "Action Return Values",
        ),
        // TS-0022
        AttributeTable::new(
            &["Attribute Name", "Occurs in", "Short Name", "Notes"],
            0,
            2,
            Some(1),
            "ts-0022",
            "Common and Field Device Configuration",
        ),
        AttributeTable::new(
            &["Member Name", "Occurs in", "Short Name", "Notes"],
            0,
            2,
            Some(1),
            "ts-0022",
            "Complex Data Types",
        ),
    ]
});

/// The built-in catalog, in declaration order.
pub fn catalog() -> &'static [AttributeTable] {
    &CATALOG
}

/// Find the first catalog entry matching the given table and document.
///
/// Returns `None` when no entry fits; the table is then not a recognized
/// attribute table (a prose table, an unrelated listing) and is ignored.
/// Malformed tables (zero rows) never match.
pub fn find_attribute_table<'a>(
    entries: &'a [AttributeTable],
    table: &DocTable,
    document: &str,
) -> Option<&'a AttributeTable> {
    entries.iter().find(|entry| entry.matches(table, document))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::table_from_text;

    #[test]
    fn matches_resource_attributes_header() {
        let table = table_from_text(&[
            &["Attribute Name", "Occurs in", "Short Name"],
            &["resourceType", "cse", "ty"],
        ]);
        let entry = find_attribute_table(catalog(), &table, "TS-0004-V4_28_0").unwrap();
        assert_eq!(entry.category, "Resource Attributes");
        assert_eq!(entry.occurs_in, Some(1));
    }

    #[test]
    fn header_match_is_exact_and_order_sensitive() {
        let swapped = table_from_text(&[&["Occurs in", "Attribute Name", "Short Name"]]);
        assert!(find_attribute_table(catalog(), &swapped, "TS-0004").is_none());

        let cased = table_from_text(&[&["attribute name", "Occurs in", "Short Name"]]);
        assert!(find_attribute_table(catalog(), &cased, "TS-0004").is_none());

        let padded = table_from_text(&[&["Attribute Name ", "Occurs in", "Short Name"]]);
        assert!(find_attribute_table(catalog(), &padded, "TS-0004").is_none());
    }

    #[test]
    fn column_count_must_match() {
        let extra = table_from_text(&[&["Attribute Name", "Occurs in", "Short Name", "Extra"]]);
        assert!(find_attribute_table(catalog(), &extra, "TS-0004").is_none());
    }

    #[test]
    fn document_prefix_is_case_insensitive() {
        let table = table_from_text(&[&["Resource Type Name", "Short Name"]]);
        assert!(find_attribute_table(catalog(), &table, "ts-0004-v4").is_some());
        assert!(find_attribute_table(catalog(), &table, "TS-0004-V4").is_some());
        assert!(find_attribute_table(catalog(), &table, "TS-0023-V4").is_none());
    }

    #[test]
    fn same_shape_disambiguated_by_prefix() {
        // 'Member Name, Occurs in, Short Name, Notes' only applies to TS-0022.
        let table = table_from_text(&[&["Member Name", "Occurs in", "Short Name", "Notes"]]);
        let entry = find_attribute_table(catalog(), &table, "TS-0022-V4_0_0").unwrap();
        assert_eq!(entry.category, "Complex Data Types");
        assert!(find_attribute_table(catalog(), &table, "TS-0004-V4_28_0").is_none());
    }

    #[test]
    fn earlier_entry_wins_on_ties() {
        let first = AttributeTable::new(&["A", "B"], 0, 1, None, "", "First");
        let second = AttributeTable::new(&["A", "B"], 0, 1, None, "", "Second");
        let entries = vec![first, second];
        let table = table_from_text(&[&["A", "B"]]);
        let matched = find_attribute_table(&entries, &table, "anydoc").unwrap();
        assert_eq!(matched.category, "First");
    }

    #[test]
    fn zero_row_table_never_matches() {
        let empty = DocTable::default();
        assert!(find_attribute_table(catalog(), &empty, "TS-0004").is_none());
    }

    #[test]
    fn builtin_catalog_shape() {
        let entries = catalog();
        assert_eq!(entries.len(), 10);
        for entry in entries {
            assert!(entry.attribute < entry.column_count());
            assert!(entry.shortname < entry.column_count());
            if let Some(occurs_in) = entry.occurs_in {
                assert!(occurs_in < entry.column_count());
            }
        }
    }
}
