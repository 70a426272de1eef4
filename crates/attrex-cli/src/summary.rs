use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute as CellAttribute, Cell, Color, ContentArrangement, Table};

use attrex_model::AttributeSet;

use crate::types::{ExtractResult, ListMode};

pub fn print_summary(result: &ExtractResult, mode: ListMode) {
    println!("Output: {}", result.output_dir.display());
    println!(
        "Processed short names:      {}",
        result.attributes.processed_rows()
    );
    if result.duplicate_count > 0 {
        println!("Duplicate definitions:      {}", result.duplicate_count);
    }
    match mode {
        ListMode::None => {}
        ListMode::All => print_attribute_table(&result.attributes, false),
        ListMode::DuplicatesOnly => print_attribute_table(&result.attributes, true),
    }
}

/// Tabular console listing; duplicate definitions are highlighted since
/// they point at shortname collisions across the specifications.
fn print_attribute_table(attributes: &AttributeSet, duplicates_only: bool) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("attribute"),
        header_cell("shortname"),
        header_cell("category"),
        header_cell("document(s)"),
    ]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    for entry in attributes.iter() {
        let duplicate = entry.occurrences > 1;
        if duplicates_only && !duplicate {
            continue;
        }
        let documents = entry.documents.iter().cloned().collect::<Vec<_>>().join(", ");
        let documents_cell = if duplicate {
            Cell::new(documents).fg(Color::Red)
        } else {
            Cell::new(documents)
        };
        table.add_row(vec![
            Cell::new(&entry.attribute),
            Cell::new(&entry.shortname),
            Cell::new(
                entry
                    .categories
                    .iter()
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            documents_cell,
        ]);
    }
    println!("{table}");
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(CellAttribute::Bold)
}
