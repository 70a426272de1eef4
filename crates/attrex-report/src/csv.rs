//! CSV report writers.

use std::path::{Path, PathBuf};

use tracing::debug;

use attrex_model::{Attribute, AttributeSet};

use crate::error::Result;

/// Write `<document>.csv` listing `(attribute, shortname)` for every
/// attribute that occurred in the given document, sorted
/// case-insensitively by attribute name.
pub fn write_document_csv(dir: &Path, document: &str, attributes: &AttributeSet) -> Result<PathBuf> {
    let path = dir.join(format!("{document}.csv"));
    let mut writer = csv::Writer::from_path(&path)?;
    writer.write_record(["Attribute", "Short Name"])?;
    for entry in sorted_by_attribute(
        attributes
            .iter()
            .filter(|entry| entry.documents.contains(document)),
    ) {
        writer.write_record([entry.attribute.as_str(), entry.shortname.as_str()])?;
    }
    writer.flush().map_err(csv::Error::from)?;
    debug!(path = %path.display(), document, "wrote per-document CSV");
    Ok(path)
}

/// Write the aggregate CSV: `attributes.csv` for the full set or
/// `duplicates.csv` when restricted to shortnames defined more than once.
pub fn write_aggregate_csv(
    dir: &Path,
    attributes: &AttributeSet,
    duplicates_only: bool,
) -> Result<PathBuf> {
    let file_name = if duplicates_only {
        "duplicates.csv"
    } else {
        "attributes.csv"
    };
    let path = dir.join(file_name);
    let mut writer = csv::Writer::from_path(&path)?;
    writer.write_record(["Attribute", "Short Name", "Categories", "Documents"])?;
    let entries: Box<dyn Iterator<Item = &Attribute>> = if duplicates_only {
        Box::new(attributes.duplicates())
    } else {
        Box::new(attributes.iter())
    };
    for entry in sorted_by_attribute(entries) {
        writer.write_record([
            entry.attribute.as_str(),
            entry.shortname.as_str(),
            &join(&entry.categories),
            &join(&entry.documents),
        ])?;
    }
    writer.flush().map_err(csv::Error::from)?;
    debug!(path = %path.display(), duplicates_only, "wrote aggregate CSV");
    Ok(path)
}

fn sorted_by_attribute<'a>(entries: impl Iterator<Item = &'a Attribute>) -> Vec<&'a Attribute> {
    let mut sorted: Vec<&Attribute> = entries.collect();
    sorted.sort_by_key(|entry| (entry.attribute.to_lowercase(), entry.shortname.clone()));
    sorted
}

fn join(values: &std::collections::BTreeSet<String>) -> String {
    values.iter().cloned().collect::<Vec<_>>().join(", ")
}
