//! JSON report writer.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use tracing::debug;

use attrex_model::{Attribute, AttributeSet};

use crate::error::{ReportError, Result};

pub const JSON_FILE_NAME: &str = "attributes.json";

/// Write all aggregated records to `attributes.json` in the output
/// directory. Records are ordered by shortname and every set-valued field
/// serializes sorted, so repeated runs over the same inputs are
/// byte-identical.
pub fn write_attributes_json(dir: &Path, attributes: &AttributeSet) -> Result<PathBuf> {
    let path = dir.join(JSON_FILE_NAME);
    let records: Vec<&Attribute> = attributes.iter().collect();
    let file = File::create(&path).map_err(|source| ReportError::Io {
        path: path.clone(),
        source,
    })?;
    serde_json::to_writer_pretty(BufWriter::new(file), &records)?;
    debug!(path = %path.display(), records = records.len(), "wrote JSON report");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use attrex_model::table::table_from_text;
    use attrex_model::{AttributeTable, NoopProgress};
    use tempfile::TempDir;

    fn sample_set() -> AttributeSet {
        let layout = AttributeTable::new(
            &["Attribute Name", "Occurs in", "Short Name"],
            0,
            2,
            Some(1),
            "",
            "Resource Attributes",
        );
        let mut set = AttributeSet::new();
        let table = table_from_text(&[
            &["Attribute Name", "Occurs in", "Short Name"],
            &["zLabel", "cse", "zl"],
            &["aLabel", "ae, cse", "al"],
        ]);
        set.ingest_table(&table, &layout, "doc1", &mut NoopProgress);
        set
    }

    #[test]
    fn writes_sorted_records() {
        let dir = TempDir::new().unwrap();
        let set = sample_set();
        let path = write_attributes_json(dir.path(), &set).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
        assert_eq!(value[0]["shortname"], "al");
        assert_eq!(value[0]["occursIn"], serde_json::json!(["ae", "cse"]));
        assert_eq!(value[1]["shortname"], "zl");
    }

    #[test]
    fn output_is_reproducible() {
        let dir = TempDir::new().unwrap();
        let set = sample_set();
        let path = write_attributes_json(dir.path(), &set).unwrap();
        let first = std::fs::read_to_string(&path).unwrap();
        let path = write_attributes_json(dir.path(), &set).unwrap();
        let second = std::fs::read_to_string(&path).unwrap();
        assert_eq!(first, second);
    }
}
