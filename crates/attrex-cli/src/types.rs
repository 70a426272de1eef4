use std::path::PathBuf;

use attrex_model::AttributeSet;

/// What to list on the console (and which aggregate CSV to write).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMode {
    None,
    All,
    DuplicatesOnly,
}

/// Outcome of a full extraction run.
#[derive(Debug)]
pub struct ExtractResult {
    pub output_dir: PathBuf,
    pub json_path: PathBuf,
    pub document_csvs: Vec<PathBuf>,
    pub aggregate_csv: Option<PathBuf>,
    pub attributes: AttributeSet,
    pub duplicate_count: usize,
}
