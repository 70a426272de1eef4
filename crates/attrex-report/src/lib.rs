//! Report writers: the output boundary of the extractor.
//!
//! Aggregation state is unordered by nature; everything written here is
//! sorted first so that identical inputs always produce identical files.

pub mod csv;
pub mod error;
pub mod json;

pub use self::csv::{write_aggregate_csv, write_document_csv};
pub use error::{ReportError, Result};
pub use json::{JSON_FILE_NAME, write_attributes_json};
