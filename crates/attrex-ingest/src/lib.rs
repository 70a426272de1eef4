//! Document ingestion for the oneM2M attribute extractor.
//!
//! The rest of the workspace treats document parsing as an external
//! collaborator that yields a sequence of tables per named document; this
//! crate is that collaborator for .docx packages.

pub mod docx;
pub mod error;

pub use docx::{document_id, read_document_tables};
pub use error::{IngestError, Result};
