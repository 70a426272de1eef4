//! Data model for the oneM2M attribute extractor.
//!
//! The two components with actual design content live here: the table
//! matcher ([`find_attribute_table`]) that recognizes shortname tables by
//! their header shape, and the aggregator ([`AttributeSet`]) that merges
//! extracted rows keyed by normalized shortname. Everything else in the
//! workspace is plumbing around these.

pub mod attribute;
pub mod catalog;
pub mod normalize;
pub mod progress;
pub mod table;

pub use attribute::{Attribute, AttributeSet};
pub use catalog::{AttributeTable, catalog, find_attribute_table};
pub use progress::{ExtractProgress, NoopProgress};
pub use table::{DocRow, DocTable};
