use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use attrex_ingest::{document_id, read_document_tables};
use attrex_model::{AttributeSet, DocTable, ExtractProgress, catalog, find_attribute_table};
use attrex_report::{write_aggregate_csv, write_attributes_json, write_document_csv};

use crate::cli::Cli;
use crate::progress::ConsoleProgress;
use crate::types::{ExtractResult, ListMode};

/// Run the whole extraction: read every input document, aggregate matched
/// tables, write the reports.
///
/// All documents are read and validated before any aggregation or output
/// happens; any input failure aborts the run with nothing written.
pub fn run_extract(args: &Cli) -> Result<ExtractResult> {
    // Deterministic processing order regardless of argument order.
    let mut documents: Vec<PathBuf> = args.documents.clone();
    documents.sort();
    documents.dedup();

    // =========================================================================
    // Stage 1: Read - open and parse every input before touching outputs
    // =========================================================================
    let read_span = info_span!("read", document_count = documents.len());
    let read_start = Instant::now();
    let parsed: Vec<(String, Vec<DocTable>)> = read_span.in_scope(|| {
        documents
            .iter()
            .map(|path| {
                let tables = read_document_tables(path)?;
                Ok((document_id(path), tables))
            })
            .collect::<std::result::Result<_, attrex_ingest::IngestError>>()
    })?;
    info!(
        document_count = parsed.len(),
        duration_ms = read_start.elapsed().as_millis(),
        "read complete"
    );

    // =========================================================================
    // Stage 2: Match and aggregate
    // =========================================================================
    let total_tables: usize = parsed.iter().map(|(_, tables)| tables.len()).sum();
    let mut progress = ConsoleProgress::new(total_tables as u64);
    let mut attributes = AttributeSet::new();
    let entries = catalog();
    for (document, tables) in &parsed {
        progress.document_started(document, tables.len());
        let mut matched = 0usize;
        for table in tables {
            if let Some(layout) = find_attribute_table(entries, table, document) {
                attributes.ingest_table(table, layout, document, &mut progress);
                matched += 1;
            }
            progress.table_scanned();
        }
        debug!(
            document = %document,
            tables = tables.len(),
            matched,
            "document scanned"
        );
    }
    let duplicate_count = attributes.duplicate_count();
    progress.duplicates_counted(duplicate_count);
    progress.finish();
    info!(
        shortnames = attributes.len(),
        processed_rows = attributes.processed_rows(),
        duplicates = duplicate_count,
        "aggregation complete"
    );

    // =========================================================================
    // Stage 3: Write outputs
    // =========================================================================
    fs::create_dir_all(&args.output_dir).with_context(|| {
        format!(
            "failed to create output directory {}",
            args.output_dir.display()
        )
    })?;
    let json_path = write_attributes_json(&args.output_dir, &attributes)?;

    let mut document_csvs = Vec::new();
    if args.csv {
        for (document, _) in &parsed {
            document_csvs.push(write_document_csv(&args.output_dir, document, &attributes)?);
        }
    }

    let aggregate_csv = match args.list_mode() {
        ListMode::None => None,
        ListMode::All => Some(write_aggregate_csv(&args.output_dir, &attributes, false)?),
        ListMode::DuplicatesOnly => Some(write_aggregate_csv(&args.output_dir, &attributes, true)?),
    };

    Ok(ExtractResult {
        output_dir: args.output_dir.clone(),
        json_path,
        document_csvs,
        aggregate_csv,
        attributes,
        duplicate_count,
    })
}
