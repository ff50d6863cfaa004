//! Scan pipeline
//!
//! roots -> file records -> ids per file -> `ResultSet`.
//! Missing roots and unreadable files are logged, recorded as diagnostics and
//! skipped; the run always finishes with whatever it could collect.

use std::path::PathBuf;
use tracing::{debug, info};

use crate::backends::extract::extract_file_lenient;
use crate::backends::scan::locate_files;
use crate::core::error::Diagnostic;
use crate::core::model::{FileRecord, ResultSet};
use crate::flows::aggregate::Aggregator;

/// Everything one run produced
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Number of `carcols.meta` files discovered
    pub files_found: usize,

    /// All id occurrences in discovery order
    pub results: ResultSet,

    /// Non-fatal problems, in the order they happened
    pub diagnostics: Vec<Diagnostic>,
}

/// Discover files under `roots`, extract their ids and aggregate them
pub fn scan_roots(roots: &[PathBuf]) -> ScanOutcome {
    let mut diagnostics = Vec::new();
    let mut files: Vec<FileRecord> = Vec::new();

    for item in locate_files(roots) {
        match item {
            Ok(record) => files.push(record),
            Err(err) => diagnostics.push(Diagnostic::from(&err)),
        }
    }

    if files.is_empty() {
        info!("No carcols.meta files found!");
        return ScanOutcome {
            files_found: 0,
            results: ResultSet::new(),
            diagnostics,
        };
    }

    info!("Found {} carcols.meta files", files.len());
    info!("Processing files...");

    let mut aggregator = Aggregator::new();
    for record in &files {
        let (ids, err) = extract_file_lenient(&record.file_path);
        if let Some(err) = err {
            diagnostics.push(Diagnostic::from(&err));
            continue;
        }

        let added = aggregator.record(record, ids);
        debug!(
            root = %record.root,
            folder = %record.folder,
            ids = added,
            "Processed {}",
            record.relative_path
        );
    }

    info!("Total ID values extracted: {}", aggregator.all().len());
    debug!(
        folders = aggregator.group_by_folder().len(),
        duplicate_ids = aggregator.find_duplicates().len(),
        "Aggregation finished"
    );

    let results = aggregator.into_results();

    ScanOutcome {
        files_found: files.len(),
        results,
        diagnostics,
    }
}
