//! Report formatters
//!
//! Three read-only views over a `ResultSet`, each rendered to a complete
//! text document. An empty set yields `ScanError::EmptyResultSet`.

use crate::core::error::ScanError;
use crate::core::model::{ExtractionResult, ResultSet};
use crate::core::natural::{sort_natural, NaturalKey};

const HEAVY_RULE: usize = 50;
const LIGHT_RULE: usize = 30;

/// Which report to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// Ids grouped by folder
    Grouped,
    /// `id | folder`, one per line
    Simple,
    /// Ids that occur more than once
    Duplicates,
}

impl ReportKind {
    pub const ALL: [ReportKind; 3] = [
        ReportKind::Grouped,
        ReportKind::Simple,
        ReportKind::Duplicates,
    ];

    pub fn default_file_name(&self) -> &'static str {
        match self {
            ReportKind::Grouped => "carcols_ids.txt",
            ReportKind::Simple => "carcols_ids_simple.txt",
            ReportKind::Duplicates => "duplicate_ids.txt",
        }
    }

    pub fn render(&self, results: &ResultSet) -> Result<String, ScanError> {
        match self {
            ReportKind::Grouped => grouped_report(results),
            ReportKind::Simple => simple_report(results),
            ReportKind::Duplicates => duplicates_report(results),
        }
    }
}

fn ensure_not_empty(results: &ResultSet) -> Result<(), ScanError> {
    if results.is_empty() {
        Err(ScanError::EmptyResultSet)
    } else {
        Ok(())
    }
}

fn rule(ch: &str, width: usize) -> String {
    format!("{}\n", ch.repeat(width))
}

/// Ids per folder, folders in first-seen order, ids in natural order
pub fn grouped_report(results: &ResultSet) -> Result<String, ScanError> {
    ensure_not_empty(results)?;

    let groups = results.group_by_folder();
    let mut output = String::new();

    output.push_str("Carcols.meta ID Values Extraction Report\n");
    output.push_str(&rule("=", HEAVY_RULE));
    output.push('\n');

    for group in &groups {
        let mut ids = group.ids.clone();
        sort_natural(&mut ids);

        output.push_str(&format!("Folder: {}\n", group.folder));
        output.push_str(&rule("-", LIGHT_RULE));
        for id in ids {
            output.push_str(&format!("ID: {}\n", id));
        }
        output.push('\n');
    }

    output.push_str(&rule("=", HEAVY_RULE));
    output.push_str(&format!("Total folders processed: {}\n", groups.len()));
    output.push_str(&format!("Total ID values found: {}\n", results.len()));

    Ok(output)
}

/// Every result as `id | folder`, globally in natural id order
pub fn simple_report(results: &ResultSet) -> Result<String, ScanError> {
    ensure_not_empty(results)?;

    let mut sorted: Vec<&ExtractionResult> = results.iter().collect();
    sorted.sort_by_cached_key(|item| NaturalKey::new(&item.id_value));

    let mut output = String::new();
    for item in sorted {
        output.push_str(&format!("{} | {}\n", item.id_value, item.folder));
    }

    Ok(output)
}

/// Duplicated ids in natural order with every place they occur
pub fn duplicates_report(results: &ResultSet) -> Result<String, ScanError> {
    ensure_not_empty(results)?;

    let mut duplicates = results.find_duplicates();
    if duplicates.is_empty() {
        return Err(ScanError::NoDuplicates);
    }
    duplicates.sort_by_cached_key(|group| NaturalKey::new(group.id_value));

    let mut output = String::new();
    output.push_str("DUPLICATE ID VALUES REPORT\n");
    output.push_str(&rule("=", HEAVY_RULE));
    output.push('\n');

    for group in &duplicates {
        output.push_str(&format!(
            "ID: {} (found {} times)\n",
            group.id_value,
            group.count()
        ));
        output.push_str(&rule("-", LIGHT_RULE));
        for location in &group.occurrences {
            output.push_str(&format!("  Folder: {}\n", location.folder));
            output.push_str(&format!("  Path: {}\n", location.relative_path));
        }
        output.push('\n');
    }

    let instances: usize = duplicates.iter().map(|group| group.count()).sum();
    output.push_str(&rule("=", HEAVY_RULE));
    output.push_str(&format!("Total duplicate IDs: {}\n", duplicates.len()));
    output.push_str(&format!("Total duplicate instances: {}\n", instances));

    Ok(output)
}

/// Distinct duplicated ids and the number of occurrences they account for
pub fn duplicate_totals(results: &ResultSet) -> (usize, usize) {
    let duplicates = results.find_duplicates();
    let instances = duplicates.iter().map(|group| group.count()).sum();
    (duplicates.len(), instances)
}
