//! Result aggregation
//!
//! The `Aggregator` is the only writer of a run's `ResultSet`. Folder groups
//! and duplicate groups are derived views, rebuilt from the set on demand.

use std::collections::HashMap;

use crate::core::model::{ExtractionResult, FileRecord, ResultSet};

/// Ids seen under one folder, in first-seen order (repeats kept)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderGroup<'a> {
    pub folder: &'a str,
    pub ids: Vec<&'a str>,
}

/// Every occurrence of an id that appears at least twice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateGroup<'a> {
    pub id_value: &'a str,
    pub occurrences: Vec<&'a ExtractionResult>,
}

impl DuplicateGroup<'_> {
    pub fn count(&self) -> usize {
        self.occurrences.len()
    }
}

impl ResultSet {
    /// Group id values by folder. Folders appear in the order they were first
    /// seen.
    pub fn group_by_folder(&self) -> Vec<FolderGroup<'_>> {
        let mut groups: Vec<FolderGroup<'_>> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for item in &self.items {
            let slot = *index.entry(item.folder.as_str()).or_insert_with(|| {
                groups.push(FolderGroup {
                    folder: item.folder.as_str(),
                    ids: Vec::new(),
                });
                groups.len() - 1
            });
            groups[slot].ids.push(item.id_value.as_str());
        }

        groups
    }

    /// Ids occurring two or more times, in order of their first occurrence
    pub fn find_duplicates(&self) -> Vec<DuplicateGroup<'_>> {
        let mut groups: Vec<DuplicateGroup<'_>> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for item in &self.items {
            let slot = *index.entry(item.id_value.as_str()).or_insert_with(|| {
                groups.push(DuplicateGroup {
                    id_value: item.id_value.as_str(),
                    occurrences: Vec::new(),
                });
                groups.len() - 1
            });
            groups[slot].occurrences.push(item);
        }

        groups.retain(|group| group.count() >= 2);
        groups
    }
}

/// Collects extraction results for one run
#[derive(Debug, Default)]
pub struct Aggregator {
    results: ResultSet,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one result per id found in `record`; returns how many were added
    pub fn record<I, S>(&mut self, record: &FileRecord, ids: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let before = self.results.len();
        for id in ids {
            self.results.push(ExtractionResult::new(record, id));
        }
        self.results.len() - before
    }

    pub fn all(&self) -> &ResultSet {
        &self.results
    }

    pub fn group_by_folder(&self) -> Vec<FolderGroup<'_>> {
        self.results.group_by_folder()
    }

    pub fn find_duplicates(&self) -> Vec<DuplicateGroup<'_>> {
        self.results.find_duplicates()
    }

    pub fn into_results(self) -> ResultSet {
        self.results
    }
}
