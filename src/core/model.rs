//! Result Model
//!
//! Discovery produces `FileRecord`s, extraction turns each into zero or more
//! `ExtractionResult`s, and a run collects those into one `ResultSet`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A discovered `carcols.meta` file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Name of the directory holding the file
    pub folder: String,

    /// Path used to open the file
    pub file_path: PathBuf,

    /// Path relative to the search root, using '/' as separator
    pub relative_path: String,

    /// The configured search root this file was found under
    pub root: String,
}

/// One id occurrence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub folder: String,

    /// Path relative to the search root, using '/' as separator
    pub relative_path: String,

    pub id_value: String,

    pub root: String,
}

impl ExtractionResult {
    /// Create a result for an id found in `record`
    pub fn new(record: &FileRecord, id_value: impl Into<String>) -> Self {
        Self {
            folder: record.folder.clone(),
            relative_path: record.relative_path.clone(),
            id_value: id_value.into(),
            root: record.root.clone(),
        }
    }
}

/// All id occurrences of one run, in discovery order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultSet {
    pub items: Vec<ExtractionResult>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: ExtractionResult) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ExtractionResult> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a ExtractionResult;
    type IntoIter = std::slice::Iter<'a, ExtractionResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
