//! Error taxonomy for a scan run
//!
//! None of these abort a run. Missing roots and unreadable files are
//! collected as diagnostics; an empty result set tells the caller there
//! is nothing to write.

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    /// A configured search root does not exist
    #[error("Directory '{}' not found! Skipping...", .root.display())]
    MissingRoot { root: PathBuf },

    /// A discovered file could not be opened or decoded
    #[error("Error reading {}: {reason}", .path.display())]
    UnreadableFile { path: PathBuf, reason: String },

    /// A report was requested but no ids were extracted
    #[error("No data to save!")]
    EmptyResultSet,

    /// The duplicates report was requested but every id is unique
    #[error("No duplicate ID values found!")]
    NoDuplicates,

    /// Writing a report to disk failed
    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            ScanError::MissingRoot { .. } => "MISSING_ROOT",
            ScanError::UnreadableFile { .. } => "UNREADABLE_FILE",
            ScanError::EmptyResultSet => "EMPTY_RESULT_SET",
            ScanError::NoDuplicates => "NO_DUPLICATES",
            ScanError::Io { .. } => "IO_ERROR",
        }
    }

    /// True when a report had no content to write
    pub fn is_nothing_to_write(&self) -> bool {
        matches!(self, ScanError::EmptyResultSet | ScanError::NoDuplicates)
    }
}

/// A non-fatal problem recorded while scanning
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl From<&ScanError> for Diagnostic {
    fn from(err: &ScanError) -> Self {
        let path = match err {
            ScanError::MissingRoot { root } => Some(root.display().to_string()),
            ScanError::UnreadableFile { path, .. } | ScanError::Io { path, .. } => {
                Some(path.display().to_string())
            }
            ScanError::EmptyResultSet | ScanError::NoDuplicates => None,
        };

        Self {
            code: err.code().to_string(),
            message: err.to_string(),
            path,
        }
    }
}
