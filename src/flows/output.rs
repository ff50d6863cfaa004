//! Report writing
//!
//! Renders each requested report and writes it under the output directory.
//! A report with nothing to write produces no file.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::error::ScanError;
use crate::core::model::ResultSet;
use crate::flows::report::ReportKind;

/// File names for the three reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFiles {
    pub grouped: String,
    pub simple: String,
    pub duplicates: String,
}

impl Default for ReportFiles {
    fn default() -> Self {
        Self {
            grouped: ReportKind::Grouped.default_file_name().to_string(),
            simple: ReportKind::Simple.default_file_name().to_string(),
            duplicates: ReportKind::Duplicates.default_file_name().to_string(),
        }
    }
}

impl ReportFiles {
    pub fn name_for(&self, kind: ReportKind) -> &str {
        match kind {
            ReportKind::Grouped => &self.grouped,
            ReportKind::Simple => &self.simple,
            ReportKind::Duplicates => &self.duplicates,
        }
    }
}

/// What happened to one report
#[derive(Debug)]
pub enum ReportStatus {
    Written(PathBuf),
    /// Rendering signalled there was nothing to write
    Skipped(ScanError),
}

#[derive(Debug)]
pub struct ReportOutcome {
    pub kind: ReportKind,
    pub status: ReportStatus,
}

/// Write `content` to `dir/file_name`, creating `dir` if needed
pub fn write_report(dir: &Path, file_name: &str, content: &str) -> Result<PathBuf, ScanError> {
    let io_err = |path: &Path, source| ScanError::Io {
        path: path.to_path_buf(),
        source,
    };

    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| io_err(dir, e))?;
    }

    let path = dir.join(file_name);
    fs::write(&path, content).map_err(|e| io_err(&path, e))?;
    debug!(path = %path.display(), bytes = content.len(), "Report written");

    Ok(path)
}

/// Render and write all three reports.
///
/// Stops at the first write failure; "nothing to write" is not a failure.
pub fn write_reports(
    results: &ResultSet,
    dir: &Path,
    files: &ReportFiles,
) -> Result<Vec<ReportOutcome>, ScanError> {
    let mut outcomes = Vec::new();

    for kind in ReportKind::ALL {
        let status = match kind.render(results) {
            Ok(content) => ReportStatus::Written(write_report(dir, files.name_for(kind), &content)?),
            Err(err) if err.is_nothing_to_write() => ReportStatus::Skipped(err),
            Err(err) => return Err(err),
        };
        outcomes.push(ReportOutcome { kind, status });
    }

    Ok(outcomes)
}
