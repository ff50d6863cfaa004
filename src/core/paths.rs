//! Path normalization utilities
//!
//! Relative paths in results always use '/' as separator.

use std::path::Path;

/// File name every scanned file must have (compared case-insensitively)
pub const TARGET_FILE_NAME: &str = "carcols.meta";

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Make a path relative to the root directory
pub fn make_relative(path: &Path, root: &Path) -> Option<String> {
    path.strip_prefix(root).ok().map(normalize_path)
}

/// Name of the directory that directly contains `path`
pub fn parent_folder_name(path: &Path) -> String {
    let parent = match path.parent() {
        Some(p) => p,
        None => return String::new(),
    };

    match parent.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        // "." or "/" have no final component
        None => normalize_path(parent),
    }
}

/// Check if the file name (not the rest of the path) is `carcols.meta`
pub fn is_target_file(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().to_lowercase() == TARGET_FILE_NAME)
        .unwrap_or(false)
}
