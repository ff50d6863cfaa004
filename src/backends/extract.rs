//! Siren id extraction
//!
//! Pulls `<id value=...>` attributes out of `<Sirens>...</Sirens>` blocks:
//!
//! ```text
//! <Sirens>
//!   <Item>
//!     <id value="123"/>
//!   </Item>
//! </Sirens>
//! ```
//!
//! Block markers are case-sensitive. Each block ends at the nearest
//! `</Sirens>`, so a nested `<Sirens>` is not recognised as its own block.

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;
use tracing::warn;

use crate::core::error::ScanError;
use crate::core::file_reader::read_text_file;

/// `<Sirens>` ... `</Sirens>`, shortest span, across newlines
pub static SIRENS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<Sirens>(.*?)</Sirens>").expect("Invalid SIRENS_RE regex"));

/// `<id value="ABC123">`
pub static QUOTED_ID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<id\s+value="([^"]+)""#).expect("Invalid QUOTED_ID_RE regex")
});

/// `<id value=ABC123>`
pub static UNQUOTED_ID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<id\s+value=([^>\s]+)"#).expect("Invalid UNQUOTED_ID_RE regex")
});

/// Extract id values from file content.
///
/// Blocks are visited in file order. Inside a block all quoted values come
/// first, then all unquoted ones.
pub fn extract_ids(content: &str) -> Vec<String> {
    let mut ids = Vec::new();

    for block in SIRENS_RE.captures_iter(content) {
        let section = match block.get(1) {
            Some(m) => m.as_str(),
            None => continue,
        };

        ids.extend(
            QUOTED_ID_RE
                .captures_iter(section)
                .filter_map(|caps| caps.get(1))
                .map(|m| m.as_str().to_string()),
        );

        // An unquoted match starting with '"' is a quoted value seen again
        ids.extend(
            UNQUOTED_ID_RE
                .captures_iter(section)
                .filter_map(|caps| caps.get(1))
                .map(|m| m.as_str())
                .filter(|value| !value.starts_with('"'))
                .map(str::to_string),
        );
    }

    ids
}

/// Read a file and extract its ids
pub fn extract_file(path: &Path) -> Result<Vec<String>, ScanError> {
    let content = read_text_file(path)?;
    Ok(extract_ids(&content))
}

/// Read a file and extract its ids, logging a read failure instead of
/// returning it. The error is handed back alongside the (empty) ids so the
/// caller can record it.
pub fn extract_file_lenient(path: &Path) -> (Vec<String>, Option<ScanError>) {
    match extract_file(path) {
        Ok(ids) => (ids, None),
        Err(err) => {
            warn!("{}", err);
            (Vec::new(), Some(err))
        }
    }
}
