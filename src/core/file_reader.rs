//! File reading
//!
//! Files are opened, read to the end and closed before the next one is
//! touched. Content must be valid UTF-8; anything else is a read failure.

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::core::error::ScanError;

/// Read a whole text file as strict UTF-8
pub fn read_text_file(path: &Path) -> Result<String, ScanError> {
    let bytes = read_file_bytes(path).map_err(|e| unreadable(path, e.to_string()))?;

    String::from_utf8(bytes).map_err(|e| unreadable(path, format!("invalid UTF-8: {}", e)))
}

fn read_file_bytes(path: &Path) -> std::io::Result<Vec<u8>> {
    // Handle is dropped on both the success and the error path
    let file = fs::File::open(path)?;
    let mut reader = std::io::BufReader::new(file);
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;
    Ok(buffer)
}

fn unreadable(path: &Path, reason: String) -> ScanError {
    ScanError::UnreadableFile {
        path: path.to_path_buf(),
        reason,
    }
}
