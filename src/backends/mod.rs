//! Backends module - File system discovery and content extraction
//!
//! Provides:
//! - scan: carcols.meta discovery with walkdir
//! - extract: siren id extraction from file content

pub mod extract;
pub mod scan;
