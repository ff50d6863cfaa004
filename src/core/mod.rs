//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Result model (FileRecord, ExtractionResult, ResultSet)
//! - Error taxonomy and diagnostics
//! - Path normalization utilities
//! - Strict UTF-8 file reading
//! - Natural ordering of id values
//! - Rendering of the id listing

pub mod error;
pub mod file_reader;
pub mod model;
pub mod natural;
pub mod paths;
pub mod render;
