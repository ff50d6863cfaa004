//! Flows module - The scan pipeline and what is built from its results
//!
//! Provides:
//! - pipeline: roots -> files -> ids -> ResultSet
//! - aggregate: result collection and folder/duplicate views
//! - report: grouped, simple and duplicates report formatters
//! - output: writing reports to disk

pub mod aggregate;
pub mod output;
pub mod pipeline;
pub mod report;
