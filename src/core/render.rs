//! Renderer module
//!
//! Renders the id listing of a run to stdout formats: text, jsonl, json

use serde::Serialize;

use crate::core::error::Diagnostic;
use crate::core::model::{ExtractionResult, ResultSet};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Jsonl,
    Json,
}

impl OutputFormat {
    /// Whether stdout must stay machine-readable
    pub fn is_structured(&self) -> bool {
        !matches!(self, OutputFormat::Text)
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// One line of structured output
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum Record<'a> {
    Id(&'a ExtractionResult),
    Error(&'a Diagnostic),
}

/// Renderer for a run's results and diagnostics
pub struct Renderer {
    format: OutputFormat,
}

impl Renderer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Render the listing to a string
    pub fn render(&self, results: &ResultSet, diagnostics: &[Diagnostic]) -> String {
        match self.format {
            OutputFormat::Text => self.render_text(results),
            OutputFormat::Jsonl => self.render_jsonl(results, diagnostics),
            OutputFormat::Json => self.render_json(results, diagnostics),
        }
    }

    fn records<'a>(
        results: &'a ResultSet,
        diagnostics: &'a [Diagnostic],
    ) -> impl Iterator<Item = Record<'a>> {
        diagnostics
            .iter()
            .map(Record::Error)
            .chain(results.iter().map(Record::Id))
    }

    /// One `Directory | Folder | ID` line per result plus a total
    fn render_text(&self, results: &ResultSet) -> String {
        let mut output = String::new();
        for item in results {
            output.push_str(&format!(
                "Directory: {} | Folder: {} | ID: {}\n",
                item.root, item.folder, item.id_value
            ));
        }
        output.push_str(&format!("\nTotal ID values extracted: {}", results.len()));
        output
    }

    /// Render as JSON Lines (one JSON object per line)
    fn render_jsonl(&self, results: &ResultSet, diagnostics: &[Diagnostic]) -> String {
        Self::records(results, diagnostics)
            .filter_map(|record| serde_json::to_string(&record).ok())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Render as a single JSON array
    fn render_json(&self, results: &ResultSet, diagnostics: &[Diagnostic]) -> String {
        let records: Vec<_> = Self::records(results, diagnostics).collect();
        serde_json::to_string_pretty(&records).unwrap_or_else(|_| "[]".to_string())
    }
}
