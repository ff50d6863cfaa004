//! CLI module - Command-line interface definitions and handler

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use tracing::info;

use crate::core::model::ResultSet;
use crate::core::render::{OutputFormat, Renderer};
use crate::flows::output::{write_reports, ReportFiles, ReportOutcome, ReportStatus};
use crate::flows::pipeline::scan_roots;
use crate::flows::report::{duplicate_totals, ReportKind};

/// carcols - collect siren ids from carcols.meta files and report duplicates.
#[derive(Parser, Debug)]
#[command(name = "carcols")]
#[command(
    author,
    version,
    about,
    long_about = r#"carcols walks one or more directory trees, reads every carcols.meta file,
and collects the <id value=...> entries found inside <Sirens>...</Sirens> blocks.

Three reports are written to the output directory:
- carcols_ids.txt: ids grouped by folder
- carcols_ids_simple.txt: "id | folder", one per line, in natural order
- duplicate_ids.txt: ids used more than once and where they occur

Missing directories and unreadable files are reported and skipped.

Examples:
    carcols
    carcols "[emergency]" "[Vehicles]" --out-dir reports
    carcols mods --format jsonl --no-write
"#
)]
pub struct Cli {
    /// Directories to search, in order.
    #[arg(
        value_name = "ROOT",
        default_values = ["[emergency]", "[Vehicles]"],
        long_help = "Directories to search recursively for carcols.meta files.\n\n\
Roots are processed in the order given. A root that does not exist is skipped\n\
with a warning. Defaults to \"[emergency]\" and \"[Vehicles]\"."
    )]
    pub roots: Vec<PathBuf>,

    /// Directory the reports are written to.
    #[arg(
        long,
        env = "CARCOLS_OUT_DIR",
        default_value = ".",
        value_name = "DIR",
        long_help = "Directory the report files are written to. Created if missing."
    )]
    pub out_dir: PathBuf,

    /// File name of the grouped report.
    #[arg(long, default_value = "carcols_ids.txt", value_name = "FILE")]
    pub grouped_file: String,

    /// File name of the simple report.
    #[arg(long, default_value = "carcols_ids_simple.txt", value_name = "FILE")]
    pub simple_file: String,

    /// File name of the duplicates report.
    #[arg(long, default_value = "duplicate_ids.txt", value_name = "FILE")]
    pub duplicates_file: String,

    /// Listing format on stdout (text/jsonl/json).
    #[arg(
        long,
        default_value = "text",
        value_parser = ["text", "jsonl", "json"],
        value_name = "FORMAT",
        long_help = "Select how extracted ids are printed to stdout.\n\n\
Supported values:\n\
- text (default): one \"Directory | Folder | ID\" line per id\n\
- jsonl: one JSON object per id or diagnostic\n\
- json: a single JSON array"
    )]
    pub format: String,

    /// Do not write report files.
    #[arg(long)]
    pub no_write: bool,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,

    /// Quiet mode (warnings and errors only).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug diagnostics).
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn report_files(&self) -> ReportFiles {
        ReportFiles {
            grouped: self.grouped_file.clone(),
            simple: self.simple_file.clone(),
            duplicates: self.duplicates_file.clone(),
        }
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let format: OutputFormat = cli.format.parse().unwrap_or_default();
    if cli.no_color {
        colored::control::set_override(false);
    }

    let outcome = scan_roots(&cli.roots);

    // Nothing to list when discovery came back empty
    if format.is_structured() || outcome.files_found > 0 {
        let renderer = Renderer::new(format);
        println!("{}", renderer.render(&outcome.results, &outcome.diagnostics));
    }

    if cli.no_write {
        return Ok(());
    }

    let reports = write_reports(&outcome.results, &cli.out_dir, &cli.report_files())
        .with_context(|| format!("Failed to write reports to {}", cli.out_dir.display()))?;

    for report in &reports {
        let message = status_message(report, &outcome.results);
        if format.is_structured() {
            info!("{}", message);
        } else {
            match report.status {
                ReportStatus::Written(_) => println!("{}", message.green()),
                ReportStatus::Skipped(_) => println!("{}", message.yellow()),
            }
        }
    }

    Ok(())
}

/// Human-readable line describing what happened to a report
fn status_message(report: &ReportOutcome, results: &ResultSet) -> String {
    let path = match &report.status {
        ReportStatus::Written(path) => path.display().to_string(),
        ReportStatus::Skipped(err) => return err.to_string(),
    };

    match report.kind {
        ReportKind::Grouped => format!("Results saved to {}", path),
        ReportKind::Simple => format!("Simple format saved to {}", path),
        ReportKind::Duplicates => {
            let (distinct, instances) = duplicate_totals(results);
            format!(
                "Duplicate report saved to {}\nFound {} duplicate IDs with {} total instances",
                path, distinct, instances
            )
        }
    }
}
