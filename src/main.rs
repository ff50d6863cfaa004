//! carcols - collect siren ids from carcols.meta files
//!
//! carcols provides:
//! - Recursive discovery of carcols.meta files across several roots
//! - Extraction of `<id value=...>` entries inside `<Sirens>` blocks
//! - Grouped, simple and duplicate reports in natural id order

use anyhow::Result;
use clap::Parser;

mod backends;
mod cli;
mod core;
mod flows;
mod logging;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    logging::init_logger(
        logging::Verbosity::from_flags(cli.quiet, cli.verbose),
        !cli.no_color,
    );

    cli::run(cli)
}
