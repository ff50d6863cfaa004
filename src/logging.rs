//! Logging setup
//!
//! Diagnostics and progress go to stderr through tracing so stdout only
//! carries the listing.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Log verbosity picked on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

impl Verbosity {
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        match (quiet, verbose) {
            (_, true) => Verbosity::Verbose,
            (true, false) => Verbosity::Quiet,
            (false, false) => Verbosity::Normal,
        }
    }

    /// Filter directive; `RUST_LOG` only applies at normal verbosity
    fn filter(&self) -> EnvFilter {
        match self {
            Verbosity::Quiet => EnvFilter::new("warn"),
            Verbosity::Verbose => EnvFilter::new("debug"),
            Verbosity::Normal => {
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
            }
        }
    }
}

pub fn init_logger(verbosity: Verbosity, ansi: bool) {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .with_ansi(ansi);

    // A subscriber may already be installed (e.g. by a test harness)
    let _ = tracing_subscriber::registry()
        .with(stderr_layer)
        .with(verbosity.filter())
        .try_init();
}
