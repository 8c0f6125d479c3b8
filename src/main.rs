//! browscap-cache - command-line front end for the browscap cache proxy
//!
//! Provides:
//! - Version detection for a cache directory
//! - Item get/set/has with optional version qualification
//! - Unified output format (jsonl/json/md/raw)

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

/// Initialize tracing with environment-based filtering.
///
/// - `quiet`: suppress all logging output
/// - `verbose`: enable debug-level logging
fn init_tracing(quiet: bool, verbose: bool) {
    let filter = if quiet {
        EnvFilter::new("off")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose);
    cli::run(cli)
}
