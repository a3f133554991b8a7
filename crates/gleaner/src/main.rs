//! Gleaner CLI - package-index curation
//!
//! This is the main entry point for the gleaner command-line interface.

mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};
use gleaner_core::DataDir;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize rustls crypto provider (required for rustls 0.23+)
    // This must be done before any TLS operations
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    // Parse CLI args
    let cli = Cli::parse();

    // Initialize tracing
    init_tracing(cli.verbose, cli.quiet);

    let layout = DataDir::new(cli.data_dir.as_std_path());

    // Run command
    match cli.command {
        Commands::Catalog(args) => commands::catalog::run(args, layout).await,
        Commands::Resolve(args) => commands::resolve::run(args, layout).await,
        Commands::Metadata(args) => commands::metadata::run(args, layout).await,
        Commands::Fetch(args) => commands::fetch::run(args, layout).await,
        Commands::Repack(args) => commands::repack::run(args),
        Commands::Extract(args) => commands::extract::run(args, layout),
        Commands::Sample(args) => commands::sample::run(args, layout).await,
        Commands::Doctor(args) => commands::doctor::run(args, layout).await,
        Commands::Completions(args) => commands::completions::run(args),
    }
}

/// Initialize tracing with appropriate verbosity
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}
