//! FTS CLI - site-engine tools.
//!
//! Provides commands for:
//! - `extract`: Convert the legacy static pages into the content model
//! - `build`: Render every route of an exported data set to static HTML

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, ExtractArgs};
use output::Output;

/// FTS - block-content site engine.
#[derive(Parser)]
#[command(name = "fts", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the legacy static pages into the content model.
    Extract(ExtractArgs),
    /// Render an exported data set to static HTML.
    Build(BuildArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let verbose = matches!(&cli.command, Commands::Extract(args) if args.verbose);
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Extract(args) => args.execute(&output),
        Commands::Build(args) => args.execute(&output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
