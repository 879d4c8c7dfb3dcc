//! Audit KG CLI - report and export tool for the audit knowledge graph
//!
//! Builds a knowledge graph from a JSON document (or the bundled sample),
//! then prints a category report, exports the canonical document, or
//! validates a document's referential integrity.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod report;
mod sample;

#[derive(Parser)]
#[command(name = "audit-kg")]
#[command(author = "Audit KG Contributors")]
#[command(version)]
#[command(about = "Typed knowledge graph of audit entities, risks and controls", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the category overview, relationships and a JSON preview
    Report {
        /// Graph document to read (defaults to the bundled sample)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Export the graph document as JSON
    Export {
        /// Graph document to read (defaults to the bundled sample)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check that a graph document is internally consistent
    Validate {
        /// Graph document to check
        input: PathBuf,

        /// Reject duplicate node ids instead of keeping the last one
        #[arg(long)]
        strict: bool,
    },

    /// Show node, edge and category counts
    Stats {
        /// Graph document to read (defaults to the bundled sample)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let default_filter = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter)
        .init();

    let result = match cli.command {
        Commands::Report { input } => commands::report(input.as_deref()),
        Commands::Export { input, output } => commands::export(input.as_deref(), output.as_deref()),
        Commands::Validate { input, strict } => commands::validate(&input, strict),
        Commands::Stats { input, json } => commands::stats(input.as_deref(), json),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
