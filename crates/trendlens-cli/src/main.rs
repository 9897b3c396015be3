// crates/trendlens-cli/src/main.rs

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
use commands::analyze::handle_analyze;

/// A CLI for the trending-video analysis pipeline
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Cleans a trending-video CSV and prints the aggregate summaries.
    Analyze {
        /// CSV file to analyze; the built-in sample dataset is used when omitted.
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Write the full analysis as JSON to this path.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze { file, output } => handle_analyze(file, output),
    }
}
