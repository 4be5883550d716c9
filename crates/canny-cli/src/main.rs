mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "canny", about = "Array-based Canny edge and boundary extraction")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect edges in grayscale images
    Edges(commands::edges::EdgesArgs),
    /// Extract object outlines from segmentation masks
    Boundaries(commands::boundaries::BoundariesArgs),
    /// Print the default configuration as TOML
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Edges(args) => commands::edges::run(args),
        Commands::Boundaries(args) => commands::boundaries::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
