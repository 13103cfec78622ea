mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bargrade", about = "Barcode print quality grading tool")]
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
    /// Measure the focus of an image
    Sharpness(commands::sharpness::SharpnessArgs),
    /// Grade the barcode in a still image
    Grade(commands::grade::GradeArgs),
    /// Stream raw I420 frames until one is captured
    Scan(commands::scan::ScanArgs),
    /// Print or save the default grading config
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
        Commands::Sharpness(args) => commands::sharpness::run(args),
        Commands::Grade(args) => commands::grade::run(args),
        Commands::Scan(args) => commands::scan::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
