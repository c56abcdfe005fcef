mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "refscale", about = "Reference-circle sizing and circle detection")]
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
    /// Detect the circular object in the middle of a photo
    Detect(commands::detect::DetectArgs),
    /// Convert a physical diameter to on-screen pixels
    Size(commands::size::SizeArgs),
    /// List the reference coins and their diameters
    Coins(commands::coins::CoinsArgs),
    /// Print or save the default configuration
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
        Commands::Detect(args) => commands::detect::run(args),
        Commands::Size(args) => commands::size::run(args),
        Commands::Coins(args) => commands::coins::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
