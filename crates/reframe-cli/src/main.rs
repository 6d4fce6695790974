mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "reframe", about = "Pan, zoom and crop images to fixed output sizes")]
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
    /// Frame an image and export it as JPEG
    Export(commands::export::ExportArgs),
    /// Render the framed preview with its crop guide to PNG
    Preview(commands::preview::PreviewArgs),
    /// Show image dimensions and the fit-on-load scale
    Info(commands::info::InfoArgs),
    /// Print or save the default widget config
    Config(commands::config::ConfigArgs),
}

/// `RUST_LOG` wins when set; otherwise `--verbose` picks debug over warn.
fn log_filter(verbose: bool) -> EnvFilter {
    let fallback = if verbose { "debug" } else { "warn" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Export(ref args) => commands::export::run(args),
        Commands::Preview(ref args) => commands::preview::run(args),
        Commands::Info(ref args) => commands::info::run(args),
        Commands::Config(ref args) => commands::config::run(args),
    }
}
