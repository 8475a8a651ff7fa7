//! docship CLI - builds a documentation site for a deployment target.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "docship")]
#[command(about = "Build a documentation site for a deployment target")]
#[command(version)]
pub struct Cli {
    /// Path to config file (defaults to ./deploy.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // Progress goes to stdout, warnings and failures to stderr
    let writer = std::io::stderr
        .with_max_level(Level::WARN)
        .or_else(std::io::stdout);

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(writer)
        .init();

    match commands::build::run(cli.config.as_deref()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Build failed: {}", e);
            ExitCode::from(1)
        }
    }
}
