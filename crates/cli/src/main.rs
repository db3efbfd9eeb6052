//! Comet CLI - compute utilization and supply rate from raw storage.

mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};
use commands::{run_compute, run_fetch};

/// Log to stderr so stdout stays machine-readable. RUST_LOG overrides `level`.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match cli.command {
        Commands::Compute(args) => {
            run_compute(&args, cli.format)?;
        }
        Commands::Fetch(args) => {
            run_fetch(&args, cli.format).await?;
        }
    }

    Ok(())
}
