//! Tally CLI - In-memory expense tracker
//!
//! Usage:
//!   tally serve --port 3000   Start web server
//!   tally schedule            Show upcoming report runs

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Serve {
            port,
            host,
            no_scheduler,
        } => commands::cmd_serve(&host, port, no_scheduler).await,
        Commands::Schedule { count } => commands::cmd_schedule(count),
    }
}
