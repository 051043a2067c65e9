//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use clap::{Parser, Subcommand};

/// Tally - Track expenses and generate periodic spending reports
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "In-memory expense tracker with scheduled reports", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Do not generate daily/weekly/monthly reports in the background
        ///
        /// Reports can still be generated with POST /reports/:type/generate.
        #[arg(long)]
        no_scheduler: bool,
    },

    /// Show when the next scheduled reports will run (local time)
    Schedule {
        /// Number of upcoming runs to show per report type
        #[arg(short, long, default_value = "3")]
        count: usize,
    },
}
