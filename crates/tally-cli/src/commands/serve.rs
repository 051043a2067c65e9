//! Server command implementation

use anyhow::{Context, Result};

use tally_core::Store;
use tally_server::{ReportScheduleConfig, ServerConfig};

/// Build the server configuration from CLI flags
pub fn server_config(no_scheduler: bool) -> ServerConfig {
    ServerConfig {
        schedule: (!no_scheduler).then(ReportScheduleConfig::default),
    }
}

pub async fn cmd_serve(host: &str, port: u16, no_scheduler: bool) -> Result<()> {
    println!("🚀 Starting Tally web server...");
    println!("   Listening: http://{}:{}", host, port);
    println!("   Storage: in-memory (data is lost on restart)");
    if no_scheduler {
        println!("   ⚠️  Scheduled reports DISABLED (--no-scheduler)");
    } else {
        println!("   📅 Reports: daily at 00:00, weekly on Sunday, monthly on the 1st");
    }
    println!();
    println!("   Press Ctrl+C to stop");

    tally_server::serve_with_config(Store::new(), host, port, server_config(no_scheduler))
        .await
        .with_context(|| format!("Server on {}:{} failed", host, port))?;

    Ok(())
}
