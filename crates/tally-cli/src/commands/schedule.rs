//! Schedule command implementation

use anyhow::{bail, Result};
use chrono::{DateTime, Local, TimeZone};

use tally_core::{upcoming_runs, ReportPeriod};

/// Upcoming runs for every report period after `after`
pub fn schedule_table<Tz: TimeZone>(
    after: &DateTime<Tz>,
    count: usize,
) -> Vec<(ReportPeriod, Vec<DateTime<Tz>>)> {
    ReportPeriod::ALL
        .into_iter()
        .map(|period| (period, upcoming_runs(period, after, count)))
        .collect()
}

pub fn cmd_schedule(count: usize) -> Result<()> {
    if count == 0 {
        bail!("--count must be at least 1");
    }

    let now = Local::now();

    println!();
    println!("📅 Report Schedule");
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Now: {}", now.format("%a %Y-%m-%d %H:%M"));

    for (period, runs) in schedule_table(&now, count) {
        println!();
        println!("   {}:", period);
        for run in runs {
            println!("      {}", run.format("%a %Y-%m-%d %H:%M"));
        }
    }
    println!();

    Ok(())
}
