//! Background task scheduler for report generation
//!
//! Generates report snapshots at local midnight:
//!
//! - daily: every day
//! - weekly: every Sunday
//! - monthly: on the 1st of each month
//!
//! Runs are fire-and-forget. A failed run is logged and not retried, and runs
//! missed while the process was down are not caught up.

use chrono::{DateTime, Local};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use tally_core::{next_run_after, ReportPeriod, Store};

/// Configuration for scheduled reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportScheduleConfig {
    /// Periods that get a background task
    pub periods: Vec<ReportPeriod>,
}

impl Default for ReportScheduleConfig {
    fn default() -> Self {
        Self {
            periods: ReportPeriod::ALL.to_vec(),
        }
    }
}

/// Start the report scheduler as background tasks
///
/// Spawns one tokio task per configured period. Each task runs until the
/// runtime shuts down or its handle is aborted.
pub fn start_report_scheduler(store: Store, config: ReportScheduleConfig) -> Vec<JoinHandle<()>> {
    info!(
        "Starting report scheduler: {}",
        config
            .periods
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );

    config
        .periods
        .into_iter()
        .map(|period| tokio::spawn(run_period(store.clone(), period)))
        .collect()
}

async fn run_period(store: Store, period: ReportPeriod) {
    let mut cursor = Local::now();

    loop {
        let Some(next) = next_run_after(period, &cursor) else {
            warn!("No further {} report runs can be scheduled", period);
            return;
        };

        debug!("Next {} report at {}", period, next.to_rfc3339());

        // The wall clock can step back while we sleep; keep sleeping until
        // it has actually reached `next`.
        let now = loop {
            let now = Local::now();
            match remaining(&now, &next) {
                Some(wait) => tokio::time::sleep(wait).await,
                None => break now,
            }
        };

        run_scheduled_report(&store, period, &now);

        // A late wake-up skips whatever was missed
        cursor = next.max(now);
    }
}

/// Time left until `next`, or `None` once it has been reached
fn remaining(now: &DateTime<Local>, next: &DateTime<Local>) -> Option<std::time::Duration> {
    if now >= next {
        return None;
    }
    (*next - *now).to_std().ok()
}

/// Run a single scheduled report
pub(crate) fn run_scheduled_report(store: &Store, period: ReportPeriod, now: &DateTime<Local>) {
    info!("Running scheduled {} report...", period);

    match store.generate_report(period, now) {
        Ok(snapshot) => {
            info!(
                "Scheduled {} report completed: total {:.2}",
                period, snapshot.total_amount
            );
        }
        Err(e) => {
            error!("Scheduled {} report failed: {}", period, e);
        }
    }
}
