//! Report schedule arithmetic
//!
//! Reports run at local midnight: daily every day, weekly on Sundays,
//! monthly on the 1st. These functions only compute instants; the server's
//! scheduler does the waiting.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Weekday};

use crate::models::ReportPeriod;

/// Whether `period` has a run on `date`
pub fn runs_on(period: ReportPeriod, date: NaiveDate) -> bool {
    match period {
        ReportPeriod::Daily => true,
        ReportPeriod::Weekly => date.weekday() == Weekday::Sun,
        ReportPeriod::Monthly => date.day() == 1,
    }
}

/// First scheduled run of `period` strictly after `after`, in `after`'s zone
///
/// Returns `None` only when the calendar runs out.
pub fn next_run_after<Tz: TimeZone>(
    period: ReportPeriod,
    after: &DateTime<Tz>,
) -> Option<DateTime<Tz>> {
    let tz = after.timezone();
    let mut date = after.date_naive();

    loop {
        if runs_on(period, date) {
            if let Some(run) = start_of_day(&tz, date) {
                if run > *after {
                    return Some(run);
                }
            }
        }
        date = date.succ_opt()?;
    }
}

/// The next `count` runs of `period` after `after`
pub fn upcoming_runs<Tz: TimeZone>(
    period: ReportPeriod,
    after: &DateTime<Tz>,
    count: usize,
) -> Vec<DateTime<Tz>> {
    let mut runs = Vec::with_capacity(count);
    let mut cursor = after.clone();

    while runs.len() < count {
        match next_run_after(period, &cursor) {
            Some(run) => {
                cursor = run.clone();
                runs.push(run);
            }
            None => break,
        }
    }

    runs
}

/// Local midnight of `date`, or the first minute of the day that exists
/// when a DST transition skips midnight
fn start_of_day<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> Option<DateTime<Tz>> {
    (0..24 * 60).find_map(|minute| {
        let naive = date.and_hms_opt(minute / 60, minute % 60, 0)?;
        tz.from_local_datetime(&naive).earliest()
    })
}
