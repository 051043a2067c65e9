//! Report generation and history

use chrono::{DateTime, TimeZone, Utc};
use tracing::info;

use super::Store;
use crate::aggregate::aggregate;
use crate::error::Result;
use crate::models::{ReportPeriod, ReportSnapshot};

impl Store {
    /// Generate a report for `period` as of `now` and append it to the history
    ///
    /// Covers expenses dated within `[period.window_start(now), now]`, both
    /// ends inclusive. An empty window still produces a snapshot with zero
    /// totals.
    pub fn generate_report<Tz: TimeZone>(
        &self,
        period: ReportPeriod,
        now: &DateTime<Tz>,
    ) -> Result<ReportSnapshot> {
        let end = now.with_timezone(&Utc);
        let start = period.window_start(now).with_timezone(&Utc);

        let analysis = {
            let expenses = self.read_expenses()?;
            aggregate(
                expenses
                    .iter()
                    .filter(|e| e.date >= start && e.date <= end),
            )
        };

        let snapshot = ReportSnapshot {
            period,
            generated_at: end,
            total_amount: analysis.total_amount,
            total_by_category: analysis.total_by_category,
        };

        self.write_reports()?.get_mut(period).push(snapshot.clone());

        info!(
            "Generated {} report: window {} to {}, total {:.2} across {} categories",
            period,
            start.to_rfc3339(),
            end.to_rfc3339(),
            snapshot.total_amount,
            snapshot.total_by_category.len()
        );

        Ok(snapshot)
    }

    /// Reports generated so far for `period`, oldest first
    pub fn list_reports(&self, period: ReportPeriod) -> Result<Vec<ReportSnapshot>> {
        Ok(self.read_reports()?.get(period).to_vec())
    }
}
