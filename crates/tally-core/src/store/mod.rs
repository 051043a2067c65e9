//! In-memory storage for expenses and generated reports
//!
//! This module is organized by domain:
//! - `expenses` - Append-only expense list and on-demand analysis
//! - `reports` - Report generation and per-period report history
//!
//! Nothing is persisted; a `Store` lives as long as the process. Each list
//! sits behind its own lock so handlers on different runtime threads see
//! appends atomically.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::info;

use crate::error::{Error, Result};
use crate::models::{Expense, ReportPeriod, ReportSnapshot};

mod expenses;
mod reports;

#[cfg(test)]
mod tests;

/// Generated reports, one history per period
#[derive(Debug, Default)]
pub(crate) struct ReportHistory {
    daily: Vec<ReportSnapshot>,
    weekly: Vec<ReportSnapshot>,
    monthly: Vec<ReportSnapshot>,
}

impl ReportHistory {
    pub(crate) fn get(&self, period: ReportPeriod) -> &[ReportSnapshot] {
        match period {
            ReportPeriod::Daily => &self.daily,
            ReportPeriod::Weekly => &self.weekly,
            ReportPeriod::Monthly => &self.monthly,
        }
    }

    pub(crate) fn get_mut(&mut self, period: ReportPeriod) -> &mut Vec<ReportSnapshot> {
        match period {
            ReportPeriod::Daily => &mut self.daily,
            ReportPeriod::Weekly => &mut self.weekly,
            ReportPeriod::Monthly => &mut self.monthly,
        }
    }
}

#[derive(Debug, Default)]
struct Inner {
    expenses: RwLock<Vec<Expense>>,
    reports: RwLock<ReportHistory>,
}

/// Shared handle to the expense and report stores
///
/// Cloning is cheap; all clones see the same data.
#[derive(Debug, Clone, Default)]
pub struct Store {
    inner: Arc<Inner>,
}

impl Store {
    /// Create an empty store
    pub fn new() -> Self {
        info!("Initialized in-memory expense store");
        Self::default()
    }

    fn read_expenses(&self) -> Result<RwLockReadGuard<'_, Vec<Expense>>> {
        self.inner
            .expenses
            .read()
            .map_err(|_| Error::Storage("expense store lock poisoned".to_string()))
    }

    fn write_expenses(&self) -> Result<RwLockWriteGuard<'_, Vec<Expense>>> {
        self.inner
            .expenses
            .write()
            .map_err(|_| Error::Storage("expense store lock poisoned".to_string()))
    }

    fn read_reports(&self) -> Result<RwLockReadGuard<'_, ReportHistory>> {
        self.inner
            .reports
            .read()
            .map_err(|_| Error::Storage("report store lock poisoned".to_string()))
    }

    fn write_reports(&self) -> Result<RwLockWriteGuard<'_, ReportHistory>> {
        self.inner
            .reports
            .write()
            .map_err(|_| Error::Storage("report store lock poisoned".to_string()))
    }
}
