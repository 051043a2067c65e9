//! Tally Core Library
//!
//! Shared functionality for the Tally expense tracker:
//! - Domain models and client input parsing
//! - Category aggregation
//! - In-memory expense store and report history
//! - Daily/weekly/monthly report schedule arithmetic

pub mod aggregate;
pub mod error;
pub mod models;
pub mod schedule;
pub mod store;

pub use aggregate::aggregate;
pub use error::{Error, Result};
pub use models::{
    AmountInput, Expense, ExpenseAnalysis, NewExpense, ReportPeriod, ReportSnapshot,
};
pub use schedule::{next_run_after, upcoming_runs};
pub use store::Store;
