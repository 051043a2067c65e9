//! Expense aggregation
//!
//! Groups expenses by category and sums amounts. Shared by the on-demand
//! analysis endpoint and the periodic report generator.

use crate::models::{Expense, ExpenseAnalysis};

/// Sum amounts overall and per category
///
/// Only categories that occur in `expenses` get a key; an empty slice yields
/// a zero total and an empty mapping.
pub fn aggregate<'a, I>(expenses: I) -> ExpenseAnalysis
where
    I: IntoIterator<Item = &'a Expense>,
{
    expenses
        .into_iter()
        .fold(ExpenseAnalysis::default(), |mut acc, expense| {
            *acc.total_by_category
                .entry(expense.category.clone())
                .or_insert(0.0) += expense.amount;
            acc.total_amount += expense.amount;
            acc
        })
}
