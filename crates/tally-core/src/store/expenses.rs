//! Expense operations

use tracing::debug;

use super::Store;
use crate::aggregate::aggregate;
use crate::error::{Error, Result};
use crate::models::{parse_amount, parse_expense_date, Expense, ExpenseAnalysis, NewExpense};

impl Store {
    /// Validate and append an expense, assigning the next id
    ///
    /// Fails with `Error::Validation` without touching the store when the
    /// category is blank, the amount is not a finite number, or the date
    /// cannot be parsed.
    pub fn append_expense(&self, new: &NewExpense) -> Result<Expense> {
        let category = new
            .category
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| Error::validation("Category is required"))?;
        let amount = new
            .amount
            .as_ref()
            .ok_or_else(|| Error::validation("Amount is required"))
            .and_then(parse_amount)?;
        let date = new
            .date
            .as_deref()
            .ok_or_else(|| Error::validation("Date is required"))
            .and_then(parse_expense_date)?;

        let mut expenses = self.write_expenses()?;
        let expense = Expense {
            id: expenses.len() as u64 + 1,
            category: category.to_string(),
            amount,
            date,
        };
        expenses.push(expense.clone());

        debug!(id = expense.id, category = %expense.category, "Recorded expense");
        Ok(expense)
    }

    /// All expenses in insertion order
    pub fn list_expenses(&self) -> Result<Vec<Expense>> {
        Ok(self.read_expenses()?.clone())
    }

    pub fn expense_count(&self) -> Result<usize> {
        Ok(self.read_expenses()?.len())
    }

    /// Totals over every expense ever recorded
    pub fn analyze_expenses(&self) -> Result<ExpenseAnalysis> {
        let expenses = self.read_expenses()?;
        Ok(aggregate(expenses.iter()))
    }
}
