//! Expense handlers

use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};
use tracing::{info, warn};

use crate::{ApiResponse, AppError, AppState};
use tally_core::models::{Expense, ExpenseAnalysis, NewExpense};

pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields: category, amount, or date";

/// POST /expenses - Record an expense
pub async fn create_expense(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewExpense>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Expense>>), AppError> {
    let Json(new_expense) = payload.map_err(|rejection| {
        warn!("Rejected expense body: {}", rejection.body_text());
        AppError::bad_request(&rejection.body_text())
    })?;

    if !new_expense.is_complete() {
        warn!("Rejected expense with missing fields");
        return Err(AppError::bad_request(MISSING_FIELDS_MESSAGE));
    }

    let expense = state
        .store
        .append_expense(&new_expense)
        .map_err(AppError::from_core)?;

    info!(
        "Recorded expense {}: {} {:.2}",
        expense.id, expense.category, expense.amount
    );

    Ok((StatusCode::CREATED, Json(ApiResponse::success(expense))))
}

/// GET /expenses - List all expenses in insertion order
pub async fn list_expenses(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<Expense>>>, AppError> {
    let expenses = state.store.list_expenses().map_err(AppError::from_core)?;
    Ok(Json(ApiResponse::success(expenses)))
}

/// GET /expenses/analysis - Totals by category over all expenses
pub async fn analyze_expenses(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<ExpenseAnalysis>>, AppError> {
    let analysis = state.store.analyze_expenses().map_err(AppError::from_core)?;
    Ok(Json(ApiResponse::success(analysis)))
}
