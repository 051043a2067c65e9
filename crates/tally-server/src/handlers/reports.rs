//! Report handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Local;
use tracing::info;

use crate::{ApiResponse, AppError, AppState};
use tally_core::models::{ReportPeriod, ReportSnapshot};

pub const INVALID_REPORT_TYPE_MESSAGE: &str =
    "Invalid report type. Use 'daily', 'weekly', or 'monthly'.";

/// Parse the `:type` path segment
fn parse_report_type(report_type: &str) -> Result<ReportPeriod, AppError> {
    report_type
        .parse()
        .map_err(|_| AppError::bad_request(INVALID_REPORT_TYPE_MESSAGE))
}

/// GET /reports/:type - Generated reports for a period, oldest first
pub async fn list_reports(
    State(state): State<Arc<AppState>>,
    Path(report_type): Path<String>,
) -> Result<Json<ApiResponse<Vec<ReportSnapshot>>>, AppError> {
    let period = parse_report_type(&report_type)?;
    let reports = state
        .store
        .list_reports(period)
        .map_err(AppError::from_core)?;

    Ok(Json(ApiResponse::success(reports)))
}

/// POST /reports/:type/generate - Generate a report now
///
/// Runs the same generation as the scheduler, for external schedulers and
/// manual checks.
pub async fn generate_report(
    State(state): State<Arc<AppState>>,
    Path(report_type): Path<String>,
) -> Result<(StatusCode, Json<ApiResponse<ReportSnapshot>>), AppError> {
    let period = parse_report_type(&report_type)?;
    let snapshot = state
        .store
        .generate_report(period, &Local::now())
        .map_err(AppError::from_core)?;

    info!("Generated {} report on request", period);

    Ok((StatusCode::CREATED, Json(ApiResponse::success(snapshot))))
}
