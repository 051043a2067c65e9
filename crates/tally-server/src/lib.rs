//! Tally Web Server
//!
//! Axum-based REST API for the Tally expense tracker.
//!
//! Every response body is a JSON envelope:
//! - `{"status": "success", "data": ...}`
//! - `{"status": "error", "message": "..."}`
//!
//! State is held in memory for the life of the process. A background
//! scheduler appends daily, weekly and monthly report snapshots.

use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use tally_core::Store;

mod handlers;
mod scheduler;

pub use scheduler::{start_report_scheduler, ReportScheduleConfig};

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Background report schedule (`None` disables scheduled reports)
    pub schedule: Option<ReportScheduleConfig>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            schedule: Some(ReportScheduleConfig::default()),
        }
    }
}

/// Shared application state
pub struct AppState {
    pub store: Store,
}

/// Successful response envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: &'static str,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: "success",
            data,
        }
    }
}

/// Create the application router
pub fn create_router(store: Store) -> Router {
    let state = Arc::new(AppState { store });

    Router::new()
        // Expenses
        .route(
            "/expenses",
            get(handlers::list_expenses).post(handlers::create_expense),
        )
        .route("/expenses/analysis", get(handlers::analyze_expenses))
        // Reports
        .route("/reports/:type", get(handlers::list_reports))
        .route("/reports/:type/generate", post(handlers::generate_report))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Start the server with custom configuration
pub async fn serve_with_config(
    store: Store,
    host: &str,
    port: u16,
    config: ServerConfig,
) -> anyhow::Result<()> {
    match config.schedule {
        Some(schedule) => {
            start_report_scheduler(store.clone(), schedule);
        }
        None => info!("Scheduled reports disabled"),
    }

    let app = create_router(store);
    let addr = format!("{}:{}", host, port);

    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type with proper HTTP status codes
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: String,
    internal: Option<anyhow::Error>,
}

impl AppError {
    pub fn bad_request(msg: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.to_string(),
            internal: None,
        }
    }

    /// Map a core error: caller mistakes become 400, anything else 500
    pub fn from_core(err: tally_core::Error) -> Self {
        match err {
            tally_core::Error::Validation(msg) => Self::bad_request(&msg),
            other => Self::from(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the full internal error if present
        if let Some(err) = &self.internal {
            error!(error = %err, "Internal error");
        }

        let body = Json(serde_json::json!({
            "status": "error",
            "message": self.message
        }));

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        let err = err.into();
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            // Return generic message to client
            message: "An internal error occurred".to_string(),
            // Keep full error for logging
            internal: Some(err),
        }
    }
}
