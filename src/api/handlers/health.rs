//! Handler for health check endpoint.

use axum::{Json, extract::State};
use chrono::Utc;

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Always; the registry lives in process memory
/// - **500 Internal Server Error**: Only if counting links fails
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "started_at": "2026-10-18T12:00:00Z",
///   "uptime_seconds": 42,
///   "checks": {
///     "registry": { "status": "ok", "message": "2 links" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, AppError> {
    let count = state.link_service.count_links().await?;

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        started_at: state.started_at,
        uptime_seconds: (Utc::now() - state.started_at).num_seconds(),
        checks: HealthChecks {
            registry: CheckStatus {
                status: "ok".to_string(),
                message: Some(format!("{count} links")),
            },
        },
    }))
}
