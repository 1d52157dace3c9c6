use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::pages::APP_NAME;
use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Application name.
    pub app: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the database is reachable.
    pub db_healthy: bool,
}

/// GET /health -- returns service and database health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = restro3d_db::health_check(&state.pool).await.is_ok();

    let status = if db_healthy { "healthy" } else { "degraded" };

    Json(HealthResponse {
        status,
        app: APP_NAME,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
