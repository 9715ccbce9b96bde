//! Health check endpoints.

use axum::{extract::State, http::StatusCode, Json};
use telemetry::{health, metrics, HealthStatus};

use crate::response::HealthResponse;
use crate::state::AppState;

/// GET /health - Full health check against the datastore.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let connected = ad_store::health::check_connection(&state.store).await;
    health().database.record(connected);

    let status = if connected {
        HealthStatus::Healthy
    } else {
        HealthStatus::Unhealthy
    };

    Json(HealthResponse {
        status,
        database_connected: connected,
        database_message: health().database.message(),
        requests: metrics().snapshot(),
    })
}

/// GET /health/ready - Readiness probe (datastore reachable).
pub async fn ready_handler(State(state): State<AppState>) -> StatusCode {
    let connected = ad_store::health::check_connection(&state.store).await;
    health().database.record(connected);

    if connected {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// GET /health/live - Liveness probe (service is running).
pub async fn live_handler() -> StatusCode {
    if health().is_alive() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}
