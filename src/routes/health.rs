//! Health check endpoint for container orchestration.
//!
//! Unlike a plain liveness probe, this pings the database: the service is
//! only useful when it can reach storage, so a dead connection reports
//! unhealthy even though the process itself is still responding.

use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};
use tracing::instrument;

use crate::state::AppState;

/// Health check handler.
///
/// Pings the database and reports "healthy" or "unhealthy" accordingly.
#[instrument(name = "health::health", skip(state))]
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    match state.storage.ping().await {
        Ok(()) => (StatusCode::OK, Json(json!({ "status": "healthy" }))),
        Err(err) => {
            tracing::error!(error = %err, "Health check failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "status": "unhealthy" })),
            )
        }
    }
}
