//! Axum route handlers for the pinpad gateway.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use pinpad_core::{
    wire::{MSG_VALIDATED, VALIDATE_PIN_PATH},
    MessageResponse, Storage, ValidatePinRequest,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::error::GatewayError;

// ── Shared state ─────────────────────────────────────────────────────────────

type SharedStorage = Arc<dyn Storage>;

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router around the given storage collaborator.
pub fn create_router(storage: SharedStorage) -> Router {
    Router::new()
        .route(VALIDATE_PIN_PATH, post(validate_pin))
        .route("/health", get(health))
        .with_state(storage)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /health`: liveness probe.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}

/// `POST /api/validate-pin`: check a PIN candidate against storage.
///
/// Read-only: nothing is written on any path. A key repeated in the body
/// takes its last value.
///
/// # Errors
/// Returns [`GatewayError::InvalidRequest`] if the body is not
/// `{ "pin": "<4 digits>" }`, [`GatewayError::InvalidPin`] if storage does
/// not recognise the PIN, and [`GatewayError::Storage`] if the lookup fails.
pub async fn validate_pin(
    State(storage): State<SharedStorage>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<impl IntoResponse, GatewayError> {
    let Json(value) = body.map_err(|rejection| {
        tracing::debug!(reason = %rejection.body_text(), "rejected validate-pin body");
        GatewayError::InvalidRequest(rejection.body_text())
    })?;
    // Decoding via `Value` collapses duplicate keys to the last occurrence.
    let request: ValidatePinRequest = serde_json::from_value(value).map_err(|e| {
        tracing::debug!(reason = %e, "rejected validate-pin body");
        GatewayError::InvalidRequest(e.to_string())
    })?;

    let valid = storage.validate_pin(&request.pin).await.map_err(|e| {
        tracing::error!(error = %e, "pin lookup failed");
        GatewayError::from(e)
    })?;

    if !valid {
        tracing::info!("pin rejected");
        return Err(GatewayError::InvalidPin);
    }

    tracing::info!("pin validated");
    Ok((StatusCode::OK, Json(MessageResponse::new(MSG_VALIDATED))))
}
