//! Error types for the gateway crate.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pinpad_core::{
    wire::{MSG_INVALID_PIN, MSG_INVALID_REQUEST},
    MessageResponse, StorageError,
};

/// Errors that can occur while handling a validation request.
///
/// The response body never carries the inner detail: clients only ever see
/// one of the fixed messages.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// The body did not parse as `{ "pin": "<4 digits>" }`.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The PIN was well formed but matched nothing in storage.
    #[error("invalid PIN")]
    InvalidPin,

    /// The storage collaborator failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl GatewayError {
    /// Status code returned to the client.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::InvalidPin => StatusCode::UNAUTHORIZED,
            GatewayError::InvalidRequest(_) | GatewayError::Storage(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn public_message(&self) -> &'static str {
        match self {
            GatewayError::InvalidPin => MSG_INVALID_PIN,
            GatewayError::InvalidRequest(_) | GatewayError::Storage(_) => MSG_INVALID_REQUEST,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        (self.status(), Json(MessageResponse::new(self.public_message()))).into_response()
    }
}
