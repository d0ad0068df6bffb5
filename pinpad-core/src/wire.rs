//! JSON bodies exchanged on `POST /api/validate-pin`.

use serde::{Deserialize, Serialize};

use crate::pin::PinCandidate;

/// Path of the validation endpoint.
pub const VALIDATE_PIN_PATH: &str = "/api/validate-pin";

/// Body of a `200` response.
pub const MSG_VALIDATED: &str = "PIN validated successfully";
/// Body of a `401` response.
pub const MSG_INVALID_PIN: &str = "Invalid PIN";
/// Body of a `400` response. Deliberately says nothing about which check failed.
pub const MSG_INVALID_REQUEST: &str = "Invalid request";

/// Request body: `{ "pin": "1234" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatePinRequest {
    pub pin: PinCandidate,
}

/// Every response from the endpoint carries a single `message` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
