//! Error types for the client crate.

/// Ways a validation attempt can fail.
///
/// The form treats every variant the same way (clear the PIN, show a
/// generic error); the distinction exists for logging and tests.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ClientError {
    /// The server answered `401`: the PIN is wrong.
    #[error("PIN rejected")]
    Rejected,

    /// The server answered `400`: the body was not accepted.
    #[error("request rejected as malformed")]
    BadRequest,

    /// The server answered with a status the form does not expect.
    #[error("unexpected HTTP status {0}")]
    UnexpectedStatus(u16),

    /// Connecting, sending, or reading the response failed.
    #[error("transport error: {0}")]
    Transport(String),
}
