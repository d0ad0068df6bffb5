//! Sends a PIN candidate to the validation endpoint.
//!
//! The form only needs a yes/no answer, so the transport is a single
//! HTTP/1.1 exchange over a fresh TCP connection using hyper's connection
//! API directly.

use std::net::SocketAddr;

use async_trait::async_trait;
use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::{header, Method, Request, StatusCode};
use hyper_util::rt::TokioIo;
use pinpad_core::{wire::VALIDATE_PIN_PATH, PinCandidate, ValidatePinRequest};
use tokio::net::TcpStream;

use crate::ClientError;

/// Something that can tell the form whether a PIN is accepted.
///
/// # Cancel Safety
/// Implementations must not leave shared state behind if the future is
/// dropped; the form simply never sees an answer.
#[async_trait]
pub trait PinValidator: Send + Sync {
    /// Return `Ok(())` if `pin` is accepted.
    ///
    /// # Errors
    /// Any [`ClientError`] means "not accepted"; the variant says why.
    async fn validate(&self, pin: &PinCandidate) -> Result<(), ClientError>;
}

/// [`PinValidator`] that posts to `POST /api/validate-pin` on a gateway.
#[derive(Debug, Clone)]
pub struct HttpValidator {
    addr: SocketAddr,
}

impl HttpValidator {
    /// Target the gateway listening on `addr`.
    #[must_use]
    pub fn new(addr: SocketAddr) -> Self {
        Self { addr }
    }

    async fn post_json(&self, path: &str, body: Vec<u8>) -> Result<StatusCode, ClientError> {
        let stream = TcpStream::connect(self.addr)
            .await
            .map_err(|e| ClientError::Transport(format!("connect to {}: {e}", self.addr)))?;

        let io = TokioIo::new(stream);

        let (mut sender, conn) = hyper::client::conn::http1::handshake(io)
            .await
            .map_err(|e| ClientError::Transport(format!("HTTP handshake: {e}")))?;

        // Drive the connection in the background.
        tokio::spawn(async move {
            if let Err(e) = conn.await {
                tracing::debug!("gateway connection closed: {e}");
            }
        });

        let req = Request::builder()
            .method(Method::POST)
            .uri(path)
            .header(header::HOST, self.addr.to_string())
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::CONTENT_LENGTH, body.len().to_string())
            .body(Full::new(Bytes::from(body)))
            .map_err(|e| ClientError::Transport(format!("build request: {e}")))?;

        let resp = sender
            .send_request(req)
            .await
            .map_err(|e| ClientError::Transport(format!("send request: {e}")))?;

        let status = resp.status();
        // Drain the body so the connection closes cleanly; its message is
        // fixed per status and carries nothing the form uses.
        resp.into_body()
            .collect()
            .await
            .map_err(|e| ClientError::Transport(format!("read response body: {e}")))?;

        Ok(status)
    }
}

#[async_trait]
impl PinValidator for HttpValidator {
    async fn validate(&self, pin: &PinCandidate) -> Result<(), ClientError> {
        let body = serde_json::to_vec(&ValidatePinRequest { pin: pin.clone() })
            .map_err(|e| ClientError::Transport(format!("encode request: {e}")))?;

        match self.post_json(VALIDATE_PIN_PATH, body).await? {
            StatusCode::OK => Ok(()),
            StatusCode::UNAUTHORIZED => Err(ClientError::Rejected),
            StatusCode::BAD_REQUEST => Err(ClientError::BadRequest),
            other => Err(ClientError::UnexpectedStatus(other.as_u16())),
        }
    }
}
