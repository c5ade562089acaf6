//! JSON response writing.
//!
//! Two explicit writers: [`encode`] produces plain JSON bytes with no HTTP
//! framing, [`respond`] wraps them in an HTTP response with a status code
//! and content type. Callers pick the one they need.

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

const CONTENT_TYPE_JSON: &str = "application/json";

/// Envelope for status and error message bodies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Encode a value as JSON bytes.
pub fn encode<T: Serialize>(value: &T) -> serde_json::Result<Vec<u8>> {
    serde_json::to_vec(value)
}

/// Write an HTTP JSON response with the given status code.
///
/// Encoding failures are logged and degrade to an empty 500; they are never
/// surfaced in a payload of their own.
pub fn respond<T: Serialize>(status: StatusCode, value: &T) -> Response {
    match encode(value) {
        Ok(body) => (status, [(header::CONTENT_TYPE, CONTENT_TYPE_JSON)], body).into_response(),
        Err(err) => {
            tracing::error!("failed to encode http response body: {err}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Write a 500 response carrying the error's message text.
pub fn respond_err(err: &anyhow::Error) -> Response {
    respond(
        StatusCode::INTERNAL_SERVER_ERROR,
        &Message::new(format!("{err:#}")),
    )
}
