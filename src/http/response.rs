//! Response handling and transformation.
//!
//! # Responsibilities
//! - Carry an action's outcome (status, content type, body) back to the
//!   server layer
//! - Convert to an Axum response, with the request ID echoed by the caller
//!
//! # Design Decisions
//! - Actions produce whole bodies, not streams; registry actions are small
//! - JSON helpers cover the common case; arbitrary bytes remain possible

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

/// The response produced by an action handler.
#[derive(Debug, Clone)]
pub struct ActionResponse {
    status: StatusCode,
    content_type: &'static str,
    body: Vec<u8>,
}

impl ActionResponse {
    /// A response with an explicit status, content type, and body.
    pub fn new(status: StatusCode, content_type: &'static str, body: Vec<u8>) -> Self {
        Self {
            status,
            content_type,
            body,
        }
    }

    /// A plain-text response.
    pub fn text(status: StatusCode, body: impl Into<String>) -> Self {
        Self::new(status, "text/plain; charset=utf-8", body.into().into_bytes())
    }

    /// A JSON response serialized from `value`.
    pub fn json(status: StatusCode, value: &serde_json::Value) -> Self {
        match serde_json::to_vec(value) {
            Ok(body) => Self::new(status, "application/json", body),
            // Only reachable for values JSON cannot represent (e.g. NaN).
            Err(error) => Self::text(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("response serialization failed: {error}"),
            ),
        }
    }

    /// Response status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Response body bytes.
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

impl IntoResponse for ActionResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(
                header::CONTENT_TYPE,
                HeaderValue::from_static(self.content_type),
            )],
            self.body,
        )
            .into_response()
    }
}
