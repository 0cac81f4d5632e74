//! Error types for the registration proxy.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use webinarjam_client::WebinarJamError;

/// Proxy error types.
///
/// Each variant is scoped to a single request; none is retried.
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("{0}")]
    Validation(String),

    #[error("An error occurred while communicating with the WebinarJam API: {0}")]
    Transport(String),

    #[error("Failed to register contact. WebinarJam API responded with: {body}")]
    RemoteHttp { status: u16, body: String },

    #[error("WebinarJam API returned an invalid response: {0}")]
    MalformedResponse(String),

    #[error("Failed to register contact. WebinarJam API responded with: {0}")]
    Rejected(String),
}

impl ProxyError {
    /// HTTP status reported to the caller.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ProxyError::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
            // Upstream status is passed through as-is
            ProxyError::RemoteHttp { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ProxyError::MalformedResponse(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ProxyError::Rejected(_) => StatusCode::BAD_REQUEST,
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            detail: self.to_string(),
        };

        (self.status_code(), Json(body)).into_response()
    }
}

impl From<WebinarJamError> for ProxyError {
    fn from(e: WebinarJamError) -> Self {
        match e {
            WebinarJamError::Http(e) => ProxyError::Transport(e.to_string()),
            WebinarJamError::Api { status, body } => ProxyError::RemoteHttp { status, body },
            WebinarJamError::MalformedResponse(body) => ProxyError::MalformedResponse(body),
            WebinarJamError::Rejected(message) => ProxyError::Rejected(message),
        }
    }
}
