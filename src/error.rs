//! Per-request error type for the relay endpoint.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::transcode::DecodeError;
use crate::upstream::FetchError;

/// Any failure of the fetch → decode pipeline. Always terminal for the
/// request; never retried.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl RelayError {
    /// Outcome label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            RelayError::Fetch(e) => e.kind(),
            RelayError::Decode(_) => "decode_error",
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.to_string(),
        )
            .into_response()
    }
}
