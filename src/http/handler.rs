//! The relay endpoint: fetch → decode → rewrite.

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use std::time::Instant;

use crate::error::RelayError;
use crate::http::request::request_id;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::transcode::{decode, rewrite};

/// `GET /`
pub async fn subscription_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let start = Instant::now();
    let request_id = request_id(&headers);

    tracing::info!(request_id, "Subscription requested");

    match relay(&state).await {
        Ok(body) => {
            tracing::info!(
                request_id,
                bytes = body.len(),
                elapsed_ms = start.elapsed().as_millis() as u64,
                "Subscription relayed"
            );
            metrics::record_request("ok", start);
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                body,
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(request_id, kind = e.kind(), error = %e, "Subscription relay failed");
            metrics::record_request(e.kind(), start);
            e.into_response()
        }
    }
}

/// Run the pipeline. A failed fetch returns before anything is decoded.
async fn relay(state: &AppState) -> Result<Vec<u8>, RelayError> {
    let raw = state.fetcher.fetch().await?;
    let decoded = decode(&raw, state.config.padding_mode())?;

    if state.config.verbose_log {
        let document = String::from_utf8_lossy(&decoded);
        tracing::info!(document = %document, "Original subscription");
    }

    let body = rewrite(&decoded);
    metrics::record_lines(if body.is_empty() { 0 } else { body.split(|&b| b == b'\n').count() });
    Ok(body)
}
