//! Single-shot request sending and response classification.
//!
//! Responsibilities:
//! - Send a prepared request exactly once.
//! - Turn non-2xx responses into `ClientError::ApiError` with the server's message.
//! - Classify transport failures (timeout, connection refused).
//!
//! Does NOT handle:
//! - Retries of any kind. A failed mutating request is reported, never repeated.

use reqwest::{RequestBuilder, Response};
use serde::Deserialize;
use tracing::debug;

use crate::error::{ClientError, Result};

/// Error body returned by Icinga 2, e.g. `{"error": 404, "status": "No objects found."}`.
#[derive(Debug, Deserialize)]
struct IcingaErrorBody {
    #[serde(default)]
    status: Option<String>,
}

/// Send an HTTP request once and return the response if its status is 2xx.
///
/// # Errors
///
/// - `ClientError::ApiError` for any non-2xx status, carrying the URL and the
///   `status` text of the Icinga error body (or the raw body if it is not JSON).
/// - `ClientError::Timeout` / `ClientError::ConnectionRefused` for transport failures.
/// - `ClientError::HttpError` for any other `reqwest` failure.
pub async fn send_request(builder: RequestBuilder, url: &str) -> Result<Response> {
    let response = builder
        .send()
        .await
        .map_err(|e| classify_transport_error(e, url))?;

    let status = response.status();
    debug!(status = status.as_u16(), url, "Received response");

    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    let message = match serde_json::from_str::<IcingaErrorBody>(&body) {
        Ok(IcingaErrorBody {
            status: Some(message),
        }) => message,
        _ => body,
    };

    Err(ClientError::ApiError {
        status: status.as_u16(),
        url,
        message,
    })
}

fn classify_transport_error(err: reqwest::Error, url: &str) -> ClientError {
    if err.is_timeout() {
        ClientError::Timeout(url.to_string())
    } else if err.is_connect() {
        ClientError::ConnectionRefused(url.to_string())
    } else {
        ClientError::HttpError(err)
    }
}
