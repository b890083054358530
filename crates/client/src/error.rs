//! Error types for the Icinga 2 client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Icinga 2 client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Credentials were missing when the client was built.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// The HTTP client backend (TLS stack, connector) could not be initialized.
    #[error("HTTP client backend unavailable: {0}")]
    Backend(#[source] reqwest::Error),

    /// HTTP request error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-2xx response from the Icinga 2 API.
    #[error("Request \"{url}\" failed with status {status}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// Invalid response format from Icinga 2.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Request timed out.
    #[error("Request to {0} timed out")]
    Timeout(String),

    /// Connection refused or host unreachable.
    #[error("Connection refused to {0}")]
    ConnectionRefused(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Check if this error indicates an authentication or authorization failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            Self::AuthFailed(_) | Self::ApiError { status: 401 | 403, .. }
        )
    }

    /// Check if this error happened before the server could answer.
    ///
    /// For these the outcome of a mutating request is unknown.
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            Self::HttpError(_) | Self::Timeout(_) | Self::ConnectionRefused(_)
        )
    }

    /// HTTP status code returned by the server, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
