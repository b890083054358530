//! Connection configuration types.
//!
//! Responsibilities:
//! - Define connection settings (URL, credentials, timeout, API version).
//! - Parse and render the API version.
//!
//! Does NOT handle:
//! - Configuration loading from env (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - `ConnectionConfig` is never serialized; the password stays inside `SecretString`.
//! - `api_url` never carries a trailing slash once built by `ConfigLoader`.

use secrecy::SecretString;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Icinga 2 REST API version.
///
/// Only `v1` exists today; the enum keeps the URL segment in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum ApiVersion {
    #[default]
    #[serde(rename = "1")]
    V1,
}

impl ApiVersion {
    /// Path segment used in request URLs (e.g. `v1`).
    pub fn path_segment(self) -> &'static str {
        match self {
            ApiVersion::V1 => "v1",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiVersion::V1 => f.write_str("1"),
        }
    }
}

impl FromStr for ApiVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" | "v1" => Ok(ApiVersion::V1),
            other => Err(format!("unsupported API version '{other}' (supported: 1)")),
        }
    }
}

/// Connection configuration for an Icinga 2 API endpoint.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Base URL of the Icinga 2 API (e.g., https://localhost:5665)
    pub api_url: String,
    /// Basic-auth username of the API user
    pub api_user: String,
    /// Basic-auth password of the API user
    pub api_password: SecretString,
    /// Request timeout
    pub timeout: Duration,
    /// REST API version
    pub api_version: ApiVersion,
    /// Whether to skip TLS verification (for self-signed certificates)
    pub skip_verify: bool,
}
