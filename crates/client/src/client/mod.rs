//! Main Icinga 2 REST API client.
//!
//! This module provides the primary [`Icinga2Client`] for the downtime
//! actions of the Icinga 2 API.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `actions`: Schedule/remove downtime methods
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Reading connection settings from the environment (handled by `icinga-config`)
//!
//! # Invariants
//! - Every API method performs exactly one HTTP request. There is no retry,
//!   because downtime actions are not idempotent.

pub mod builder;

mod actions;

use std::time::Duration;

use icinga_config::ApiVersion;

use crate::auth::Credentials;

/// Icinga 2 REST API client.
///
/// # Creating a Client
///
/// Use [`Icinga2Client::builder()`] to create a new client:
///
/// ```rust,ignore
/// use icinga_client::Icinga2Client;
/// use secrecy::SecretString;
///
/// let client = Icinga2Client::builder()
///     .api_url("https://icinga.example.com:5665".to_string())
///     .credentials("icingaadmin", SecretString::new("secret".to_string().into()))
///     .build()?;
/// ```
#[derive(Debug)]
pub struct Icinga2Client {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) api_version: ApiVersion,
    pub(crate) credentials: Credentials,
    pub(crate) timeout: Duration,
}

impl Icinga2Client {
    /// Create a new client builder.
    pub fn builder() -> builder::Icinga2ClientBuilder {
        builder::Icinga2ClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_version(&self) -> ApiVersion {
        self.api_version
    }

    pub fn username(&self) -> &str {
        self.credentials.username()
    }

    /// Per-request timeout configured on the HTTP client.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
