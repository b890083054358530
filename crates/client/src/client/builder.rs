//! Client builder for constructing [`Icinga2Client`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (api_url, credentials)
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeouts, TLS verification)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`Icinga2Client`] methods)
//! - Reading settings from the environment (handled by `icinga_config::ConfigLoader`)
//!
//! # Invariants
//! - `api_url` and credentials must be provided before calling `build()`
//! - The base URL is always normalized to have no trailing slashes
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a warning
//! - Building the client never touches the network

use std::time::Duration;

use icinga_config::{
    ApiVersion, ConnectionConfig,
    constants::{DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS},
};
use secrecy::SecretString;

use crate::auth::Credentials;
use crate::client::Icinga2Client;
use crate::error::{ClientError, Result};

/// Builder for creating a new [`Icinga2Client`].
///
/// All options have defaults except the API URL and the credentials.
pub struct Icinga2ClientBuilder {
    api_url: Option<String>,
    credentials: Option<Credentials>,
    api_version: ApiVersion,
    skip_verify: bool,
    timeout: Duration,
}

impl Default for Icinga2ClientBuilder {
    fn default() -> Self {
        Self {
            api_url: None,
            credentials: None,
            api_version: ApiVersion::default(),
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Icinga2ClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the Icinga 2 API, e.g. `https://icinga.example.com:5665`.
    ///
    /// Trailing slashes will be automatically removed.
    pub fn api_url(mut self, url: String) -> Self {
        self.api_url = Some(url);
        self
    }

    /// Set the basic-auth credentials of the `ApiUser`.
    pub fn credentials(mut self, username: impl Into<String>, password: SecretString) -> Self {
        self.credentials = Some(Credentials::new(username, password));
        self
    }

    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = version;
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this in development or testing environments. Disabling TLS
    /// verification makes the connection vulnerable to man-in-the-middle attacks.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the request timeout.
    ///
    /// Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create a client builder from a validated connection configuration.
    pub fn from_config(mut self, config: &ConnectionConfig) -> Self {
        self.api_url = Some(config.api_url.clone());
        self.credentials = Some(Credentials::new(
            config.api_user.clone(),
            config.api_password.clone(),
        ));
        self.api_version = config.api_version;
        self.skip_verify = config.skip_verify;
        self.timeout = config.timeout;
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    ///
    /// - `"https://localhost:5665/"` -> `"https://localhost:5665"`
    /// - `"https://example.com:5665//"` -> `"https://example.com:5665"`
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`Icinga2Client`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `api_url` was not provided.
    /// Returns [`ClientError::AuthFailed`] if credentials were not provided.
    /// Returns [`ClientError::Backend`] if the HTTP client fails to build.
    pub fn build(self) -> Result<Icinga2Client> {
        let base_url = self
            .api_url
            .ok_or_else(|| ClientError::InvalidUrl("api_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);

        let credentials = self
            .credentials
            .ok_or_else(|| ClientError::AuthFailed("credentials are required".to_string()))?;

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if self.skip_verify {
            if base_url.starts_with("https://") {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build().map_err(ClientError::Backend)?;

        Ok(Icinga2Client {
            http,
            base_url,
            api_version: self.api_version,
            credentials,
            timeout: self.timeout,
        })
    }
}
