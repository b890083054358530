//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Build and validate the final `ConnectionConfig`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//!
//! Invariants / Assumptions:
//! - Builder setters applied after `from_env()` take precedence over environment variables.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use secrecy::SecretString;
use std::time::Duration;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{DEFAULT_TIMEOUT_SECS, ENV_DOTENV_DISABLED, MAX_TIMEOUT_SECS};
use crate::types::{ApiVersion, ConnectionConfig};

/// Configuration loader that builds connection settings from env vars and overrides.
#[derive(Default)]
pub struct ConfigLoader {
    api_url: Option<String>,
    api_user: Option<String>,
    api_password: Option<SecretString>,
    timeout: Option<Duration>,
    api_version: Option<ApiVersion>,
    skip_verify: Option<bool>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    ///
    /// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "Loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read configuration from environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the API base URL.
    pub fn with_api_url(mut self, url: String) -> Self {
        self.api_url = Some(url);
        self
    }

    /// Set the API username.
    pub fn with_api_user(mut self, user: String) -> Self {
        self.api_user = Some(user);
        self
    }

    /// Set the API password.
    pub fn with_api_password(mut self, password: String) -> Self {
        self.api_password = Some(SecretString::new(password.into()));
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the API version.
    pub fn with_api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Set whether to skip TLS verification.
    pub fn with_skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = Some(skip);
        self
    }

    /// Build the final connection configuration.
    pub fn build(self) -> Result<ConnectionConfig, ConfigError> {
        let api_url = self
            .api_url
            .as_deref()
            .map(validate_and_normalize_api_url)
            .transpose()?
            .ok_or(ConfigError::MissingApiUrl)?;

        let api_user = self
            .api_user
            .filter(|u| !u.trim().is_empty())
            .ok_or(ConfigError::MissingCredentials { field: "api_user" })?;
        let api_password = self.api_password.ok_or(ConfigError::MissingCredentials {
            field: "api_password",
        })?;

        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        Self::validate_timeout(timeout)?;

        Ok(ConnectionConfig {
            api_url,
            api_user,
            api_password,
            timeout,
            api_version: self.api_version.unwrap_or_default(),
            skip_verify: self.skip_verify.unwrap_or(false),
        })
    }

    /// Checks the timeout is greater than 0 and not above MAX_TIMEOUT_SECS.
    fn validate_timeout(timeout: Duration) -> Result<(), ConfigError> {
        let timeout_secs = timeout.as_secs();

        if timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout {
                message: "timeout must be greater than 0 seconds".to_string(),
            });
        }

        if timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout {
                message: format!(
                    "timeout exceeds maximum allowed value of {} seconds",
                    MAX_TIMEOUT_SECS
                ),
            });
        }

        Ok(())
    }

    pub(crate) fn set_api_url(&mut self, url: Option<String>) {
        self.api_url = url;
    }

    pub(crate) fn set_api_user(&mut self, user: Option<String>) {
        self.api_user = user;
    }

    pub(crate) fn set_api_password(&mut self, password: Option<SecretString>) {
        self.api_password = password;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    pub(crate) fn set_api_version(&mut self, version: Option<ApiVersion>) {
        self.api_version = version;
    }

    pub(crate) fn set_skip_verify(&mut self, skip: Option<bool>) {
        self.skip_verify = skip;
    }
}

/// Validate that the URL is an absolute http(s) URL with a host and strip trailing slashes.
fn validate_and_normalize_api_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ConfigError::MissingApiUrl);
    }

    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidValue {
        var: "api_url".into(),
        message: format!(
            "must be an absolute http(s) URL with a host (e.g. https://localhost:5665): {e}"
        ),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidValue {
            var: "api_url".into(),
            message: format!(
                "scheme must be http or https (e.g. https://localhost:5665), got: {scheme}"
            ),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            var: "api_url".into(),
            message: "host is required (e.g. https://localhost:5665)".into(),
        });
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
