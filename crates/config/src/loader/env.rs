//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse the `ICINGA2_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric or boolean values return ConfigError::InvalidValue.
//! - A timeout of `0` is treated as unset, so the default applies.

use secrecy::SecretString;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{
    ENV_API_PASSWORD, ENV_API_TIMEOUT, ENV_API_URL, ENV_API_USER, ENV_API_VERSION,
    ENV_SKIP_VERIFY,
};
use crate::types::ApiVersion;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none(ENV_API_URL) {
        loader.set_api_url(Some(url));
    }
    if let Some(user) = env_var_or_none(ENV_API_USER) {
        loader.set_api_user(Some(user));
    }
    if let Some(password) = env_var_or_none(ENV_API_PASSWORD) {
        loader.set_api_password(Some(SecretString::new(password.into())));
    }
    if let Some(timeout) = env_var_or_none(ENV_API_TIMEOUT) {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_API_TIMEOUT.to_string(),
            message: "must be a number of seconds".to_string(),
        })?;
        if secs > 0 {
            loader.set_timeout(Some(Duration::from_secs(secs)));
        }
    }
    if let Some(version) = env_var_or_none(ENV_API_VERSION) {
        let version: ApiVersion =
            version
                .parse()
                .map_err(|message: String| ConfigError::InvalidValue {
                    var: ENV_API_VERSION.to_string(),
                    message,
                })?;
        loader.set_api_version(Some(version));
    }
    if let Some(skip) = env_var_or_none(ENV_SKIP_VERIFY) {
        loader.set_skip_verify(Some(skip.parse().map_err(|_| {
            ConfigError::InvalidValue {
                var: ENV_SKIP_VERIFY.to_string(),
                message: "must be true or false".to_string(),
            }
        })?));
    }
    Ok(())
}
