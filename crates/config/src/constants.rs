//! Centralized constants for the Icinga downtime workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Environment Variables
// =============================================================================

pub const ENV_API_URL: &str = "ICINGA2_API_URL";
pub const ENV_API_USER: &str = "ICINGA2_API_USER";
pub const ENV_API_PASSWORD: &str = "ICINGA2_API_PASSWORD";
pub const ENV_API_TIMEOUT: &str = "ICINGA2_API_TIMEOUT";
pub const ENV_API_VERSION: &str = "ICINGA2_API_VERSION";
pub const ENV_SKIP_VERIFY: &str = "ICINGA2_SKIP_VERIFY";

/// Set to `1` or `true` to skip `.env` loading.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";
