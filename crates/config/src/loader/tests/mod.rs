//! Tests for the configuration loader.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.

use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Every variable `from_env()` reads, cleared so host settings cannot leak in.
pub const CLEARED_ENV: [(&str, Option<&str>); 6] = [
    ("ICINGA2_API_URL", None),
    ("ICINGA2_API_USER", None),
    ("ICINGA2_API_PASSWORD", None),
    ("ICINGA2_API_TIMEOUT", None),
    ("ICINGA2_API_VERSION", None),
    ("ICINGA2_SKIP_VERIFY", None),
];
