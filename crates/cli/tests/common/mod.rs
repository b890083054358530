//! Shared test utilities for icinga-downtime integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic command factory that prevents dotenv loading.
//! - Parse the JSON envelope printed on stdout.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.
//! - Credentials are `icingaadmin` / `secret` unless overridden.

use assert_cmd::Command;
use serde_json::Value;

/// `Authorization` header value for `icingaadmin:secret`.
#[allow(dead_code)]
pub const BASIC_AUTH_HEADER: &str = "Basic aWNpbmdhYWRtaW46c2VjcmV0";

#[allow(dead_code)]
pub const DOWNTIME_NAME: &str = "test-host.local!e19c705a-54c2-49c5-8014-70ff624f9e51";

/// Remove every `ICINGA2_*` variable inherited from the host.
pub fn clear_icinga_env(cmd: &mut Command) {
    for (key, _) in std::env::vars() {
        if key.starts_with("ICINGA2_") {
            cmd.env_remove(&key);
        }
    }
}

/// Returns a hermetic `icinga-downtime` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Inherited `ICINGA2_*` variables are cleared.
/// - Test credentials are provided through the environment.
pub fn downtime_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("icinga-downtime");

    cmd.env("DOTENV_DISABLED", "1");
    clear_icinga_env(&mut cmd);
    cmd.env_remove("RUST_LOG");

    cmd.env("ICINGA2_API_USER", "icingaadmin");
    cmd.env("ICINGA2_API_PASSWORD", "secret");

    cmd
}

/// Returns a hermetic command pointed at the given API URL.
#[allow(dead_code)]
pub fn downtime_cmd_with_url(api_url: &str) -> Command {
    let mut cmd = downtime_cmd();
    cmd.env("ICINGA2_API_URL", api_url);
    cmd
}

/// Parse the single JSON envelope written to stdout.
#[allow(dead_code)]
pub fn envelope(stdout: &[u8]) -> Value {
    let text = String::from_utf8_lossy(stdout);
    let line = text.trim();
    assert_eq!(line.lines().count(), 1, "expected one envelope line, got: {}", line);
    serde_json::from_str(line).expect("stdout is a JSON envelope")
}
