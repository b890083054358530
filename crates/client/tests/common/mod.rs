//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - All fixture files must be valid JSON
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

use secrecy::SecretString;

#[allow(unused_imports)]
pub use icinga_client::testing::load_fixture;

#[allow(unused_imports)]
pub use icinga_client::{
    ActionResponse, ClientError, Credentials, Icinga2Client, ObjectType, RemoveDowntimeRequest,
    ScheduleDowntimeRequest, Timestamp, endpoints,
};
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// `Authorization` header value for `icingaadmin:secret`.
#[allow(dead_code)]
pub const BASIC_AUTH_HEADER: &str = "Basic aWNpbmdhYWRtaW46c2VjcmV0";

#[allow(dead_code)]
pub fn test_credentials() -> Credentials {
    Credentials::new("icingaadmin", SecretString::new("secret".to_string().into()))
}

/// Client pointed at a mock server with the test credentials.
#[allow(dead_code)]
pub fn test_client(uri: &str) -> Icinga2Client {
    Icinga2Client::builder()
        .api_url(uri.to_string())
        .credentials("icingaadmin", SecretString::new("secret".to_string().into()))
        .build()
        .expect("client builds")
}
