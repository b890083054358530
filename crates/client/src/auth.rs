//! Basic-auth credentials for the Icinga 2 API.

use reqwest::RequestBuilder;
use secrecy::{ExposeSecret, SecretString};

/// Username and password of an Icinga 2 `ApiUser`.
///
/// The password is only exposed when the `Authorization` header is written.
#[derive(Debug, Clone)]
pub struct Credentials {
    username: String,
    password: SecretString,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: SecretString) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Attach the basic-auth header to a request.
    pub(crate) fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.basic_auth(&self.username, Some(self.password.expose_secret()))
    }
}
