//! The downtime operator: validate, connect, dispatch once, map the result.
//!
//! Responsibilities:
//! - Run the invocation steps in order: parameter validation, capability check
//!   (building the HTTP client), exactly one API call, result mapping.
//! - Log per-target records that report a failure.
//!
//! Does NOT handle:
//! - Rendering the result envelope (see `envelope`).
//! - Retrying. Any failure ends the invocation.
//!
//! Invariants:
//! - No network activity happens unless validation and the capability check passed.
//! - A 2xx response is a change, whatever the per-target codes say; records are
//!   forwarded unchanged.

use std::time::Duration;

use icinga_client::{ActionResult, ClientError, DowntimeApi, Icinga2Client};
use icinga_config::{ConfigError, ConfigLoader};
use secrecy::ExposeSecret;
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::params::{DowntimeAction, DowntimeParams, ParamError, non_blank};

/// Component checked before the first request.
pub const HTTP_BACKEND: &str = "reqwest HTTP client (rustls TLS backend)";

/// Errors that end an invocation.
#[derive(Debug, Error)]
pub enum OperatorError {
    #[error(transparent)]
    Params(#[from] ParamError),

    #[error("Invalid connection settings: {0}")]
    Config(#[from] ConfigError),

    #[error("Missing required dependency: {name}")]
    Dependency {
        name: &'static str,
        #[source]
        source: ClientError,
    },

    #[error(transparent)]
    Api(#[from] ClientError),
}

/// Successful outcome of one invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub changed: bool,
    pub results: Vec<Value>,
}

/// Produces the API handle for an invocation.
///
/// Connecting performs the capability check; it must not touch the network.
pub trait Connector {
    type Api: DowntimeApi;

    fn connect(&self, params: &DowntimeParams) -> Result<Self::Api, OperatorError>;
}

/// Connects to Icinga 2 using the environment and the invocation's connection parameters.
#[derive(Debug, Default, Clone, Copy)]
pub struct IcingaConnector;

impl Connector for IcingaConnector {
    type Api = Icinga2Client;

    fn connect(&self, params: &DowntimeParams) -> Result<Icinga2Client, OperatorError> {
        let mut loader = ConfigLoader::new().from_env()?;

        if let Some(url) = non_blank(&params.api_url) {
            loader = loader.with_api_url(url.to_string());
        }
        if let Some(user) = non_blank(&params.api_user) {
            loader = loader.with_api_user(user.to_string());
        }
        if let Some(password) = &params.api_password {
            loader = loader.with_api_password(password.expose_secret().to_string());
        }
        // 0 means "use the default"
        if let Some(secs) = params.api_timeout.filter(|secs| *secs > 0) {
            loader = loader.with_timeout(Duration::from_secs(secs));
        }
        if let Some(version) = params.api_version {
            loader = loader.with_api_version(version);
        }
        if params.skip_verify {
            loader = loader.with_skip_verify(true);
        }

        let config = loader.build()?;

        Icinga2Client::builder()
            .from_config(&config)
            .build()
            .map_err(|e| match e {
                ClientError::Backend(_) => OperatorError::Dependency {
                    name: HTTP_BACKEND,
                    source: e,
                },
                other => OperatorError::Api(other),
            })
    }
}

/// Runs one downtime invocation against the API produced by its connector.
pub struct DowntimeOperator<C> {
    connector: C,
}

impl<C: Connector> DowntimeOperator<C> {
    pub fn new(connector: C) -> Self {
        Self { connector }
    }

    /// Execute the invocation described by `params`.
    ///
    /// # Errors
    ///
    /// - `OperatorError::Params` when a parameter rule is violated (no connection attempted).
    /// - `OperatorError::Config` / `OperatorError::Dependency` when connecting fails
    ///   (no request sent).
    /// - `OperatorError::Api` when the single request fails.
    pub async fn execute(&self, params: &DowntimeParams) -> Result<Outcome, OperatorError> {
        let action = params.validate()?;
        let api = self.connector.connect(params)?;

        let response = match action {
            DowntimeAction::Schedule(request) => {
                info!(
                    object_type = %request.object_type(),
                    filter = request.filters(),
                    start_time = %request.start_time(),
                    end_time = %request.end_time(),
                    "Scheduling downtime"
                );
                api.schedule_downtime(&request).await?
            }
            DowntimeAction::Remove(request) => {
                info!(
                    object_type = %request.object_type(),
                    name = request.target_name(),
                    "Removing downtime"
                );
                api.remove_downtime(&request).await?
            }
        };

        report_failed_records(&response.results);

        Ok(Outcome {
            changed: true,
            results: response.results,
        })
    }
}

fn report_failed_records(results: &[Value]) {
    if results.is_empty() {
        warn!("Icinga 2 returned no result records; no object matched");
        return;
    }
    for record in results {
        match ActionResult::from_value(record) {
            Some(result) if result.is_success() => {}
            Some(result) => warn!(
                code = result.code,
                status = %result.status,
                "Icinga 2 reported a failed target"
            ),
            None => warn!(%record, "Result record without a code"),
        }
    }
}
