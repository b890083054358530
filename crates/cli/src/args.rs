//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//! - Resolve the invocation parameters from flags or a params file.
//!
//! Non-responsibilities:
//! - Does not validate parameter combinations (see `params`).
//! - Does not build the connection configuration (see `operator::IcingaConnector`).

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use icinga_client::{ObjectType, Timestamp};
use icinga_config::ApiVersion;
use secrecy::SecretString;
use serde_json::{Map, Value};

use crate::params::{DEFAULT_AUTHOR, DEFAULT_COMMENT, DowntimeParams, ParamError, State};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "icinga-downtime")]
#[command(about = "Schedule or remove Icinga 2 downtimes through the REST API", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  icinga-downtime --api-url https://icinga:5665 --api-user root --filters 'host.name==\"web01\"' --start-time 2026-02-01T14:00:00Z --end-time 2026-02-01T15:00:00Z\n  icinga-downtime --state absent --object-type Downtime --name 'web01!e19c705a-54c2-49c5-8014-70ff624f9e51'\n  icinga-downtime --params-file downtime.json\n"
)]
pub struct Cli {
    /// Base URL of the Icinga 2 API (e.g., https://localhost:5665)
    #[arg(long, env = "ICINGA2_API_URL")]
    pub api_url: Option<String>,

    /// API user for basic authentication
    #[arg(long, env = "ICINGA2_API_USER")]
    pub api_user: Option<String>,

    /// API password for basic authentication
    #[arg(long, env = "ICINGA2_API_PASSWORD", hide_env_values = true)]
    pub api_password: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "ICINGA2_API_TIMEOUT")]
    pub api_timeout: Option<u64>,

    /// API version (only "1" is supported)
    #[arg(long)]
    pub api_version: Option<ApiVersion>,

    /// Skip TLS certificate verification (for self-signed certificates)
    #[arg(long)]
    pub skip_verify: bool,

    /// Desired downtime state
    #[arg(long, value_enum, default_value_t = State::Present)]
    pub state: State,

    /// Kind of object to target (Host, Service, Downtime)
    #[arg(long, default_value = "Host")]
    pub object_type: ObjectType,

    /// Exact name of the target object
    #[arg(long)]
    pub name: Option<String>,

    /// Filter expression selecting the target objects
    #[arg(long)]
    pub filters: Option<String>,

    /// Variables referenced by the filter, as a JSON object
    #[arg(long, value_name = "JSON", value_parser = parse_filter_vars)]
    pub filter_vars: Option<Map<String, Value>>,

    /// Start of the downtime window (epoch seconds or RFC 3339)
    #[arg(long, allow_hyphen_values = true)]
    pub start_time: Option<Timestamp>,

    /// End of the downtime window (epoch seconds or RFC 3339)
    #[arg(long, allow_hyphen_values = true)]
    pub end_time: Option<Timestamp>,

    /// Length of the downtime in seconds (required with --fixed)
    #[arg(long)]
    pub duration: Option<u64>,

    /// Fixed downtime covering the whole window instead of a flexible one
    #[arg(long)]
    pub fixed: bool,

    /// Also put all services of the matched hosts into downtime
    #[arg(long)]
    pub all_services: bool,

    /// Name of the downtime that triggers this one
    #[arg(long)]
    pub trigger_name: Option<String>,

    #[arg(long, default_value = DEFAULT_AUTHOR)]
    pub author: String,

    #[arg(long, default_value = DEFAULT_COMMENT)]
    pub comment: String,

    /// Read all parameters from a JSON object file; other parameter flags are ignored
    #[arg(long, value_name = "FILE")]
    pub params_file: Option<PathBuf>,

    /// Log filter directive (e.g. "debug", "icinga_client=trace"); overrides RUST_LOG
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log output format on stderr
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

fn parse_filter_vars(s: &str) -> Result<Map<String, Value>, String> {
    match serde_json::from_str::<Value>(s) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err("expected a JSON object".to_string()),
        Err(e) => Err(format!("invalid JSON: {}", e)),
    }
}

impl Cli {
    /// Resolve the invocation parameters, preferring the params file when given.
    pub fn params(&self) -> Result<DowntimeParams, ParamError> {
        if let Some(path) = &self.params_file {
            return DowntimeParams::from_file(path);
        }

        Ok(DowntimeParams {
            api_url: self.api_url.clone(),
            api_user: self.api_user.clone(),
            api_password: self
                .api_password
                .clone()
                .map(|p| SecretString::new(p.into())),
            api_timeout: self.api_timeout,
            api_version: self.api_version,
            skip_verify: self.skip_verify,
            state: self.state,
            object_type: self.object_type,
            name: self.name.clone(),
            filters: self.filters.clone(),
            filter_vars: self.filter_vars.clone(),
            start_time: self.start_time,
            end_time: self.end_time,
            duration: self.duration,
            fixed: self.fixed,
            all_services: self.all_services,
            trigger_name: self.trigger_name.clone(),
            author: self.author.clone(),
            comment: self.comment.clone(),
        })
    }
}
