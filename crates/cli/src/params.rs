//! Invocation parameters and their validation.
//!
//! Responsibilities:
//! - Hold the flat parameter set of one invocation (from flags or a params file).
//! - Enforce the parameter combination rules before any I/O.
//! - Turn a valid parameter set into the typed request for exactly one action.
//!
//! Does NOT handle:
//! - Connection settings validation (see `icinga_config::ConfigLoader::build`).
//! - Sending requests (see `operator`).
//!
//! Invariants:
//! - Blank strings count as missing for `name`, `filters` and the rule checks.
//! - Rules are checked in a fixed order and the first violated rule is reported.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use icinga_client::serde_helpers::opt_u64_from_string_or_number;
use icinga_client::{ObjectType, RemoveDowntimeRequest, ScheduleDowntimeRequest, Timestamp};
use icinga_config::ApiVersion;
use secrecy::SecretString;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use thiserror::Error;

pub const DEFAULT_AUTHOR: &str = "icinga-downtime";
pub const DEFAULT_COMMENT: &str = "Downtime scheduled by icinga-downtime";

/// Desired state of the downtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum State {
    #[default]
    Present,
    Absent,
}

impl State {
    fn as_str(self) -> &'static str {
        match self {
            State::Present => "present",
            State::Absent => "absent",
        }
    }
}

/// Errors raised while reading or validating invocation parameters.
#[derive(Debug, Error)]
pub enum ParamError {
    #[error("{key} is {value} but all of the following are missing: {}", .missing.join(", "))]
    RequiredIf {
        key: &'static str,
        value: &'static str,
        missing: Vec<&'static str>,
    },

    #[error("one of the following is required: {}", .fields.join(", "))]
    RequiredOneOf { fields: Vec<&'static str> },

    #[error("end_time ({end}) must not be before start_time ({start})")]
    InvalidWindow { start: Timestamp, end: Timestamp },

    #[error("Failed to read params file {}", .path.display())]
    ParamsFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid params file {}", .path.display())]
    ParamsFileParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// The single action a valid parameter set resolves to.
#[derive(Debug, Clone, PartialEq)]
pub enum DowntimeAction {
    Schedule(ScheduleDowntimeRequest),
    Remove(RemoveDowntimeRequest),
}

/// Flat parameter set of one invocation.
///
/// Deserializes from a JSON object keyed by parameter name; unknown keys are rejected.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DowntimeParams {
    pub api_url: Option<String>,
    pub api_user: Option<String>,
    #[serde(deserialize_with = "opt_secret_string")]
    pub api_password: Option<SecretString>,
    #[serde(deserialize_with = "opt_u64_from_string_or_number")]
    pub api_timeout: Option<u64>,
    pub api_version: Option<ApiVersion>,
    pub skip_verify: bool,

    pub state: State,
    pub object_type: ObjectType,
    pub name: Option<String>,
    pub filters: Option<String>,
    pub filter_vars: Option<Map<String, Value>>,

    pub start_time: Option<Timestamp>,
    pub end_time: Option<Timestamp>,
    #[serde(deserialize_with = "opt_u64_from_string_or_number")]
    pub duration: Option<u64>,
    pub fixed: bool,
    pub all_services: bool,
    pub trigger_name: Option<String>,
    pub author: String,
    pub comment: String,
}

impl Default for DowntimeParams {
    fn default() -> Self {
        Self {
            api_url: None,
            api_user: None,
            api_password: None,
            api_timeout: None,
            api_version: None,
            skip_verify: false,
            state: State::default(),
            object_type: ObjectType::default(),
            name: None,
            filters: None,
            filter_vars: None,
            start_time: None,
            end_time: None,
            duration: None,
            fixed: false,
            all_services: false,
            trigger_name: None,
            author: DEFAULT_AUTHOR.to_string(),
            comment: DEFAULT_COMMENT.to_string(),
        }
    }
}

fn opt_secret_string<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.map(|s| SecretString::new(s.into())))
}

/// Trimmed, non-blank view of an optional string.
pub(crate) fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl DowntimeParams {
    /// Parse a params file: a JSON object keyed by parameter name.
    pub fn from_file(path: &Path) -> Result<Self, ParamError> {
        let content = std::fs::read_to_string(path).map_err(|source| ParamError::ParamsFileRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ParamError::ParamsFileParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Check the parameter rules and build the request for the selected action.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule, in this order: fields required by
    /// `state=present`, `duration` required by `fixed=true`, one of
    /// `filters`/`name`, and finally the downtime window ordering.
    pub fn validate(&self) -> Result<DowntimeAction, ParamError> {
        let filters = non_blank(&self.filters);
        let name = non_blank(&self.name);

        if self.state == State::Present {
            let mut missing = Vec::new();
            if self.start_time.is_none() {
                missing.push("start_time");
            }
            if self.end_time.is_none() {
                missing.push("end_time");
            }
            if filters.is_none() {
                missing.push("filters");
            }
            if !missing.is_empty() {
                return Err(ParamError::RequiredIf {
                    key: "state",
                    value: self.state.as_str(),
                    missing,
                });
            }
        }

        if self.fixed && self.duration.is_none() {
            return Err(ParamError::RequiredIf {
                key: "fixed",
                value: "true",
                missing: vec!["duration"],
            });
        }

        if filters.is_none() && name.is_none() {
            return Err(ParamError::RequiredOneOf {
                fields: vec!["filters", "name"],
            });
        }

        match (self.state, self.start_time, self.end_time, filters) {
            (State::Present, Some(start), Some(end), Some(filters)) => {
                if end < start {
                    return Err(ParamError::InvalidWindow { start, end });
                }
                Ok(DowntimeAction::Schedule(
                    ScheduleDowntimeRequest::new(
                        self.object_type,
                        filters,
                        self.author.clone(),
                        self.comment.clone(),
                        start,
                        end,
                    )
                    .duration(self.duration)
                    .fixed(self.fixed)
                    .all_services(self.all_services)
                    .filter_vars(self.filter_vars.clone())
                    .trigger_name(non_blank(&self.trigger_name).map(str::to_string)),
                ))
            }
            // Present without a full window was rejected above
            (State::Present, ..) => Err(ParamError::RequiredIf {
                key: "state",
                value: "present",
                missing: vec!["start_time", "end_time", "filters"],
            }),
            (State::Absent, ..) => Ok(DowntimeAction::Remove(
                RemoveDowntimeRequest::new(self.object_type)
                    .name(name.map(str::to_string))
                    .filters(filters.map(str::to_string))
                    .filter_vars(self.filter_vars.clone()),
            )),
        }
    }
}
