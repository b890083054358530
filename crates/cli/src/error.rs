//! Exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that callers can use to distinguish error types.
//! - Map operator, parameter, configuration and client errors to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by the result envelope).
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.

use icinga_client::ClientError;
use icinga_config::ConfigError;

use crate::operator::OperatorError;
use crate::params::ParamError;

/// Structured exit codes for icinga-downtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - the downtime action was accepted.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Authentication failure - invalid credentials or insufficient API permissions.
    AuthenticationFailed = 2,

    /// Connection error - network, timeout, or DNS failure.
    ///
    /// The outcome of the request is unknown.
    ConnectionError = 3,

    /// Not found - no object matched the name or filter.
    NotFound = 4,

    /// Validation error - rejected arguments, parameter rules, connection settings,
    /// or a malformed filter.
    ///
    /// Callers should fix the input and not retry the same request.
    ValidationError = 5,

    /// Missing dependency - the HTTP client backend could not be initialized.
    MissingDependency = 6,

    /// Service unavailable - HTTP 502/503/504.
    ServiceUnavailable = 8,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            // Authentication errors (exit code 2)
            ClientError::AuthFailed(_) => ExitCode::AuthenticationFailed,
            ClientError::ApiError {
                status: 401 | 403, ..
            } => ExitCode::AuthenticationFailed,

            // Connection errors (exit code 3)
            ClientError::ConnectionRefused(_) => ExitCode::ConnectionError,
            ClientError::Timeout(_) => ExitCode::ConnectionError,
            ClientError::HttpError(e) => {
                if e.is_connect() || e.is_timeout() {
                    ExitCode::ConnectionError
                } else {
                    ExitCode::GeneralError
                }
            }

            // Not found (exit code 4)
            ClientError::ApiError { status: 404, .. } => ExitCode::NotFound,

            // Validation errors (exit code 5)
            ClientError::InvalidUrl(_) => ExitCode::ValidationError,
            ClientError::ApiError { status: 400, .. } => ExitCode::ValidationError,

            // Missing dependency (exit code 6)
            ClientError::Backend(_) => ExitCode::MissingDependency,

            // Service unavailable (exit code 8)
            ClientError::ApiError {
                status: 502 | 503 | 504,
                ..
            } => ExitCode::ServiceUnavailable,

            ClientError::ApiError { .. } => ExitCode::GeneralError,
            ClientError::InvalidResponse(_) => ExitCode::GeneralError,
        }
    }
}

impl From<&OperatorError> for ExitCode {
    fn from(err: &OperatorError) -> Self {
        match err {
            OperatorError::Params(_) => ExitCode::ValidationError,
            OperatorError::Config(_) => ExitCode::ValidationError,
            OperatorError::Dependency { .. } => ExitCode::MissingDependency,
            OperatorError::Api(e) => ExitCode::from(e),
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(err) = cause.downcast_ref::<OperatorError>() {
                return ExitCode::from(err);
            }
            if let Some(err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(err);
            }
            if cause.is::<ParamError>() || cause.is::<ConfigError>() || cause.is::<clap::Error>() {
                return ExitCode::ValidationError;
            }
        }

        ExitCode::GeneralError
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(status: u16) -> ClientError {
        ClientError::ApiError {
            status,
            url: "https://localhost:5665/v1/actions/remove-downtime".to_string(),
            message: "error".to_string(),
        }
    }

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::AuthenticationFailed.as_i32(), 2);
        assert_eq!(ExitCode::MissingDependency.as_i32(), 6);
        assert_eq!(ExitCode::ServiceUnavailable.as_i32(), 8);
    }

    #[test]
    fn test_from_client_error_api_statuses() {
        assert_eq!(ExitCode::from(&api_error(400)), ExitCode::ValidationError);
        assert_eq!(ExitCode::from(&api_error(401)), ExitCode::AuthenticationFailed);
        assert_eq!(ExitCode::from(&api_error(403)), ExitCode::AuthenticationFailed);
        assert_eq!(ExitCode::from(&api_error(404)), ExitCode::NotFound);
        assert_eq!(ExitCode::from(&api_error(500)), ExitCode::GeneralError);
        assert_eq!(ExitCode::from(&api_error(503)), ExitCode::ServiceUnavailable);
    }

    #[test]
    fn test_from_client_error_connection_refused() {
        let err = ClientError::ConnectionRefused("localhost:5665".to_string());
        assert_eq!(ExitCode::from(&err), ExitCode::ConnectionError);
    }

    #[test]
    fn test_from_client_error_timeout() {
        let err = ClientError::Timeout("https://localhost:5665".to_string());
        assert_eq!(ExitCode::from(&err), ExitCode::ConnectionError);
    }

    #[test]
    fn test_operator_params_error_is_validation() {
        let err = anyhow::Error::new(OperatorError::Params(ParamError::RequiredOneOf {
            fields: vec!["filters", "name"],
        }));
        assert_eq!(err.exit_code(), ExitCode::ValidationError);
    }

    #[test]
    fn test_operator_config_error_is_validation() {
        let err = anyhow::Error::new(OperatorError::Config(ConfigError::MissingApiUrl));
        assert_eq!(err.exit_code(), ExitCode::ValidationError);
    }

    #[test]
    fn test_operator_api_error_uses_client_mapping() {
        let err = anyhow::Error::new(OperatorError::Api(api_error(404)));
        assert_eq!(err.exit_code(), ExitCode::NotFound);
    }

    #[test]
    fn test_bare_param_error_is_validation() {
        let err = anyhow::Error::new(ParamError::RequiredOneOf {
            fields: vec!["filters", "name"],
        });
        assert_eq!(err.exit_code(), ExitCode::ValidationError);
    }

    #[test]
    fn test_dotenv_error_is_validation() {
        let err = anyhow::Error::new(ConfigError::DotenvParse { error_index: 0 });
        assert_eq!(err.exit_code(), ExitCode::ValidationError);
    }

    #[test]
    fn test_rejected_argument_is_validation() {
        let err = clap::Error::raw(
            clap::error::ErrorKind::ValueValidation,
            "invalid value 'tomorrow' for '--start-time <START_TIME>'",
        );
        assert_eq!(anyhow::Error::new(err).exit_code(), ExitCode::ValidationError);
    }

    #[test]
    fn test_unknown_error_is_general() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
    }
}
