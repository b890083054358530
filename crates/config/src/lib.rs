//! Connection configuration for the Icinga 2 downtime tooling.
//!
//! This crate provides types and loaders for resolving the Icinga 2 API
//! connection settings from environment variables, `.env` files and
//! explicit overrides.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{ApiVersion, ConnectionConfig};
