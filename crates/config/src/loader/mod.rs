//! Configuration loader for environment variables and explicit overrides.
//!
//! Responsibilities:
//! - Load connection settings from `.env` files, environment variables and builder setters.
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Enforce the `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Performing any network I/O (see client crate).
//! - Downtime parameters (see the cli crate).
//!
//! Invariants / Assumptions:
//! - Builder setters applied after `from_env()` take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;

pub use builder::ConfigLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;

#[cfg(test)]
mod tests;
