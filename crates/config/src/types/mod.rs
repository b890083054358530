//! Configuration type definitions.
//!
//! Responsibilities:
//! - Define the resolved connection settings for the Icinga 2 API.
//! - Provide serialization helpers for sensitive types (secrets, durations).
//!
//! Does NOT handle:
//! - Configuration loading from environment variables (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - The API password is always held as `secrecy::SecretString`.

mod connection;

pub use connection::{ApiVersion, ConnectionConfig};
