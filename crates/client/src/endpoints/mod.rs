//! REST API endpoint implementations.
//!
//! Each function performs exactly one HTTP request. Callers that want a
//! higher-level API should use [`crate::Icinga2Client`].

mod actions;
mod request;

pub use actions::{remove_downtime, schedule_downtime};
pub use request::send_request;
