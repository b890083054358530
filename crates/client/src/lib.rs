//! Icinga 2 REST API client.
//!
//! This crate provides a type-safe client for the downtime actions of the
//! Icinga 2 REST API (`/v1/actions/schedule-downtime` and
//! `/v1/actions/remove-downtime`), authenticated with HTTP basic auth.

mod api;
mod auth;
pub mod client;
pub mod error;
pub mod models;
pub mod serde_helpers;

pub mod endpoints;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use api::DowntimeApi;
pub use auth::Credentials;
pub use client::Icinga2Client;
pub use client::builder::Icinga2ClientBuilder;
pub use error::{ClientError, Result};
pub use models::{
    ActionResponse, ActionResult, ObjectType, RemoveDowntimeRequest, ScheduleDowntimeRequest,
    Timestamp,
};
