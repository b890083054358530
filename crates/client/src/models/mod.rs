//! Data models for Icinga 2 downtime actions.
//!
//! Request types serialize to the JSON bodies the action endpoints expect;
//! response types keep the per-object result records opaque.

pub mod actions;
pub mod common;
pub mod timestamp;

pub use actions::{ActionResponse, ActionResult, RemoveDowntimeRequest, ScheduleDowntimeRequest};
pub use common::ObjectType;
pub use timestamp::Timestamp;
