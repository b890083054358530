//! Transport seam for downtime actions.
//!
//! Callers that only need to schedule or remove downtimes depend on
//! [`DowntimeApi`] instead of the concrete [`crate::Icinga2Client`], which
//! lets them be exercised against an in-memory implementation.

use std::future::Future;

use crate::error::Result;
use crate::models::{ActionResponse, RemoveDowntimeRequest, ScheduleDowntimeRequest};

/// The two downtime actions of the Icinga 2 API.
///
/// Each call performs exactly one request; implementations must not retry.
pub trait DowntimeApi {
    /// Schedule a downtime for every object matched by the request filter.
    fn schedule_downtime(
        &self,
        request: &ScheduleDowntimeRequest,
    ) -> impl Future<Output = Result<ActionResponse>> + Send;

    /// Remove the downtimes selected by name or filter.
    fn remove_downtime(
        &self,
        request: &RemoveDowntimeRequest,
    ) -> impl Future<Output = Result<ActionResponse>> + Send;
}
