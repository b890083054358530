//! Downtime action endpoints.
//!
//! Responsibilities:
//! - Low-level HTTP calls to `/v1/actions/schedule-downtime` and `/v1/actions/remove-downtime`.
//! - Handle request serialization and response parsing.
//!
//! Does NOT handle:
//! - Parameter validation (see the cli crate).
//! - Interpreting per-object result codes.

use icinga_config::ApiVersion;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use crate::auth::Credentials;
use crate::endpoints::send_request;
use crate::error::{ClientError, Result};
use crate::models::{ActionResponse, RemoveDowntimeRequest, ScheduleDowntimeRequest};

/// Schedule a downtime for the objects matched by the request filter.
pub async fn schedule_downtime(
    client: &Client,
    base_url: &str,
    api_version: ApiVersion,
    credentials: &Credentials,
    request: &ScheduleDowntimeRequest,
) -> Result<ActionResponse> {
    debug!(
        object_type = %request.object_type(),
        filter = request.filters(),
        "Scheduling downtime"
    );
    post_action(
        client,
        base_url,
        api_version,
        credentials,
        "schedule-downtime",
        request,
    )
    .await
}

/// Remove the downtimes selected by name or filter.
pub async fn remove_downtime(
    client: &Client,
    base_url: &str,
    api_version: ApiVersion,
    credentials: &Credentials,
    request: &RemoveDowntimeRequest,
) -> Result<ActionResponse> {
    debug!(
        object_type = %request.object_type(),
        name = request.target_name(),
        "Removing downtime"
    );
    post_action(
        client,
        base_url,
        api_version,
        credentials,
        "remove-downtime",
        request,
    )
    .await
}

async fn post_action<B: Serialize>(
    client: &Client,
    base_url: &str,
    api_version: ApiVersion,
    credentials: &Credentials,
    action: &str,
    body: &B,
) -> Result<ActionResponse> {
    let url = format!(
        "{}/{}/actions/{}",
        base_url,
        api_version.path_segment(),
        action
    );

    let builder = credentials
        .apply(client.post(&url))
        .header("Accept", "application/json")
        .header("X-HTTP-Method-Override", "POST")
        .json(body);

    let response = send_request(builder, &url).await?;

    response.json().await.map_err(|e| {
        ClientError::InvalidResponse(format!("Failed to parse {} response: {}", action, e))
    })
}
