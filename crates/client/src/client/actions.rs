//! Downtime action methods for [`Icinga2Client`].

use crate::api::DowntimeApi;
use crate::client::Icinga2Client;
use crate::endpoints;
use crate::error::Result;
use crate::models::{ActionResponse, RemoveDowntimeRequest, ScheduleDowntimeRequest};

impl Icinga2Client {
    /// Schedule a downtime for every object matched by the request filter.
    pub async fn schedule_downtime(
        &self,
        request: &ScheduleDowntimeRequest,
    ) -> Result<ActionResponse> {
        endpoints::schedule_downtime(
            &self.http,
            &self.base_url,
            self.api_version,
            &self.credentials,
            request,
        )
        .await
    }

    /// Remove the downtimes selected by name or filter.
    pub async fn remove_downtime(&self, request: &RemoveDowntimeRequest) -> Result<ActionResponse> {
        endpoints::remove_downtime(
            &self.http,
            &self.base_url,
            self.api_version,
            &self.credentials,
            request,
        )
        .await
    }
}

impl DowntimeApi for Icinga2Client {
    async fn schedule_downtime(
        &self,
        request: &ScheduleDowntimeRequest,
    ) -> Result<ActionResponse> {
        Icinga2Client::schedule_downtime(self, request).await
    }

    async fn remove_downtime(&self, request: &RemoveDowntimeRequest) -> Result<ActionResponse> {
        Icinga2Client::remove_downtime(self, request).await
    }
}
