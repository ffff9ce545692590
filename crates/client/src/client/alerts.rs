//! Alert-related API methods for [`PagerDutyClient`].
//!
//! # What this module handles:
//! - Listing the alerts of an incident
//!
//! # What this module does NOT handle:
//! - Request construction and normalization (in [`crate::endpoints::list_alerts`])

use crate::client::PagerDutyClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{Alert, ListResponseModel};

impl PagerDutyClient {
    /// List the alerts of an incident.
    ///
    /// # Arguments
    /// * `incident_id` - The parent incident
    /// * `limit` - Page size and result cap; `None` returns up to 1000 alerts
    ///
    /// # Returns
    /// The alerts in server order, or `ClientError::NotFound` if the incident
    /// does not exist.
    pub async fn list_alerts(
        &self,
        incident_id: &str,
        limit: Option<usize>,
    ) -> Result<ListResponseModel<Alert>> {
        endpoints::list_alerts(self, incident_id, limit).await
    }
}
