//! Dashboard and activity reports.

use anyhow::Result;
use models_portfolio::api::{ActivityFeedResponse, DashboardReport};

use crate::{PortfolioServiceClient, check_status};

impl PortfolioServiceClient {
    #[tracing::instrument(skip(self))]
    pub async fn dashboard_report(&self) -> Result<DashboardReport> {
        let response = self
            .client
            .get(format!("{}/reports/dashboard", self.url))
            .bearer_auth(self.bearer()?)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json::<DashboardReport>().await?)
    }

    #[tracing::instrument(skip(self))]
    pub async fn recent_activity(&self) -> Result<ActivityFeedResponse> {
        let response = self
            .client
            .get(format!("{}/reports/activity", self.url))
            .bearer_auth(self.bearer()?)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json::<ActivityFeedResponse>().await?)
    }
}
