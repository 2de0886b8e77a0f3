//! Maintenance request operations.

use anyhow::Result;
use models_portfolio::MaintenanceRequest;
use models_portfolio::api::{
    CreateMaintenanceRequest, MaintenanceRequestsResponse, UpdateMaintenanceRequest,
};

use crate::{PortfolioServiceClient, check_status};

impl PortfolioServiceClient {
    #[tracing::instrument(skip(self))]
    pub async fn list_maintenance_requests(&self) -> Result<Vec<MaintenanceRequest>> {
        let response = self
            .client
            .get(format!("{}/maintenance", self.url))
            .bearer_auth(self.bearer()?)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response
            .json::<MaintenanceRequestsResponse>()
            .await?
            .requests)
    }

    #[tracing::instrument(skip(self, input))]
    pub async fn create_maintenance_request(
        &self,
        input: &CreateMaintenanceRequest,
    ) -> Result<MaintenanceRequest> {
        let response = self
            .client
            .post(format!("{}/maintenance", self.url))
            .bearer_auth(self.bearer()?)
            .json(input)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json::<MaintenanceRequest>().await?)
    }

    #[tracing::instrument(skip(self, update))]
    pub async fn update_maintenance_request(
        &self,
        id: &str,
        update: &UpdateMaintenanceRequest,
    ) -> Result<MaintenanceRequest> {
        let response = self
            .client
            .patch(format!("{}/maintenance/{}", self.url, id))
            .bearer_auth(self.bearer()?)
            .json(update)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json::<MaintenanceRequest>().await?)
    }
}
