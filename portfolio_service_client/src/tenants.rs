//! Tenant operations.

use anyhow::Result;
use models_portfolio::Tenant;
use models_portfolio::api::{CreateTenant, TenantsResponse, UpdateTenant};

use crate::{PortfolioServiceClient, check_status};

impl PortfolioServiceClient {
    #[tracing::instrument(skip(self))]
    pub async fn list_tenants(&self) -> Result<Vec<Tenant>> {
        let response = self
            .client
            .get(format!("{}/tenants", self.url))
            .bearer_auth(self.bearer()?)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json::<TenantsResponse>().await?.tenants)
    }

    #[tracing::instrument(skip(self, input))]
    pub async fn create_tenant(&self, input: &CreateTenant) -> Result<Tenant> {
        let response = self
            .client
            .post(format!("{}/tenants", self.url))
            .bearer_auth(self.bearer()?)
            .json(input)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json::<Tenant>().await?)
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_tenant(&self, id: &str) -> Result<Tenant> {
        let response = self
            .client
            .get(format!("{}/tenants/{}", self.url, id))
            .bearer_auth(self.bearer()?)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json::<Tenant>().await?)
    }

    #[tracing::instrument(skip(self, update))]
    pub async fn update_tenant(&self, id: &str, update: &UpdateTenant) -> Result<Tenant> {
        let response = self
            .client
            .patch(format!("{}/tenants/{}", self.url, id))
            .bearer_auth(self.bearer()?)
            .json(update)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json::<Tenant>().await?)
    }
}
