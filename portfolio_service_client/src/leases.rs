//! Lease operations: the lease projection plus renewal and termination.

use anyhow::Result;
use models_portfolio::Tenant;
use models_portfolio::api::{LeaseRow, LeasesResponse, RenewLeaseRequest, TerminateLeaseRequest};

use crate::{PortfolioServiceClient, check_status};

impl PortfolioServiceClient {
    #[tracing::instrument(skip(self))]
    pub async fn list_leases(&self) -> Result<Vec<LeaseRow>> {
        let response = self
            .client
            .get(format!("{}/leases", self.url))
            .bearer_auth(self.bearer()?)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json::<LeasesResponse>().await?.leases)
    }

    #[tracing::instrument(skip(self, request))]
    pub async fn renew_lease(
        &self,
        tenant_id: &str,
        request: &RenewLeaseRequest,
    ) -> Result<Tenant> {
        let response = self
            .client
            .post(format!("{}/leases/{}/renew", self.url, tenant_id))
            .bearer_auth(self.bearer()?)
            .json(request)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json::<Tenant>().await?)
    }

    #[tracing::instrument(skip(self, request))]
    pub async fn terminate_lease(
        &self,
        tenant_id: &str,
        request: &TerminateLeaseRequest,
    ) -> Result<Tenant> {
        let response = self
            .client
            .post(format!("{}/leases/{}/terminate", self.url, tenant_id))
            .bearer_auth(self.bearer()?)
            .json(request)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json::<Tenant>().await?)
    }
}
