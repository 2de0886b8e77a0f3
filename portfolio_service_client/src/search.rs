//! Search across properties and tenants.

use anyhow::Result;
use models_portfolio::api::SearchResponse;

use crate::{PortfolioServiceClient, check_status};

impl PortfolioServiceClient {
    #[tracing::instrument(skip(self))]
    pub async fn search(&self, query: &str) -> Result<SearchResponse> {
        let response = self
            .client
            .get(format!("{}/search", self.url))
            .query(&[("query", query)])
            .bearer_auth(self.bearer()?)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json::<SearchResponse>().await?)
    }
}
