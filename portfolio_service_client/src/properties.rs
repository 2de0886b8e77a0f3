//! Property operations.

use anyhow::Result;
use models_portfolio::Property;
use models_portfolio::api::{CreateProperty, PropertiesResponse, UpdateProperty};

use crate::{PortfolioServiceClient, check_status};

impl PortfolioServiceClient {
    #[tracing::instrument(skip(self))]
    pub async fn list_properties(&self) -> Result<Vec<Property>> {
        let response = self
            .client
            .get(format!("{}/properties", self.url))
            .bearer_auth(self.bearer()?)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json::<PropertiesResponse>().await?.properties)
    }

    #[tracing::instrument(skip(self, input))]
    pub async fn create_property(&self, input: &CreateProperty) -> Result<Property> {
        let response = self
            .client
            .post(format!("{}/properties", self.url))
            .bearer_auth(self.bearer()?)
            .json(input)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json::<Property>().await?)
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_property(&self, id: &str) -> Result<Property> {
        let response = self
            .client
            .get(format!("{}/properties/{}", self.url, id))
            .bearer_auth(self.bearer()?)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json::<Property>().await?)
    }

    #[tracing::instrument(skip(self, update))]
    pub async fn update_property(&self, id: &str, update: &UpdateProperty) -> Result<Property> {
        let response = self
            .client
            .patch(format!("{}/properties/{}", self.url, id))
            .bearer_auth(self.bearer()?)
            .json(update)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json::<Property>().await?)
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_property(&self, id: &str) -> Result<()> {
        let response = self
            .client
            .delete(format!("{}/properties/{}", self.url, id))
            .bearer_auth(self.bearer()?)
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }
}
