//! Payment operations.

use anyhow::Result;
use models_portfolio::Payment;
use models_portfolio::api::{CreatePayment, PaymentsResponse, UpdatePayment};

use crate::{PortfolioServiceClient, check_status};

impl PortfolioServiceClient {
    #[tracing::instrument(skip(self))]
    pub async fn list_payments(&self) -> Result<Vec<Payment>> {
        let response = self
            .client
            .get(format!("{}/payments", self.url))
            .bearer_auth(self.bearer()?)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json::<PaymentsResponse>().await?.payments)
    }

    #[tracing::instrument(skip(self, input))]
    pub async fn create_payment(&self, input: &CreatePayment) -> Result<Payment> {
        let response = self
            .client
            .post(format!("{}/payments", self.url))
            .bearer_auth(self.bearer()?)
            .json(input)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json::<Payment>().await?)
    }

    #[tracing::instrument(skip(self, update))]
    pub async fn update_payment(&self, id: &str, update: &UpdatePayment) -> Result<Payment> {
        let response = self
            .client
            .patch(format!("{}/payments/{}", self.url, id))
            .bearer_auth(self.bearer()?)
            .json(update)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json::<Payment>().await?)
    }
}
