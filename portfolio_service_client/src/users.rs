//! User management. Superadmin only on the server side.

use anyhow::Result;
use model_user::{UpdateUserRequest, User, UsersResponse};

use crate::{PortfolioServiceClient, check_status};

impl PortfolioServiceClient {
    #[tracing::instrument(skip(self))]
    pub async fn list_users(&self) -> Result<Vec<User>> {
        let response = self
            .client
            .get(format!("{}/users", self.url))
            .bearer_auth(self.bearer()?)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json::<UsersResponse>().await?.users)
    }

    #[tracing::instrument(skip(self, update))]
    pub async fn update_user(&self, id: &str, update: &UpdateUserRequest) -> Result<User> {
        let response = self
            .client
            .patch(format!("{}/users/{}", self.url, id))
            .bearer_auth(self.bearer()?)
            .json(update)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json::<User>().await?)
    }
}
