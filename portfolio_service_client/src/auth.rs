//! Sign-up, sign-in, and password reset.

use anyhow::Result;
use model_user::{AuthResponse, ResetPasswordRequest, SignInRequest, SignUpRequest, User};

use crate::{PortfolioServiceClient, check_status};

impl PortfolioServiceClient {
    /// Register a new account and adopt the returned session token.
    #[tracing::instrument(skip(self, password))]
    pub async fn sign_up(&mut self, name: &str, email: &str, password: &str) -> Result<User> {
        let request = SignUpRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = self
            .client
            .post(format!("{}/auth/signup", self.url))
            .json(&request)
            .send()
            .await?;
        let response = check_status(response).await?;

        let auth = response.json::<AuthResponse>().await?;
        self.set_token(auth.token);
        Ok(auth.user)
    }

    /// Sign in and adopt the returned session token.
    #[tracing::instrument(skip(self, password))]
    pub async fn sign_in(&mut self, email: &str, password: &str) -> Result<AuthResponse> {
        let request = SignInRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = self
            .client
            .post(format!("{}/auth/signin", self.url))
            .json(&request)
            .send()
            .await?;
        let response = check_status(response).await?;

        let auth = response.json::<AuthResponse>().await?;
        self.set_token(auth.token.clone());
        Ok(auth)
    }

    /// Ask for a password reset. Always accepted; says nothing about whether
    /// the account exists.
    #[tracing::instrument(skip(self))]
    pub async fn reset_password(&self, email: &str) -> Result<()> {
        let request = ResetPasswordRequest {
            email: email.to_string(),
        };

        let response = self
            .client
            .post(format!("{}/auth/reset-password", self.url))
            .json(&request)
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    /// The signed-in caller's user record.
    #[tracing::instrument(skip(self))]
    pub async fn me(&self) -> Result<User> {
        let response = self
            .client
            .get(format!("{}/auth/me", self.url))
            .bearer_auth(self.bearer()?)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json::<User>().await?)
    }
}
