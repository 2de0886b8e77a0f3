//! Typed client for the portfolio service.
//!
//! [`PortfolioServiceClient`] is the thin HTTP layer; [`cached::CachedPortfolio`]
//! wraps it in per-collection caches with optimistic mutations, which is what
//! interactive callers should hold on to.

use anyhow::Result;

pub mod auth;
pub mod cache;
pub mod cached;
pub mod leases;
pub mod maintenance;
pub mod media;
pub mod payments;
pub mod properties;
pub mod reports;
pub mod search;
pub mod session;
pub mod tenants;
pub mod users;

pub use models_portfolio::{
    MaintenanceRequest, Payment, Property, Tenant,
    api::{
        ActivityFeedResponse, CreateMaintenanceRequest, CreatePayment, CreateProperty,
        CreateTenant, DashboardReport, LeasesResponse, RenewLeaseRequest, SearchResponse,
        TerminateLeaseRequest, UpdateMaintenanceRequest, UpdatePayment, UpdateProperty,
        UpdateTenant,
    },
};

#[derive(Clone)]
pub struct PortfolioServiceClient {
    url: String,
    client: reqwest::Client,
    token: Option<String>,
}

impl PortfolioServiceClient {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
            token: None,
        }
    }

    /// Resume a persisted session without signing in again.
    pub fn with_token(url: String, token: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
            token: Some(token),
        }
    }

    /// The bearer token, or an error for calls that need one.
    pub(crate) fn bearer(&self) -> Result<&str> {
        self.token
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("not signed in"))
    }

    pub(crate) fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    /// Drop the session token.
    pub fn sign_out(&mut self) {
        self.token = None;
    }
}

/// Bail on non-2xx answers with the status and whatever the body said.
pub(crate) async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("HTTP {}: {}", status, body);
    }
    Ok(response)
}
