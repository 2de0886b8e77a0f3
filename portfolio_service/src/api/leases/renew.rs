use axum::{
    Json,
    extract::{Extension, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::api::context::AppState;
use crate::api::permissions::PermissionError;
use model_user::UserContext;
use models_portfolio::{Tenant, TenantStatus};
use models_portfolio::api::{RenewLeaseRequest, UpdateTenant, ValidationError};
use portfolio_db_client::error::PortfolioDatabaseError;
use portfolio_db_client::tenants::{get as tenants_get, update as tenants_update};

#[derive(Debug, Error)]
pub enum RenewLeaseErr {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("tenant not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(PortfolioDatabaseError),

    #[error("Permission error: {0}")]
    Permission(#[from] PermissionError),
}

impl From<PortfolioDatabaseError> for RenewLeaseErr {
    fn from(e: PortfolioDatabaseError) -> Self {
        if e.is_not_found() {
            RenewLeaseErr::NotFound
        } else {
            RenewLeaseErr::Database(e)
        }
    }
}

impl IntoResponse for RenewLeaseErr {
    fn into_response(self) -> Response {
        let status_code = match &self {
            RenewLeaseErr::Validation(_) => StatusCode::BAD_REQUEST,
            RenewLeaseErr::NotFound => StatusCode::NOT_FOUND,
            RenewLeaseErr::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            RenewLeaseErr::Permission(e) => e.status_code(),
        };

        if status_code.is_server_error() {
            tracing::error!(
                error = ?self,
                error_type = "RenewLeaseErr",
                "Internal server error"
            );
        }

        (status_code, self.to_string()).into_response()
    }
}

/// Renew a tenant's lease. The tenancy goes back to `active` even if it had
/// already expired.
#[utoipa::path(
    post,
    path = "/leases/{tenant_id}/renew",
    params(("tenant_id" = String, Path, description = "Tenant id")),
    request_body = RenewLeaseRequest,
    responses(
        (status = 200, description = "Lease renewed", body = Tenant),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Tenant not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Leases"
)]
#[tracing::instrument(skip(context, user_context, req), fields(user_id = %user_context.user_id, new_lease_end = %req.new_lease_end))]
pub async fn handler(
    Path(tenant_id): Path<String>,
    State(context): State<AppState>,
    Extension(user_context): Extension<UserContext>,
    Json(req): Json<RenewLeaseRequest>,
) -> Result<Json<Tenant>, RenewLeaseErr> {
    req.validate()?;

    let scope = crate::api::permissions::caller_scope(&context.db, &user_context).await?;
    let existing = tenants_get::get_tenant(&context.db, &tenant_id).await?;
    crate::api::permissions::ensure_property_access(&scope, &existing.property_id)?;

    let patch = UpdateTenant {
        lease_end: Some(req.new_lease_end),
        rent_amount: req.new_rent_amount,
        status: Some(TenantStatus::Active),
        ..Default::default()
    };
    let tenant = tenants_update::update_tenant(&context.db, &tenant_id, patch).await?;

    tracing::info!(tenant_id = %tenant_id, "renewed lease");
    Ok(Json(tenant))
}
