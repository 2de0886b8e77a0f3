use axum::{
    Json,
    extract::{Extension, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::api::context::AppState;
use crate::api::permissions::PermissionError;
use model_user::UserContext;
use models_portfolio::Tenant;
use models_portfolio::api::{CreateTenant, ValidationError};
use portfolio_db_client::error::PortfolioDatabaseError;
use portfolio_db_client::tenants::create as tenants_create;

#[derive(Debug, Error)]
pub enum CreateTenantErr {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Database error: {0}")]
    Database(#[from] PortfolioDatabaseError),

    #[error("Permission error: {0}")]
    Permission(#[from] PermissionError),
}

impl IntoResponse for CreateTenantErr {
    fn into_response(self) -> Response {
        let status_code = match &self {
            CreateTenantErr::Validation(_) => StatusCode::BAD_REQUEST,
            CreateTenantErr::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CreateTenantErr::Permission(e) => e.status_code(),
        };

        if status_code.is_server_error() {
            tracing::error!(
                error = ?self,
                error_type = "CreateTenantErr",
                "Internal server error"
            );
        }

        (status_code, self.to_string()).into_response()
    }
}

/// Create a tenant
#[utoipa::path(
    post,
    path = "/tenants",
    request_body = CreateTenant,
    responses(
        (status = 200, description = "Tenant created", body = Tenant),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Tenants"
)]
#[tracing::instrument(skip(context, user_context, req), fields(user_id = %user_context.user_id, property_id = %req.property_id))]
pub async fn handler(
    State(context): State<AppState>,
    Extension(user_context): Extension<UserContext>,
    Json(req): Json<CreateTenant>,
) -> Result<Json<Tenant>, CreateTenantErr> {
    req.validate()?;

    let scope = crate::api::permissions::caller_scope(&context.db, &user_context).await?;
    crate::api::permissions::ensure_property_access(&scope, &req.property_id)?;

    let tenant = tenants_create::create_tenant(&context.db, req).await?;

    tracing::info!(id = %tenant.id, "created tenant");
    Ok(Json(tenant))
}
