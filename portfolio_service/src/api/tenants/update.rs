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
use models_portfolio::Tenant;
use models_portfolio::api::UpdateTenant;
use portfolio_db_client::error::PortfolioDatabaseError;
use portfolio_db_client::tenants::{get as tenants_get, update as tenants_update};

#[derive(Debug, Error)]
pub enum UpdateTenantErr {
    #[error("tenant not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(PortfolioDatabaseError),

    #[error("Permission error: {0}")]
    Permission(#[from] PermissionError),
}

impl From<PortfolioDatabaseError> for UpdateTenantErr {
    fn from(e: PortfolioDatabaseError) -> Self {
        if e.is_not_found() {
            UpdateTenantErr::NotFound
        } else {
            UpdateTenantErr::Database(e)
        }
    }
}

impl IntoResponse for UpdateTenantErr {
    fn into_response(self) -> Response {
        let status_code = match &self {
            UpdateTenantErr::NotFound => StatusCode::NOT_FOUND,
            UpdateTenantErr::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            UpdateTenantErr::Permission(e) => e.status_code(),
        };

        if status_code.is_server_error() {
            tracing::error!(
                error = ?self,
                error_type = "UpdateTenantErr",
                "Internal server error"
            );
        }

        (status_code, self.to_string()).into_response()
    }
}

/// Merge-patch a tenant
#[utoipa::path(
    patch,
    path = "/tenants/{id}",
    params(("id" = String, Path, description = "Tenant id")),
    request_body = UpdateTenant,
    responses(
        (status = 200, description = "Tenant updated", body = Tenant),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Tenant not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Tenants"
)]
#[tracing::instrument(skip(context, user_context, req), fields(user_id = %user_context.user_id))]
pub async fn handler(
    Path(id): Path<String>,
    State(context): State<AppState>,
    Extension(user_context): Extension<UserContext>,
    Json(req): Json<UpdateTenant>,
) -> Result<Json<Tenant>, UpdateTenantErr> {
    let scope = crate::api::permissions::caller_scope(&context.db, &user_context).await?;

    let existing = tenants_get::get_tenant(&context.db, &id).await?;
    crate::api::permissions::ensure_property_access(&scope, &existing.property_id)?;
    // Moving the tenant requires access to the destination property too
    if let Some(new_property_id) = &req.property_id {
        crate::api::permissions::ensure_property_access(&scope, new_property_id)?;
    }

    let tenant = tenants_update::update_tenant(&context.db, &id, req).await?;

    tracing::info!(id = %id, "updated tenant");
    Ok(Json(tenant))
}
