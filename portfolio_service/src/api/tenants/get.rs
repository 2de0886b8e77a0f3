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
use portfolio_db_client::error::PortfolioDatabaseError;
use portfolio_db_client::tenants::get as tenants_get;

#[derive(Debug, Error)]
pub enum GetTenantErr {
    #[error("tenant not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(PortfolioDatabaseError),

    #[error("Permission error: {0}")]
    Permission(#[from] PermissionError),
}

impl From<PortfolioDatabaseError> for GetTenantErr {
    fn from(e: PortfolioDatabaseError) -> Self {
        if e.is_not_found() {
            GetTenantErr::NotFound
        } else {
            GetTenantErr::Database(e)
        }
    }
}

impl IntoResponse for GetTenantErr {
    fn into_response(self) -> Response {
        let status_code = match &self {
            GetTenantErr::NotFound => StatusCode::NOT_FOUND,
            GetTenantErr::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            GetTenantErr::Permission(e) => e.status_code(),
        };

        if status_code.is_server_error() {
            tracing::error!(
                error = ?self,
                error_type = "GetTenantErr",
                "Internal server error"
            );
        }

        (status_code, self.to_string()).into_response()
    }
}

/// Get a tenant by id
#[utoipa::path(
    get,
    path = "/tenants/{id}",
    params(("id" = String, Path, description = "Tenant id")),
    responses(
        (status = 200, description = "Tenant retrieved", body = Tenant),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Tenant not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Tenants"
)]
#[tracing::instrument(skip(context, user_context), fields(user_id = %user_context.user_id))]
pub async fn handler(
    Path(id): Path<String>,
    State(context): State<AppState>,
    Extension(user_context): Extension<UserContext>,
) -> Result<Json<Tenant>, GetTenantErr> {
    let scope = crate::api::permissions::caller_scope(&context.db, &user_context).await?;

    let tenant = tenants_get::get_tenant(&context.db, &id).await?;
    if !scope.allows_property(&tenant.property_id) {
        return Err(GetTenantErr::NotFound);
    }

    Ok(Json(tenant))
}
