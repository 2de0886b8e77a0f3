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
use models_portfolio::api::TenantsResponse;
use portfolio_db_client::error::PortfolioDatabaseError;
use portfolio_db_client::tenants::list as tenants_list;

#[derive(Debug, Error)]
pub enum ListTenantsErr {
    #[error("Database error: {0}")]
    Database(#[from] PortfolioDatabaseError),

    #[error("Permission error: {0}")]
    Permission(#[from] PermissionError),
}

impl IntoResponse for ListTenantsErr {
    fn into_response(self) -> Response {
        let status_code = match &self {
            ListTenantsErr::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ListTenantsErr::Permission(e) => e.status_code(),
        };

        if status_code.is_server_error() {
            tracing::error!(
                error = ?self,
                error_type = "ListTenantsErr",
                "Internal server error"
            );
        }

        (status_code, self.to_string()).into_response()
    }
}

/// List every tenant visible to the caller
#[utoipa::path(
    get,
    path = "/tenants",
    responses(
        (status = 200, description = "Tenants retrieved successfully", body = TenantsResponse),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Tenants"
)]
#[tracing::instrument(skip(context, user_context), fields(user_id = %user_context.user_id))]
pub async fn handler(
    State(context): State<AppState>,
    Extension(user_context): Extension<UserContext>,
) -> Result<Json<TenantsResponse>, ListTenantsErr> {
    let scope = crate::api::permissions::caller_scope(&context.db, &user_context).await?;
    let tenants = tenants_list::list_tenants(&context.db, &scope).await?;

    tracing::info!(count = tenants.len(), "retrieved tenants");
    Ok(Json(TenantsResponse { tenants }))
}
