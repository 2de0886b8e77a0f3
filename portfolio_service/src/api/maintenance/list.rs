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
use models_portfolio::api::MaintenanceRequestsResponse;
use portfolio_db_client::error::PortfolioDatabaseError;
use portfolio_db_client::maintenance_requests::list as maintenance_list;

#[derive(Debug, Error)]
pub enum ListMaintenanceErr {
    #[error("Database error: {0}")]
    Database(#[from] PortfolioDatabaseError),

    #[error("Permission error: {0}")]
    Permission(#[from] PermissionError),
}

impl IntoResponse for ListMaintenanceErr {
    fn into_response(self) -> Response {
        let status_code = match &self {
            ListMaintenanceErr::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ListMaintenanceErr::Permission(e) => e.status_code(),
        };

        if status_code.is_server_error() {
            tracing::error!(
                error = ?self,
                error_type = "ListMaintenanceErr",
                "Internal server error"
            );
        }

        (status_code, self.to_string()).into_response()
    }
}

/// List every maintenance request visible to the caller
#[utoipa::path(
    get,
    path = "/maintenance",
    responses(
        (status = 200, description = "Maintenance requests retrieved successfully", body = MaintenanceRequestsResponse),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Maintenance"
)]
#[tracing::instrument(skip(context, user_context), fields(user_id = %user_context.user_id))]
pub async fn handler(
    State(context): State<AppState>,
    Extension(user_context): Extension<UserContext>,
) -> Result<Json<MaintenanceRequestsResponse>, ListMaintenanceErr> {
    let scope = crate::api::permissions::caller_scope(&context.db, &user_context).await?;
    let requests = maintenance_list::list_maintenance_requests(&context.db, &scope).await?;

    tracing::info!(count = requests.len(), "retrieved maintenance requests");
    Ok(Json(MaintenanceRequestsResponse { requests }))
}
