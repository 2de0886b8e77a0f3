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
use models_portfolio::MaintenanceRequest;
use models_portfolio::api::UpdateMaintenanceRequest;
use portfolio_db_client::error::PortfolioDatabaseError;
use portfolio_db_client::maintenance_requests::{
    get as maintenance_get, update as maintenance_update,
};

#[derive(Debug, Error)]
pub enum UpdateMaintenanceErr {
    #[error("maintenance request not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(PortfolioDatabaseError),

    #[error("Permission error: {0}")]
    Permission(#[from] PermissionError),
}

impl From<PortfolioDatabaseError> for UpdateMaintenanceErr {
    fn from(e: PortfolioDatabaseError) -> Self {
        if e.is_not_found() {
            UpdateMaintenanceErr::NotFound
        } else {
            UpdateMaintenanceErr::Database(e)
        }
    }
}

impl IntoResponse for UpdateMaintenanceErr {
    fn into_response(self) -> Response {
        let status_code = match &self {
            UpdateMaintenanceErr::NotFound => StatusCode::NOT_FOUND,
            UpdateMaintenanceErr::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            UpdateMaintenanceErr::Permission(e) => e.status_code(),
        };

        if status_code.is_server_error() {
            tracing::error!(
                error = ?self,
                error_type = "UpdateMaintenanceErr",
                "Internal server error"
            );
        }

        (status_code, self.to_string()).into_response()
    }
}

/// Merge-patch a maintenance request
#[utoipa::path(
    patch,
    path = "/maintenance/{id}",
    params(("id" = String, Path, description = "Maintenance request id")),
    request_body = UpdateMaintenanceRequest,
    responses(
        (status = 200, description = "Maintenance request updated", body = MaintenanceRequest),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Maintenance request not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Maintenance"
)]
#[tracing::instrument(skip(context, user_context, req), fields(user_id = %user_context.user_id))]
pub async fn handler(
    Path(id): Path<String>,
    State(context): State<AppState>,
    Extension(user_context): Extension<UserContext>,
    Json(req): Json<UpdateMaintenanceRequest>,
) -> Result<Json<MaintenanceRequest>, UpdateMaintenanceErr> {
    let scope = crate::api::permissions::caller_scope(&context.db, &user_context).await?;

    let existing = maintenance_get::get_maintenance_request(&context.db, &id).await?;
    crate::api::permissions::ensure_property_access(&scope, &existing.property_id)?;

    let request = maintenance_update::update_maintenance_request(&context.db, &id, req).await?;

    tracing::info!(id = %id, status = ?request.status, "updated maintenance request");
    Ok(Json(request))
}
