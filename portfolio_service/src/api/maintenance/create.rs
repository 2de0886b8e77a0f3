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
use models_portfolio::MaintenanceRequest;
use models_portfolio::api::{CreateMaintenanceRequest, ValidationError};
use portfolio_db_client::error::PortfolioDatabaseError;
use portfolio_db_client::maintenance_requests::create as maintenance_create;

#[derive(Debug, Error)]
pub enum CreateMaintenanceErr {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Database error: {0}")]
    Database(#[from] PortfolioDatabaseError),

    #[error("Permission error: {0}")]
    Permission(#[from] PermissionError),
}

impl IntoResponse for CreateMaintenanceErr {
    fn into_response(self) -> Response {
        let status_code = match &self {
            CreateMaintenanceErr::Validation(_) => StatusCode::BAD_REQUEST,
            CreateMaintenanceErr::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CreateMaintenanceErr::Permission(e) => e.status_code(),
        };

        if status_code.is_server_error() {
            tracing::error!(
                error = ?self,
                error_type = "CreateMaintenanceErr",
                "Internal server error"
            );
        }

        (status_code, self.to_string()).into_response()
    }
}

/// Open a maintenance request
#[utoipa::path(
    post,
    path = "/maintenance",
    request_body = CreateMaintenanceRequest,
    responses(
        (status = 200, description = "Maintenance request opened", body = MaintenanceRequest),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Maintenance"
)]
#[tracing::instrument(skip(context, user_context, req), fields(user_id = %user_context.user_id, property_id = %req.property_id))]
pub async fn handler(
    State(context): State<AppState>,
    Extension(user_context): Extension<UserContext>,
    Json(req): Json<CreateMaintenanceRequest>,
) -> Result<Json<MaintenanceRequest>, CreateMaintenanceErr> {
    req.validate()?;

    let scope = crate::api::permissions::caller_scope(&context.db, &user_context).await?;
    crate::api::permissions::ensure_property_access(&scope, &req.property_id)?;

    let request = maintenance_create::create_maintenance_request(&context.db, req).await?;

    tracing::info!(id = %request.id, "opened maintenance request");
    Ok(Json(request))
}
