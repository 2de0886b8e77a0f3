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
use model_user::response::EmptyResponse;
use portfolio_db_client::error::PortfolioDatabaseError;
use portfolio_db_client::properties::delete as properties_delete;

#[derive(Debug, Error)]
pub enum DeletePropertyErr {
    #[error("property not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(PortfolioDatabaseError),

    #[error("Permission error: {0}")]
    Permission(#[from] PermissionError),
}

impl From<PortfolioDatabaseError> for DeletePropertyErr {
    fn from(e: PortfolioDatabaseError) -> Self {
        if e.is_not_found() {
            DeletePropertyErr::NotFound
        } else {
            DeletePropertyErr::Database(e)
        }
    }
}

impl IntoResponse for DeletePropertyErr {
    fn into_response(self) -> Response {
        let status_code = match &self {
            DeletePropertyErr::NotFound => StatusCode::NOT_FOUND,
            DeletePropertyErr::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            DeletePropertyErr::Permission(e) => e.status_code(),
        };

        if status_code.is_server_error() {
            tracing::error!(
                error = ?self,
                error_type = "DeletePropertyErr",
                "Internal server error"
            );
        }

        (status_code, self.to_string()).into_response()
    }
}

/// Delete a property
#[utoipa::path(
    delete,
    path = "/properties/{id}",
    params(("id" = String, Path, description = "Property id")),
    responses(
        (status = 200, description = "Property deleted", body = EmptyResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Property not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Properties"
)]
#[tracing::instrument(skip(context, user_context), fields(user_id = %user_context.user_id))]
pub async fn handler(
    Path(id): Path<String>,
    State(context): State<AppState>,
    Extension(user_context): Extension<UserContext>,
) -> Result<Json<EmptyResponse>, DeletePropertyErr> {
    let scope = crate::api::permissions::caller_scope(&context.db, &user_context).await?;
    crate::api::permissions::ensure_property_access(&scope, &id)?;

    properties_delete::delete_property(&context.db, &id).await?;

    tracing::info!(id = %id, "deleted property");
    Ok(Json(EmptyResponse::default()))
}
