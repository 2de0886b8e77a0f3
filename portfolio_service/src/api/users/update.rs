use axum::{
    Json,
    extract::{Extension, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::api::context::AppState;
use crate::api::permissions::PermissionError;
use model_user::{UpdateUserRequest, User, UserContext};
use portfolio_db_client::error::PortfolioDatabaseError;
use portfolio_db_client::users::update as users_update;

#[derive(Debug, Error)]
pub enum UpdateUserErr {
    #[error("user not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(PortfolioDatabaseError),

    #[error("Permission error: {0}")]
    Permission(#[from] PermissionError),
}

impl From<PortfolioDatabaseError> for UpdateUserErr {
    fn from(e: PortfolioDatabaseError) -> Self {
        if e.is_not_found() {
            UpdateUserErr::NotFound
        } else {
            UpdateUserErr::Database(e)
        }
    }
}

impl IntoResponse for UpdateUserErr {
    fn into_response(self) -> Response {
        let status_code = match &self {
            UpdateUserErr::NotFound => StatusCode::NOT_FOUND,
            UpdateUserErr::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            UpdateUserErr::Permission(e) => e.status_code(),
        };

        if status_code.is_server_error() {
            tracing::error!(
                error = ?self,
                error_type = "UpdateUserErr",
                "Internal server error"
            );
        }

        (status_code, self.to_string()).into_response()
    }
}

/// Update a user's role and/or property assignments. Superadmin only.
#[utoipa::path(
    patch,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User id")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - caller is not a superadmin"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Users"
)]
#[tracing::instrument(skip(context, user_context, req), fields(user_id = %user_context.user_id, target = %id))]
pub async fn handler(
    Path(id): Path<String>,
    State(context): State<AppState>,
    Extension(user_context): Extension<UserContext>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<User>, UpdateUserErr> {
    crate::api::permissions::require_superadmin(&context.db, &user_context).await?;

    let user = users_update::update_user(&context.db, &id, req).await?;

    tracing::info!(target = %id, role = %user.role, "updated user");
    Ok(Json(user))
}
