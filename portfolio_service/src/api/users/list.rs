use axum::{
    Json,
    extract::{Extension, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::api::context::AppState;
use crate::api::permissions::PermissionError;
use model_user::{UserContext, UsersResponse};
use portfolio_db_client::error::PortfolioDatabaseError;
use portfolio_db_client::users::list as users_list;

#[derive(Debug, Error)]
pub enum ListUsersErr {
    #[error("Database error: {0}")]
    Database(#[from] PortfolioDatabaseError),

    #[error("Permission error: {0}")]
    Permission(#[from] PermissionError),
}

impl IntoResponse for ListUsersErr {
    fn into_response(self) -> Response {
        let status_code = match &self {
            ListUsersErr::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ListUsersErr::Permission(e) => e.status_code(),
        };

        if status_code.is_server_error() {
            tracing::error!(
                error = ?self,
                error_type = "ListUsersErr",
                "Internal server error"
            );
        }

        (status_code, self.to_string()).into_response()
    }
}

/// List all users. Superadmin only.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Users retrieved successfully", body = UsersResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - caller is not a superadmin"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Users"
)]
#[tracing::instrument(skip(context, user_context), fields(user_id = %user_context.user_id))]
pub async fn handler(
    State(context): State<AppState>,
    Extension(user_context): Extension<UserContext>,
) -> Result<Json<UsersResponse>, ListUsersErr> {
    crate::api::permissions::require_superadmin(&context.db, &user_context).await?;

    let users = users_list::list_users(&context.db).await?;

    tracing::info!(count = users.len(), "retrieved users");
    Ok(Json(UsersResponse { users }))
}
