use axum::{
    Json,
    extract::{Extension, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::api::context::AppState;
use model_user::{User, UserContext};
use portfolio_db_client::error::PortfolioDatabaseError;
use portfolio_db_client::users::get as users_get;

#[derive(Debug, Error)]
pub enum GetMeErr {
    /// A valid token for a user that no longer exists is a dead session.
    #[error("unauthorized")]
    UnknownUser,

    #[error("Database error: {0}")]
    Database(PortfolioDatabaseError),
}

impl From<PortfolioDatabaseError> for GetMeErr {
    fn from(e: PortfolioDatabaseError) -> Self {
        if e.is_not_found() {
            GetMeErr::UnknownUser
        } else {
            GetMeErr::Database(e)
        }
    }
}

impl IntoResponse for GetMeErr {
    fn into_response(self) -> Response {
        let status_code = match &self {
            GetMeErr::UnknownUser => StatusCode::UNAUTHORIZED,
            GetMeErr::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status_code.is_server_error() {
            tracing::error!(error = ?self, error_type = "GetMeErr", "Internal server error");
        }

        (status_code, self.to_string()).into_response()
    }
}

/// The signed-in caller's user record
#[utoipa::path(
    get,
    path = "/auth/me",
    responses(
        (status = 200, description = "Caller's user record", body = User),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
#[tracing::instrument(skip(context, user_context), fields(user_id = %user_context.user_id))]
pub async fn handler(
    State(context): State<AppState>,
    Extension(user_context): Extension<UserContext>,
) -> Result<Json<User>, GetMeErr> {
    let user = users_get::get_user(&context.db, &user_context.user_id).await?;
    Ok(Json(user))
}
