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
use models_portfolio::Property;
use portfolio_db_client::error::PortfolioDatabaseError;
use portfolio_db_client::properties::get as properties_get;

#[derive(Debug, Error)]
pub enum GetPropertyErr {
    #[error("property not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(PortfolioDatabaseError),

    #[error("Permission error: {0}")]
    Permission(#[from] PermissionError),
}

impl From<PortfolioDatabaseError> for GetPropertyErr {
    fn from(e: PortfolioDatabaseError) -> Self {
        if e.is_not_found() {
            GetPropertyErr::NotFound
        } else {
            GetPropertyErr::Database(e)
        }
    }
}

impl IntoResponse for GetPropertyErr {
    fn into_response(self) -> Response {
        let status_code = match &self {
            GetPropertyErr::NotFound => StatusCode::NOT_FOUND,
            GetPropertyErr::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            GetPropertyErr::Permission(e) => e.status_code(),
        };

        if status_code.is_server_error() {
            tracing::error!(
                error = ?self,
                error_type = "GetPropertyErr",
                "Internal server error"
            );
        }

        (status_code, self.to_string()).into_response()
    }
}

/// Get a property by id
#[utoipa::path(
    get,
    path = "/properties/{id}",
    params(("id" = String, Path, description = "Property id")),
    responses(
        (status = 200, description = "Property retrieved", body = Property),
        (status = 401, description = "Unauthorized"),
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
) -> Result<Json<Property>, GetPropertyErr> {
    let scope = crate::api::permissions::caller_scope(&context.db, &user_context).await?;

    // An id outside the caller's scope reads the same as a missing one
    if !scope.allows_property(&id) {
        return Err(GetPropertyErr::NotFound);
    }

    let property = properties_get::get_property(&context.db, &id).await?;
    Ok(Json(property))
}
