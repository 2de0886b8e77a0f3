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
use models_portfolio::api::UpdateProperty;
use portfolio_db_client::error::PortfolioDatabaseError;
use portfolio_db_client::properties::update as properties_update;

#[derive(Debug, Error)]
pub enum UpdatePropertyErr {
    #[error("property not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(PortfolioDatabaseError),

    #[error("Permission error: {0}")]
    Permission(#[from] PermissionError),
}

impl From<PortfolioDatabaseError> for UpdatePropertyErr {
    fn from(e: PortfolioDatabaseError) -> Self {
        if e.is_not_found() {
            UpdatePropertyErr::NotFound
        } else {
            UpdatePropertyErr::Database(e)
        }
    }
}

impl IntoResponse for UpdatePropertyErr {
    fn into_response(self) -> Response {
        let status_code = match &self {
            UpdatePropertyErr::NotFound => StatusCode::NOT_FOUND,
            UpdatePropertyErr::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            UpdatePropertyErr::Permission(e) => e.status_code(),
        };

        if status_code.is_server_error() {
            tracing::error!(
                error = ?self,
                error_type = "UpdatePropertyErr",
                "Internal server error"
            );
        }

        (status_code, self.to_string()).into_response()
    }
}

/// Merge-patch a property
#[utoipa::path(
    patch,
    path = "/properties/{id}",
    params(("id" = String, Path, description = "Property id")),
    request_body = UpdateProperty,
    responses(
        (status = 200, description = "Property updated", body = Property),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Property not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Properties"
)]
#[tracing::instrument(skip(context, user_context, req), fields(user_id = %user_context.user_id))]
pub async fn handler(
    Path(id): Path<String>,
    State(context): State<AppState>,
    Extension(user_context): Extension<UserContext>,
    Json(req): Json<UpdateProperty>,
) -> Result<Json<Property>, UpdatePropertyErr> {
    let scope = crate::api::permissions::caller_scope(&context.db, &user_context).await?;
    crate::api::permissions::ensure_property_access(&scope, &id)?;

    let property = properties_update::update_property(&context.db, &id, req).await?;

    tracing::info!(id = %id, "updated property");
    Ok(Json(property))
}
