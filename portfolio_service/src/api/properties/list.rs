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
use models_portfolio::api::PropertiesResponse;
use portfolio_db_client::error::PortfolioDatabaseError;
use portfolio_db_client::properties::list as properties_list;

#[derive(Debug, Error)]
pub enum ListPropertiesErr {
    #[error("Database error: {0}")]
    Database(#[from] PortfolioDatabaseError),

    #[error("Permission error: {0}")]
    Permission(#[from] PermissionError),
}

impl IntoResponse for ListPropertiesErr {
    fn into_response(self) -> Response {
        let status_code = match &self {
            ListPropertiesErr::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ListPropertiesErr::Permission(e) => e.status_code(),
        };

        if status_code.is_server_error() {
            tracing::error!(
                error = ?self,
                error_type = "ListPropertiesErr",
                "Internal server error"
            );
        }

        (status_code, self.to_string()).into_response()
    }
}

/// List every property visible to the caller
#[utoipa::path(
    get,
    path = "/properties",
    responses(
        (status = 200, description = "Properties retrieved successfully", body = PropertiesResponse),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Properties"
)]
#[tracing::instrument(skip(context, user_context), fields(user_id = %user_context.user_id))]
pub async fn handler(
    State(context): State<AppState>,
    Extension(user_context): Extension<UserContext>,
) -> Result<Json<PropertiesResponse>, ListPropertiesErr> {
    let scope = crate::api::permissions::caller_scope(&context.db, &user_context).await?;
    let properties = properties_list::list_properties(&context.db, &scope).await?;

    tracing::info!(count = properties.len(), "retrieved properties");
    Ok(Json(PropertiesResponse { properties }))
}
