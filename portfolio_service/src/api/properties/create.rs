use axum::{
    Json,
    extract::{Extension, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::api::context::AppState;
use model_user::{Role, UserContext};
use models_portfolio::Property;
use models_portfolio::api::{CreateProperty, ValidationError};
use portfolio_db_client::error::PortfolioDatabaseError;
use portfolio_db_client::properties::create as properties_create;
use portfolio_db_client::users::update as users_update;

#[derive(Debug, Error)]
pub enum CreatePropertyErr {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Database error: {0}")]
    Database(#[from] PortfolioDatabaseError),
}

impl IntoResponse for CreatePropertyErr {
    fn into_response(self) -> Response {
        let status_code = match &self {
            CreatePropertyErr::Validation(_) => StatusCode::BAD_REQUEST,
            CreatePropertyErr::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status_code.is_server_error() {
            tracing::error!(
                error = ?self,
                error_type = "CreatePropertyErr",
                "Internal server error"
            );
        }

        (status_code, self.to_string()).into_response()
    }
}

/// Create a property
#[utoipa::path(
    post,
    path = "/properties",
    request_body = CreateProperty,
    responses(
        (status = 200, description = "Property created", body = Property),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Properties"
)]
#[tracing::instrument(skip(context, user_context, req), fields(user_id = %user_context.user_id, name = %req.name))]
pub async fn handler(
    State(context): State<AppState>,
    Extension(user_context): Extension<UserContext>,
    Json(req): Json<CreateProperty>,
) -> Result<Json<Property>, CreatePropertyErr> {
    req.validate()?;

    let property =
        properties_create::create_property(&context.db, req, &user_context.user_id).await?;

    // A manager's own creation must land inside their visibility scope, or
    // the record vanishes from their next list call
    if user_context.role == Role::PropertyManager {
        users_update::add_assigned_property(&context.db, &user_context.user_id, &property.id)
            .await?;
    }

    tracing::info!(id = %property.id, "created property");
    Ok(Json(property))
}
