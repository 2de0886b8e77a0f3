use axum::{
    Json,
    extract::{Extension, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use thiserror::Error;

use crate::api::context::AppState;
use crate::api::permissions::PermissionError;
use crate::domain::activity::recent_activity;
use model_user::UserContext;
use models_portfolio::api::ActivityFeedResponse;
use portfolio_db_client::error::PortfolioDatabaseError;

#[derive(Debug, Error)]
pub enum ActivityFeedErr {
    #[error("Database error: {0}")]
    Database(#[from] PortfolioDatabaseError),

    #[error("Permission error: {0}")]
    Permission(#[from] PermissionError),
}

impl IntoResponse for ActivityFeedErr {
    fn into_response(self) -> Response {
        let status_code = match &self {
            ActivityFeedErr::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ActivityFeedErr::Permission(e) => e.status_code(),
        };

        if status_code.is_server_error() {
            tracing::error!(
                error = ?self,
                error_type = "ActivityFeedErr",
                "Internal server error"
            );
        }

        (status_code, self.to_string()).into_response()
    }
}

/// Recent activity across the caller's visible records, newest first
#[utoipa::path(
    get,
    path = "/reports/activity",
    responses(
        (status = 200, description = "Activity feed computed", body = ActivityFeedResponse),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Reports"
)]
#[tracing::instrument(skip(context, user_context), fields(user_id = %user_context.user_id))]
pub async fn handler(
    State(context): State<AppState>,
    Extension(user_context): Extension<UserContext>,
) -> Result<Json<ActivityFeedResponse>, ActivityFeedErr> {
    let scope = crate::api::permissions::caller_scope(&context.db, &user_context).await?;

    let (properties, maintenance, payments) = tokio::try_join!(
        portfolio_db_client::properties::list::list_properties(&context.db, &scope),
        portfolio_db_client::maintenance_requests::list::list_maintenance_requests(
            &context.db,
            &scope
        ),
        portfolio_db_client::payments::list::list_payments(&context.db, &scope),
    )?;

    let events = recent_activity(&properties, &maintenance, &payments, Utc::now());

    tracing::info!(count = events.len(), "computed activity feed");
    Ok(Json(ActivityFeedResponse { events }))
}
