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
use models_portfolio::api::PaymentsResponse;
use portfolio_db_client::error::PortfolioDatabaseError;
use portfolio_db_client::payments::list as payments_list;

#[derive(Debug, Error)]
pub enum ListPaymentsErr {
    #[error("Database error: {0}")]
    Database(#[from] PortfolioDatabaseError),

    #[error("Permission error: {0}")]
    Permission(#[from] PermissionError),
}

impl IntoResponse for ListPaymentsErr {
    fn into_response(self) -> Response {
        let status_code = match &self {
            ListPaymentsErr::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ListPaymentsErr::Permission(e) => e.status_code(),
        };

        if status_code.is_server_error() {
            tracing::error!(
                error = ?self,
                error_type = "ListPaymentsErr",
                "Internal server error"
            );
        }

        (status_code, self.to_string()).into_response()
    }
}

/// List every payment visible to the caller
#[utoipa::path(
    get,
    path = "/payments",
    responses(
        (status = 200, description = "Payments retrieved successfully", body = PaymentsResponse),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Payments"
)]
#[tracing::instrument(skip(context, user_context), fields(user_id = %user_context.user_id))]
pub async fn handler(
    State(context): State<AppState>,
    Extension(user_context): Extension<UserContext>,
) -> Result<Json<PaymentsResponse>, ListPaymentsErr> {
    let scope = crate::api::permissions::caller_scope(&context.db, &user_context).await?;
    let payments = payments_list::list_payments(&context.db, &scope).await?;

    tracing::info!(count = payments.len(), "retrieved payments");
    Ok(Json(PaymentsResponse { payments }))
}
