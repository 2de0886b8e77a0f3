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
use models_portfolio::Payment;
use models_portfolio::api::UpdatePayment;
use portfolio_db_client::error::PortfolioDatabaseError;
use portfolio_db_client::payments::{get as payments_get, update as payments_update};

#[derive(Debug, Error)]
pub enum UpdatePaymentErr {
    #[error("payment not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(PortfolioDatabaseError),

    #[error("Permission error: {0}")]
    Permission(#[from] PermissionError),
}

impl From<PortfolioDatabaseError> for UpdatePaymentErr {
    fn from(e: PortfolioDatabaseError) -> Self {
        if e.is_not_found() {
            UpdatePaymentErr::NotFound
        } else {
            UpdatePaymentErr::Database(e)
        }
    }
}

impl IntoResponse for UpdatePaymentErr {
    fn into_response(self) -> Response {
        let status_code = match &self {
            UpdatePaymentErr::NotFound => StatusCode::NOT_FOUND,
            UpdatePaymentErr::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            UpdatePaymentErr::Permission(e) => e.status_code(),
        };

        if status_code.is_server_error() {
            tracing::error!(
                error = ?self,
                error_type = "UpdatePaymentErr",
                "Internal server error"
            );
        }

        (status_code, self.to_string()).into_response()
    }
}

/// Merge-patch a payment, typically to settle it
#[utoipa::path(
    patch,
    path = "/payments/{id}",
    params(("id" = String, Path, description = "Payment id")),
    request_body = UpdatePayment,
    responses(
        (status = 200, description = "Payment updated", body = Payment),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Payment not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Payments"
)]
#[tracing::instrument(skip(context, user_context, req), fields(user_id = %user_context.user_id))]
pub async fn handler(
    Path(id): Path<String>,
    State(context): State<AppState>,
    Extension(user_context): Extension<UserContext>,
    Json(req): Json<UpdatePayment>,
) -> Result<Json<Payment>, UpdatePaymentErr> {
    let scope = crate::api::permissions::caller_scope(&context.db, &user_context).await?;

    let existing = payments_get::get_payment(&context.db, &id).await?;
    crate::api::permissions::ensure_property_access(&scope, &existing.property_id)?;

    let payment = payments_update::update_payment(&context.db, &id, req).await?;

    tracing::info!(id = %id, "updated payment");
    Ok(Json(payment))
}
