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
use models_portfolio::Payment;
use models_portfolio::api::{CreatePayment, ValidationError};
use portfolio_db_client::error::PortfolioDatabaseError;
use portfolio_db_client::payments::create as payments_create;

#[derive(Debug, Error)]
pub enum CreatePaymentErr {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Database error: {0}")]
    Database(#[from] PortfolioDatabaseError),

    #[error("Permission error: {0}")]
    Permission(#[from] PermissionError),
}

impl IntoResponse for CreatePaymentErr {
    fn into_response(self) -> Response {
        let status_code = match &self {
            CreatePaymentErr::Validation(_) => StatusCode::BAD_REQUEST,
            CreatePaymentErr::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CreatePaymentErr::Permission(e) => e.status_code(),
        };

        if status_code.is_server_error() {
            tracing::error!(
                error = ?self,
                error_type = "CreatePaymentErr",
                "Internal server error"
            );
        }

        (status_code, self.to_string()).into_response()
    }
}

/// Record a payment
#[utoipa::path(
    post,
    path = "/payments",
    request_body = CreatePayment,
    responses(
        (status = 200, description = "Payment recorded", body = Payment),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Payments"
)]
#[tracing::instrument(skip(context, user_context, req), fields(user_id = %user_context.user_id, property_id = %req.property_id))]
pub async fn handler(
    State(context): State<AppState>,
    Extension(user_context): Extension<UserContext>,
    Json(req): Json<CreatePayment>,
) -> Result<Json<Payment>, CreatePaymentErr> {
    req.validate()?;

    let scope = crate::api::permissions::caller_scope(&context.db, &user_context).await?;
    crate::api::permissions::ensure_property_access(&scope, &req.property_id)?;

    let payment = payments_create::create_payment(&context.db, req).await?;

    tracing::info!(id = %payment.id, "recorded payment");
    Ok(Json(payment))
}
