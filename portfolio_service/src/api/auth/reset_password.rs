use axum::{Json, extract::State, http::StatusCode};

use crate::api::context::AppState;
use model_user::ResetPasswordRequest;
use model_user::response::EmptyResponse;

/// Start a password reset. Always answers 202 so the endpoint never
/// discloses whether an account exists; the actual reset email is the mail
/// provider's problem.
#[utoipa::path(
    post,
    path = "/auth/reset-password",
    request_body = ResetPasswordRequest,
    responses(
        (status = 202, description = "Reset request accepted", body = EmptyResponse),
    ),
    tag = "Auth"
)]
#[tracing::instrument(skip(_context, req))]
pub async fn handler(
    State(_context): State<AppState>,
    Json(req): Json<ResetPasswordRequest>,
) -> (StatusCode, Json<EmptyResponse>) {
    tracing::info!(email = %req.email.to_lowercase(), "password reset requested");
    (StatusCode::ACCEPTED, Json(EmptyResponse::default()))
}
