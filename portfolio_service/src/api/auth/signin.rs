use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::api::context::AppState;
use haven_auth::error::HavenAuthError;
use model_user::{AuthResponse, SignInRequest, User};
use portfolio_db_client::error::PortfolioDatabaseError;
use portfolio_db_client::users::get as users_get;

#[derive(Debug, Error)]
pub enum SignInErr {
    /// Unknown email and wrong password answer identically.
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("Database error: {0}")]
    Database(#[from] PortfolioDatabaseError),

    #[error("Auth error: {0}")]
    Auth(#[from] HavenAuthError),
}

impl IntoResponse for SignInErr {
    fn into_response(self) -> Response {
        let status_code = match &self {
            SignInErr::InvalidCredentials => StatusCode::UNAUTHORIZED,
            SignInErr::Database(_) | SignInErr::Auth(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status_code.is_server_error() {
            tracing::error!(error = ?self, error_type = "SignInErr", "Internal server error");
        }

        (status_code, self.to_string()).into_response()
    }
}

/// Sign in with email and password
#[utoipa::path(
    post,
    path = "/auth/signin",
    request_body = SignInRequest,
    responses(
        (status = 200, description = "Signed in", body = AuthResponse),
        (status = 401, description = "Invalid email or password"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
#[tracing::instrument(skip(context, req))]
pub async fn handler(
    State(context): State<AppState>,
    Json(req): Json<SignInRequest>,
) -> Result<Json<AuthResponse>, SignInErr> {
    let email = req.email.to_lowercase();
    tracing::info!(email = %email, "sign in");

    let document = users_get::get_user_by_email(&context.db, &email)
        .await?
        .ok_or(SignInErr::InvalidCredentials)?;

    let matches = haven_auth::password::verify_password(&req.password, &document.password_hash)?;
    if !matches {
        tracing::info!(email = %email, "password mismatch");
        return Err(SignInErr::InvalidCredentials);
    }

    let user = User::from(document);
    let token = haven_auth::jwt::issue_access_token(&user, &context.jwt_args)?;

    tracing::info!(user_id = %user.id, "signed in");
    Ok(Json(AuthResponse { token, user }))
}
