use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::api::context::AppState;
use haven_auth::error::HavenAuthError;
use model_user::{AuthResponse, SignUpRequest};
use portfolio_db_client::error::PortfolioDatabaseError;
use portfolio_db_client::users::{create as users_create, get as users_get};

const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Debug, Error)]
pub enum SignUpErr {
    #[error("{0}")]
    Invalid(&'static str),

    #[error("email already exists")]
    EmailExists,

    #[error("Database error: {0}")]
    Database(#[from] PortfolioDatabaseError),

    #[error("Auth error: {0}")]
    Auth(#[from] HavenAuthError),
}

impl IntoResponse for SignUpErr {
    fn into_response(self) -> Response {
        let status_code = match &self {
            SignUpErr::Invalid(_) | SignUpErr::EmailExists => StatusCode::BAD_REQUEST,
            SignUpErr::Database(_) | SignUpErr::Auth(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status_code.is_server_error() {
            tracing::error!(error = ?self, error_type = "SignUpErr", "Internal server error");
        }

        (status_code, self.to_string()).into_response()
    }
}

/// Register a new account. New users start as property managers with an
/// empty assignment list; a superadmin promotes them later.
#[utoipa::path(
    post,
    path = "/auth/signup",
    request_body = SignUpRequest,
    responses(
        (status = 200, description = "Account created", body = AuthResponse),
        (status = 400, description = "Validation failed or email already exists"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
#[tracing::instrument(skip(context, req))]
pub async fn handler(
    State(context): State<AppState>,
    Json(req): Json<SignUpRequest>,
) -> Result<Json<AuthResponse>, SignUpErr> {
    if req.name.trim().is_empty() {
        return Err(SignUpErr::Invalid("name is required"));
    }
    if !req.email.contains('@') {
        return Err(SignUpErr::Invalid("email is not valid"));
    }
    if req.password.len() < MIN_PASSWORD_LENGTH {
        return Err(SignUpErr::Invalid("password must be at least 8 characters"));
    }

    let email = req.email.to_lowercase();
    tracing::info!(email = %email, "sign up");

    let existing = users_get::get_user_by_email(&context.db, &email).await?;
    if existing.is_some() {
        return Err(SignUpErr::EmailExists);
    }

    let password_hash = haven_auth::password::hash_password(&req.password)?;
    let user = users_create::create_user(&context.db, req.name.trim(), &email, password_hash)
        .await?;

    let token = haven_auth::jwt::issue_access_token(&user, &context.jwt_args)?;

    tracing::info!(user_id = %user.id, "signed up");
    Ok(Json(AuthResponse { token, user }))
}
