use axum::{
    Json,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use model_user::UserContext;
use model_user::response::ErrorResponse;

use crate::error::HavenAuthError;
use crate::jwt::JwtValidationArgs;

/// Decodes the bearer JWT and attaches a [`UserContext`] with the user id,
/// email, and role to the request. Use this on every route where the caller
/// must be authenticated; the auth endpoints themselves stay outside it.
pub async fn handler(
    State(jwt_validation_args): State<JwtValidationArgs>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let access_token =
        match crate::headers::extract_access_token_from_request_headers(req.headers()) {
            Ok(access_token) => access_token,
            Err(e) => {
                tracing::trace!(error = ?e, "unable to get access token");
                return Err(unauthorized("unauthorized"));
            }
        };

    let claims = crate::jwt::validate_access_token(&access_token, &jwt_validation_args).map_err(
        |e| match e {
            HavenAuthError::JwtExpired => unauthorized("jwt expired"),
            _ => {
                tracing::error!(error = ?e, "unable to decode jwt");
                unauthorized("unauthorized")
            }
        },
    )?;

    req.extensions_mut().insert(UserContext {
        user_id: claims.sub,
        email: claims.email,
        role: claims.role,
    });

    Ok(next.run(req).await)
}

fn unauthorized(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorResponse::new(message)),
    )
        .into_response()
}
