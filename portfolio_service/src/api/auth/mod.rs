use axum::Router;
use axum::routing::post;

use crate::api::context::AppState;

pub mod me;
pub mod reset_password;
pub mod signin;
pub mod signup;

/// The unauthenticated auth surface. `/auth/me` is registered with the
/// protected routes instead, since it needs a decoded token.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(signup::handler))
        .route("/auth/signin", post(signin::handler))
        .route("/auth/reset-password", post(reset_password::handler))
}
