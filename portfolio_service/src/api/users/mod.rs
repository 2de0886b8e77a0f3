use axum::Router;
use axum::routing::{get, patch};

use crate::api::context::AppState;

pub mod list;
pub mod update;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list::handler))
        .route("/users/{id}", patch(update::handler))
}
