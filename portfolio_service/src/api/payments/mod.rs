use axum::Router;
use axum::routing::get;

use crate::api::context::AppState;

pub mod create;
pub mod list;
pub mod update;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/payments", get(list::handler).post(create::handler))
        .route("/payments/{id}", axum::routing::patch(update::handler))
}
