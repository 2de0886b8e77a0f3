use axum::Router;
use axum::routing::get;

use crate::api::context::AppState;

pub mod create;
pub mod list;
pub mod update;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/maintenance", get(list::handler).post(create::handler))
        .route("/maintenance/{id}", axum::routing::patch(update::handler))
}
