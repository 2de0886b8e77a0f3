use axum::{Router, routing};

use crate::api::context::AppState;

pub mod create;
pub mod get;
pub mod list;
pub mod update;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tenants", routing::get(list::handler).post(create::handler))
        .route(
            "/tenants/{id}",
            routing::get(get::handler).patch(update::handler),
        )
}
