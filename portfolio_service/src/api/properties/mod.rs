use axum::{Router, routing};

use crate::api::context::AppState;

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/properties",
            routing::get(list::handler).post(create::handler),
        )
        .route(
            "/properties/{id}",
            routing::get(get::handler)
                .patch(update::handler)
                .delete(delete::handler),
        )
}
