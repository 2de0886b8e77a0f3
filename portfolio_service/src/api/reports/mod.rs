use axum::Router;
use axum::routing::get;

use crate::api::context::AppState;

pub mod activity;
pub mod dashboard;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/reports/dashboard", get(dashboard::handler))
        .route("/reports/activity", get(activity::handler))
}
