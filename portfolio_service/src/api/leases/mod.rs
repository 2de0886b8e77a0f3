use axum::Router;
use axum::routing::{get, post};

use crate::api::context::AppState;

pub mod list;
pub mod renew;
pub mod terminate;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/leases", get(list::handler))
        .route("/leases/{tenant_id}/renew", post(renew::handler))
        .route("/leases/{tenant_id}/terminate", post(terminate::handler))
}
