use axum::{
    Json,
    extract::{Extension, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::api::context::AppState;
use crate::api::permissions::PermissionError;
use crate::domain::search::search_records;
use model_user::UserContext;
use models_portfolio::api::{SearchQueryParams, SearchResponse};
use portfolio_db_client::error::PortfolioDatabaseError;

#[derive(Debug, Error)]
pub enum SearchErr {
    #[error("Database error: {0}")]
    Database(#[from] PortfolioDatabaseError),

    #[error("Permission error: {0}")]
    Permission(#[from] PermissionError),
}

impl IntoResponse for SearchErr {
    fn into_response(self) -> Response {
        let status_code = match &self {
            SearchErr::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            SearchErr::Permission(e) => e.status_code(),
        };

        if status_code.is_server_error() {
            tracing::error!(error = ?self, error_type = "SearchErr", "Internal server error");
        }

        (status_code, self.to_string()).into_response()
    }
}

/// Search properties and tenants inside the caller's visibility scope
#[utoipa::path(
    get,
    path = "/search",
    params(SearchQueryParams),
    responses(
        (status = 200, description = "Search results", body = SearchResponse),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Search"
)]
#[tracing::instrument(skip(context, user_context), fields(user_id = %user_context.user_id, query = %params.query))]
pub async fn handler(
    Query(params): Query<SearchQueryParams>,
    State(context): State<AppState>,
    Extension(user_context): Extension<UserContext>,
) -> Result<Json<SearchResponse>, SearchErr> {
    let scope = crate::api::permissions::caller_scope(&context.db, &user_context).await?;

    let (properties, tenants) = tokio::try_join!(
        portfolio_db_client::properties::list::list_properties(&context.db, &scope),
        portfolio_db_client::tenants::list::list_tenants(&context.db, &scope),
    )?;

    let (properties, tenants) = search_records(&params.query, properties, tenants);

    tracing::info!(
        properties = properties.len(),
        tenants = tenants.len(),
        "search complete"
    );
    Ok(Json(SearchResponse {
        properties,
        tenants,
    }))
}
