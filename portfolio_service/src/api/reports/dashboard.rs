use axum::{
    Json,
    extract::{Extension, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use thiserror::Error;

use crate::api::context::AppState;
use crate::api::permissions::PermissionError;
use crate::domain::stats::{dashboard_rates, dashboard_stats};
use model_user::UserContext;
use models_portfolio::api::DashboardReport;
use portfolio_db_client::error::PortfolioDatabaseError;

#[derive(Debug, Error)]
pub enum DashboardReportErr {
    #[error("Database error: {0}")]
    Database(#[from] PortfolioDatabaseError),

    #[error("Permission error: {0}")]
    Permission(#[from] PermissionError),
}

impl IntoResponse for DashboardReportErr {
    fn into_response(self) -> Response {
        let status_code = match &self {
            DashboardReportErr::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            DashboardReportErr::Permission(e) => e.status_code(),
        };

        if status_code.is_server_error() {
            tracing::error!(
                error = ?self,
                error_type = "DashboardReportErr",
                "Internal server error"
            );
        }

        (status_code, self.to_string()).into_response()
    }
}

/// Dashboard stats and rates over the caller's visible records
#[utoipa::path(
    get,
    path = "/reports/dashboard",
    responses(
        (status = 200, description = "Dashboard report computed", body = DashboardReport),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Reports"
)]
#[tracing::instrument(skip(context, user_context), fields(user_id = %user_context.user_id))]
pub async fn handler(
    State(context): State<AppState>,
    Extension(user_context): Extension<UserContext>,
) -> Result<Json<DashboardReport>, DashboardReportErr> {
    let scope = crate::api::permissions::caller_scope(&context.db, &user_context).await?;

    let (properties, maintenance, payments) = tokio::try_join!(
        portfolio_db_client::properties::list::list_properties(&context.db, &scope),
        portfolio_db_client::maintenance_requests::list::list_maintenance_requests(
            &context.db,
            &scope
        ),
        portfolio_db_client::payments::list::list_payments(&context.db, &scope),
    )?;

    let stats = dashboard_stats(&properties, &maintenance, &payments, Utc::now());
    let rates = dashboard_rates(&stats, &payments);

    tracing::info!(
        total_properties = stats.total_properties,
        monthly_revenue = stats.monthly_revenue,
        "computed dashboard report"
    );
    Ok(Json(DashboardReport { stats, rates }))
}
