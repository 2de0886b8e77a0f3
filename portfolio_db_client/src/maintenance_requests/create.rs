//! Maintenance request insert operations.

use chrono::Utc;
use models_portfolio::{MaintenanceRequest, MaintenanceStatus};
use models_portfolio::api::CreateMaintenanceRequest;
use models_portfolio::db::MaintenanceRequestDocument;
use mongodb::Database;
use uuid::Uuid;

use crate::error::PortfolioDatabaseError;

type Result<T> = std::result::Result<T, PortfolioDatabaseError>;

/// Inserts a new maintenance request. Requests always start `open`;
/// created/updated timestamps are stamped here.
#[tracing::instrument(skip(db, input), fields(property_id = %input.property_id))]
pub async fn create_maintenance_request(
    db: &Database,
    input: CreateMaintenanceRequest,
) -> Result<MaintenanceRequest> {
    let now = Utc::now();
    let request = MaintenanceRequest {
        id: Uuid::now_v7().to_string(),
        property_id: input.property_id,
        tenant_id: input.tenant_id,
        title: input.title,
        description: input.description,
        priority: input.priority,
        status: MaintenanceStatus::Open,
        category: input.category,
        assigned_to: input.assigned_to,
        created_at: now,
        updated_at: now,
        completed_at: None,
        estimated_cost: input.estimated_cost,
        actual_cost: None,
    };

    super::collection(db)
        .insert_one(MaintenanceRequestDocument::from(request.clone()))
        .await
        .map_err(|e| {
            tracing::error!(error = ?e, "failed to insert maintenance request");
            PortfolioDatabaseError::Query(e)
        })?;

    tracing::info!(id = %request.id, "created maintenance request");
    Ok(request)
}
